use web_sys::window;
use yew::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::effects::page::PageEffects;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub path: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a routed page: scrolls to top, reports the view and enables scroll
/// effects for the freshly rendered content.
#[function_component]
pub fn Page(props: &PageProps) -> Html {
    let analytics = use_analytics();

    use_effect_with_deps(
        move |path: &AttrValue| {
            let effects = window().and_then(|win| {
                win.scroll_to_with_x_and_y(0.0, 0.0);
                win.document()
            })
            .map(|document| PageEffects::start(&document));
            track(&analytics, AnalyticsEvent::PageView { path: path.to_string() });
            move || drop(effects)
        },
        props.path.clone(),
    );

    html! {
        <main class="page">
            { for props.children.iter() }
        </main>
    }
}
