use std::cell::Cell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::components::lazy_image::LazyImage;
use crate::config;
use crate::slider::comparison;

#[derive(Properties, PartialEq, Clone)]
pub struct BeforeAfterProps {
    pub before_src: AttrValue,
    pub after_src: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::from("Before cleaning"))]
    pub before_alt: AttrValue,
    #[prop_or(AttrValue::from("After cleaning"))]
    pub after_alt: AttrValue,
    #[prop_or(config::SLIDER_INITIAL_PERCENTAGE)]
    pub initial: f64,
}

#[function_component]
pub fn BeforeAfter(props: &BeforeAfterProps) -> Html {
    let container_ref = use_node_ref();
    let analytics = use_analytics();

    {
        let container_ref = container_ref.clone();
        let label = props.label.to_string();
        use_effect_with_deps(
            move |_| {
                let reported = Rc::new(Cell::new(false));
                let slider = container_ref.cast::<HtmlElement>().and_then(|container| {
                    comparison::attach_with(&container, move || {
                        if !reported.replace(true) {
                            track(&analytics, AnalyticsEvent::SliderUsed { label: label.clone() });
                        }
                    })
                    .map_err(|e| log::warn!("Failed to attach comparison slider: {:?}", e))
                    .ok()
                });
                move || drop(slider)
            },
            (),
        );
    }

    let slider_css = r#"
        .comparison-slider {
            position: relative;
            overflow: hidden;
            aspect-ratio: 4/3;
            border-radius: 12px;
            cursor: ew-resize;
            user-select: none;
            touch-action: pan-y;
        }
        .comparison-slider:focus-visible {
            outline: 3px solid #2BB673;
            outline-offset: 3px;
        }
        .comparison-before,
        .comparison-after {
            position: absolute;
            inset: 0;
        }
        .comparison-before img,
        .comparison-after img {
            width: 100%;
            height: 100%;
            object-fit: cover;
            pointer-events: none;
        }
        .comparison-tag {
            position: absolute;
            top: 1rem;
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
            background: rgba(0, 0, 0, 0.55);
            color: white;
            font-size: 0.85rem;
        }
        .comparison-tag-before { left: 1rem; }
        .comparison-tag-after { right: 1rem; }
        .comparison-handle {
            position: absolute;
            top: 0;
            bottom: 0;
            width: 0;
            transform: translateX(-50%);
        }
        .comparison-handle-line {
            position: absolute;
            top: 0;
            bottom: 0;
            left: -1px;
            width: 2px;
            background: white;
        }
        .comparison-handle-knob {
            position: absolute;
            top: 50%;
            left: 0;
            transform: translate(-50%, -50%);
            width: 44px;
            height: 44px;
            border-radius: 50%;
            background: white;
            color: #1F3B57;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
        }
    "#;

    html! {
        <figure class="comparison">
            <style>{slider_css}</style>
            <div
                class="comparison-slider"
                ref={container_ref}
                data-initial={props.initial.to_string()}
                aria-label={format!("{} before and after comparison", props.label)}
            >
                <div class="comparison-before">
                    <LazyImage src={props.before_src.clone()} alt={props.before_alt.clone()} draggable=false />
                    <span class="comparison-tag comparison-tag-before">{"Before"}</span>
                </div>
                <div class="comparison-after">
                    <LazyImage src={props.after_src.clone()} alt={props.after_alt.clone()} draggable=false />
                    <span class="comparison-tag comparison-tag-after">{"After"}</span>
                </div>
                <div class="comparison-handle" aria-hidden="true">
                    <span class="comparison-handle-line"></span>
                    <span class="comparison-handle-knob">
                        <i class="fas fa-arrows-left-right"></i>
                    </span>
                </div>
            </div>
            <figcaption>{props.label.clone()}</figcaption>
        </figure>
    }
}
