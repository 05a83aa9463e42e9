use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub draggable: bool,
}

/// Placeholder `<img>` whose real source is filled in by the lazy loader.
#[function_component]
pub fn LazyImage(props: &LazyImageProps) -> Html {
    html! {
        <img
            class={classes!("lazy", props.class.clone())}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
            decoding="async"
            draggable={props.draggable.to_string()}
        />
    }
}
