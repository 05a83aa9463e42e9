use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config;
use crate::effects::viewport::{intersection_observer_supported, select_all, ViewportWatcher};

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll:not(.is-visible)";
pub const VISIBLE_CLASS: &str = "is-visible";

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

/// Adds `is-visible` to scroll-animated elements as they come into view.
///
/// Without IntersectionObserver everything is revealed at once and `None`
/// is returned.
pub fn watch(document: &Document) -> Result<Option<ViewportWatcher>, JsValue> {
    let elements = select_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(None);
    }
    if !intersection_observer_supported() {
        log::debug!("IntersectionObserver missing, revealing {} elements", elements.len());
        elements.iter().for_each(reveal);
        return Ok(None);
    }
    let watcher = ViewportWatcher::new(
        &elements,
        config::REVEAL_ROOT_MARGIN,
        config::REVEAL_THRESHOLD,
        reveal,
    )?;
    Ok(Some(watcher))
}
