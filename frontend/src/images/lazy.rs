use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::config;
use crate::effects::viewport::{intersection_observer_supported, select_all, ViewportWatcher};
use crate::images::format::{negotiate, FormatSupport};

pub const LAZY_SELECTOR: &str = "img[data-src]";
pub const LOADED_CLASS: &str = "loaded";

fn load(element: &Element, support: FormatSupport) {
    let Some(img) = element.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    let Some(original) = img.get_attribute("data-src") else {
        return;
    };
    let _ = img.remove_attribute("data-src");

    let onload = {
        let img = img.clone();
        Closure::once_into_js(move || {
            let _ = img.class_list().add_1(LOADED_CLASS);
        })
    };
    img.set_onload(Some(onload.unchecked_ref()));

    let negotiated = negotiate(&original, support);
    if negotiated != original {
        // Falls back to the original if the converted variant is missing.
        let fallback = {
            let img = img.clone();
            Closure::once_into_js(move || {
                img.set_onerror(None);
                img.set_src(&original);
            })
        };
        img.set_onerror(Some(fallback.unchecked_ref()));
    }
    img.set_src(&negotiated);
}

/// Swaps `data-src` into `src` as images approach the viewport.
pub fn watch(document: &Document, support: FormatSupport) -> Result<Option<ViewportWatcher>, JsValue> {
    let images = select_all(document, LAZY_SELECTOR);
    if images.is_empty() {
        return Ok(None);
    }
    if !intersection_observer_supported() {
        log::debug!("IntersectionObserver missing, loading {} images now", images.len());
        images.iter().for_each(|img| load(img, support));
        return Ok(None);
    }
    let watcher = ViewportWatcher::new(&images, config::LAZY_ROOT_MARGIN, 0.0, move |img| {
        load(img, support)
    })?;
    Ok(Some(watcher))
}
