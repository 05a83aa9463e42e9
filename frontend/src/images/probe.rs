use std::cell::Cell;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, HtmlImageElement};

use crate::images::format::{FormatSupport, ImageFormat};

thread_local! {
    static DETECTED: Cell<Option<FormatSupport>> = Cell::new(None);
}

async fn decodes(format: ImageFormat) -> Result<bool, JsValue> {
    let img = HtmlImageElement::new()?;
    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        // An error still resolves; natural_width tells the two apart.
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&resolve));
    });
    img.set_src(format.probe_uri());
    JsFuture::from(loaded).await?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img.natural_width() > 0)
}

async fn probe(format: ImageFormat) -> bool {
    match decodes(format).await {
        Ok(supported) => supported,
        Err(e) => {
            log::warn!("Probing {} support failed: {:?}", format.extension(), e);
            false
        }
    }
}

/// Finds out once per page which modern formats the browser decodes.
pub async fn detect() -> FormatSupport {
    if let Some(support) = DETECTED.with(Cell::get) {
        return support;
    }
    let support = FormatSupport {
        avif: probe(ImageFormat::Avif).await,
        webp: probe(ImageFormat::Webp).await,
    };
    log::debug!("Image format support: {:?}", support);
    DETECTED.with(|cell| cell.set(Some(support)));
    support
}
