use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::effects::reveal;
use crate::effects::viewport::ViewportWatcher;
use crate::images::{lazy, probe};

/// Scroll reveal and lazy images for whatever is currently rendered.
/// Dropping it stops both.
pub struct PageEffects {
    reveal: Option<ViewportWatcher>,
    images: Rc<RefCell<Option<ViewportWatcher>>>,
    alive: Rc<Cell<bool>>,
}

impl PageEffects {
    pub fn start(document: &Document) -> Self {
        let reveal = reveal::watch(document).unwrap_or_else(|e| {
            log::warn!("Scroll reveal unavailable: {:?}", e);
            None
        });

        let images = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));
        {
            let images = images.clone();
            let alive = alive.clone();
            let document = document.clone();
            spawn_local(async move {
                let support = probe::detect().await;
                if !alive.get() {
                    return;
                }
                match lazy::watch(&document, support) {
                    Ok(watcher) => *images.borrow_mut() = watcher,
                    Err(e) => log::warn!("Lazy loading unavailable: {:?}", e),
                }
            });
        }

        Self {
            reveal,
            images,
            alive,
        }
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        self.alive.set(false);
        self.images.borrow_mut().take();
        self.reveal.take();
    }
}
