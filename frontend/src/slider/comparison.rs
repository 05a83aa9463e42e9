use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::slider::state::{Bounds, SliderState, StepKey, MAX_PERCENTAGE, MIN_PERCENTAGE};
use crate::utils::listener::Subscription;

pub const AFTER_SELECTOR: &str = ".comparison-after";
pub const HANDLE_SELECTOR: &str = ".comparison-handle";
pub const INITIAL_ATTRIBUTE: &str = "data-initial";

/// Reads the starting position from markup, falling back to the default.
pub fn initial_state(attribute: Option<&str>) -> SliderState {
    attribute
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(SliderState::new)
        .unwrap_or_default()
}

/// Document-level listeners that exist only while a drag is in progress.
struct DragListeners<T> {
    active: Option<T>,
}

impl<T> DragListeners<T> {
    fn new() -> Self {
        Self { active: None }
    }

    fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Subscribes unless a drag is already being tracked, in which case the
    /// existing listeners are kept.
    fn open_with<E>(&mut self, subscribe: impl FnOnce() -> Result<T, E>) -> Result<(), E> {
        if self.active.is_none() {
            self.active = Some(subscribe()?);
        }
        Ok(())
    }

    /// Hands the listeners back so the caller decides where they are dropped.
    fn close(&mut self) -> Option<T> {
        self.active.take()
    }
}

struct Widget {
    container: HtmlElement,
    handle: Option<HtmlElement>,
    after: Option<HtmlElement>,
    state: SliderState,
    // Document-level move/end listeners, present only while dragging.
    drag: DragListeners<Vec<Subscription>>,
    on_drag_start: Box<dyn Fn()>,
}

impl Widget {
    fn bounds(&self) -> Bounds {
        let rect = self.container.get_bounding_client_rect();
        Bounds::new(rect.left(), rect.width())
    }

    fn render(&self) {
        let _ = self
            .container
            .set_attribute("aria-valuenow", &self.state.aria_value_now());
        if let Some(after) = &self.after {
            let _ = after.style().set_property("clip-path", &self.state.clip_path());
        }
        if let Some(handle) = &self.handle {
            let _ = handle.style().set_property("left", &self.state.handle_offset());
        }
    }
}

/// A mounted comparison slider. Dropping it detaches every listener.
pub struct ComparisonSlider {
    widget: Rc<RefCell<Widget>>,
    _listeners: Vec<Subscription>,
}

impl ComparisonSlider {
    pub fn percentage(&self) -> f64 {
        self.widget.borrow().state.percentage()
    }
}

impl Drop for ComparisonSlider {
    fn drop(&mut self) {
        // Closes a drag that is still open so its document listeners go too.
        let open = {
            let mut w = self.widget.borrow_mut();
            if w.drag.is_open() {
                log::debug!("Comparison slider detached mid-drag");
            }
            w.drag.close()
        };
        drop(open);
        log::debug!("Comparison slider detached");
    }
}

fn find_child(container: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    container
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn pointer_x(event: &Event) -> Option<f64> {
    // TouchEvent is not a global on desktop Firefox, so no instanceof check here.
    if event.type_().starts_with("touch") {
        let touch_event: &TouchEvent = event.unchecked_ref();
        return touch_event.touches().get(0).map(|t| t.client_x() as f64);
    }
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse_event| mouse_event.client_x() as f64)
}

pub fn attach(container: &HtmlElement) -> Result<ComparisonSlider, JsValue> {
    attach_with(container, || {})
}

/// Wires mouse, touch and keyboard input on `container` to a fresh slider
/// state. `on_drag_start` runs every time a drag begins.
pub fn attach_with<F>(container: &HtmlElement, on_drag_start: F) -> Result<ComparisonSlider, JsValue>
where
    F: Fn() + 'static,
{
    container.set_attribute("role", "slider")?;
    container.set_attribute("aria-valuemin", &MIN_PERCENTAGE.to_string())?;
    container.set_attribute("aria-valuemax", &MAX_PERCENTAGE.to_string())?;
    container.set_attribute("tabindex", "0")?;

    let state = initial_state(container.get_attribute(INITIAL_ATTRIBUTE).as_deref());
    let widget = Rc::new(RefCell::new(Widget {
        container: container.clone(),
        handle: find_child(container, HANDLE_SELECTOR),
        after: find_child(container, AFTER_SELECTOR),
        state,
        drag: DragListeners::new(),
        on_drag_start: Box::new(on_drag_start),
    }));
    widget.borrow().render();

    let document = container.owner_document();
    let start = {
        let widget = Rc::downgrade(&widget);
        move |event: Event| begin_drag(&widget, document.as_ref(), &event)
    };

    let keydown = {
        let widget = Rc::downgrade(&widget);
        move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = StepKey::from_key(&event.key()) else {
                return;
            };
            event.prevent_default();
            if let Some(widget) = widget.upgrade() {
                let mut widget = widget.borrow_mut();
                widget.state.step(key);
                widget.render();
            }
        }
    };

    let listeners = vec![
        Subscription::new(container, "mousedown", start.clone())?,
        Subscription::new(container, "touchstart", start)?,
        Subscription::new(container, "keydown", keydown)?,
    ];

    log::debug!("Comparison slider attached at {}%", widget.borrow().state.percentage());
    Ok(ComparisonSlider {
        widget,
        _listeners: listeners,
    })
}

fn begin_drag(widget: &Weak<RefCell<Widget>>, document: Option<&Document>, event: &Event) {
    let Some(rc) = widget.upgrade() else {
        return;
    };
    let Some(x) = pointer_x(event) else {
        return;
    };

    {
        let mut w = rc.borrow_mut();
        let bounds = w.bounds();
        w.state.begin_drag(x, bounds);
        w.render();
    }
    (rc.borrow().on_drag_start)();

    let Some(document) = document else {
        return;
    };
    // Registering listeners never dispatches, so holding the borrow is fine.
    let opened = rc
        .borrow_mut()
        .drag
        .open_with(|| subscribe_drag(widget, document));
    if let Err(e) = opened {
        log::warn!("Failed to track slider drag: {:?}", e);
    }
}

fn subscribe_drag(
    widget: &Weak<RefCell<Widget>>,
    document: &Document,
) -> Result<Vec<Subscription>, JsValue> {
    let moved = {
        let widget = widget.clone();
        move |event: Event| {
            let Some(widget) = widget.upgrade() else {
                return;
            };
            let mut w = widget.borrow_mut();
            if !w.state.is_dragging() {
                return;
            }
            event.prevent_default();
            let Some(x) = pointer_x(&event) else {
                return;
            };
            let bounds = w.bounds();
            if w.state.drag_to(x, bounds).is_some() {
                w.render();
            }
        }
    };

    let ended = {
        let widget = widget.clone();
        move |_: Event| {
            let finished = widget.upgrade().and_then(|widget| {
                let mut w = widget.borrow_mut();
                w.state.end_drag();
                w.drag.close()
            });
            // Dropped outside the borrow; this removes the listener running right now.
            drop(finished);
        }
    };

    Ok(vec![
        Subscription::new(document, "mousemove", moved.clone())?,
        Subscription::active(document, "touchmove", moved)?,
        Subscription::new(document, "mouseup", ended.clone())?,
        Subscription::new(document, "touchend", ended.clone())?,
        Subscription::new(document, "touchcancel", ended)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn initial_position_comes_from_markup() {
        assert_eq!(initial_state(Some("30")).percentage(), 30.0);
        assert_eq!(initial_state(Some(" 12.5 ")).percentage(), 12.5);
    }

    #[test]
    fn out_of_range_markup_is_clamped() {
        assert_eq!(initial_state(Some("250")).percentage(), 100.0);
        assert_eq!(initial_state(Some("-4")).percentage(), 0.0);
    }

    #[test]
    fn missing_or_garbled_markup_uses_default() {
        assert_eq!(initial_state(None).percentage(), 50.0);
        assert_eq!(initial_state(Some("half")).percentage(), 50.0);
        assert_eq!(initial_state(Some("")).percentage(), 50.0);
        assert_eq!(initial_state(Some("NaN")).percentage(), 50.0);
        assert_eq!(initial_state(Some("inf")).percentage(), 50.0);
        assert_eq!(initial_state(Some("-infinity")).percentage(), 50.0);
    }

    /// Stands in for a listener set and counts how often it is released.
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn open(drag: &mut DragListeners<Tracked>, opened: &Cell<usize>, released: &Rc<Cell<usize>>) {
        let result: Result<(), ()> = drag.open_with(|| {
            opened.set(opened.get() + 1);
            Ok(Tracked(released.clone()))
        });
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn drag_listeners_open_on_start_and_release_on_end() {
        let opened = Cell::new(0);
        let released = Rc::new(Cell::new(0));
        let mut drag = DragListeners::new();
        assert!(!drag.is_open());

        open(&mut drag, &opened, &released);
        assert!(drag.is_open());
        assert_eq!((opened.get(), released.get()), (1, 0));

        drop(drag.close());
        assert!(!drag.is_open());
        assert_eq!(released.get(), 1);
        assert!(drag.close().is_none());
    }

    #[test]
    fn second_start_reuses_open_listeners() {
        let opened = Cell::new(0);
        let released = Rc::new(Cell::new(0));
        let mut drag = DragListeners::new();

        // touchstart followed by the emulated mousedown
        open(&mut drag, &opened, &released);
        open(&mut drag, &opened, &released);
        assert_eq!((opened.get(), released.get()), (1, 0));
    }

    #[test]
    fn teardown_mid_drag_releases_listeners() {
        let opened = Cell::new(0);
        let released = Rc::new(Cell::new(0));
        let mut drag = DragListeners::new();
        open(&mut drag, &opened, &released);

        drop(drag);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn failed_subscribe_leaves_drag_untracked() {
        let mut drag: DragListeners<Tracked> = DragListeners::new();
        assert_eq!(drag.open_with(|| Err("blocked")), Err("blocked"));
        assert!(!drag.is_open());
    }

    #[test]
    fn drag_tracks_outside_container_until_pointer_up() {
        let released = Rc::new(Cell::new(0));
        let opened = Cell::new(0);
        let bounds = Bounds::new(100.0, 400.0);
        let mut state = initial_state(None);
        let mut drag = DragListeners::new();

        state.begin_drag(300.0, bounds);
        open(&mut drag, &opened, &released);
        assert_eq!(state.drag_to(-200.0, bounds), Some(0.0));
        assert_eq!(state.drag_to(2000.0, bounds), Some(100.0));

        // pointer-up anywhere on the page
        state.end_drag();
        drop(drag.close());
        assert_eq!(released.get(), 1);
        assert_eq!(state.drag_to(300.0, bounds), None);
        assert_eq!(state.percentage(), 100.0);
    }

    #[test]
    fn negative_zero_markup_reads_as_zero() {
        assert_eq!(initial_state(Some("-0")).aria_value_now(), "0");
    }
}
