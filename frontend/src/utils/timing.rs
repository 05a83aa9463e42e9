use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Lets an action through at most once per `interval_ms`.
///
/// Dropped calls are remembered so the caller can run one trailing update
/// once the burst is over, see [`Throttle::take_trailing`].
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
            trailing: false,
        }
    }

    /// `now` is a millisecond clock reading. The first call always passes.
    pub fn allow(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval_ms => {
                self.trailing = true;
                false
            }
            _ => {
                self.last = Some(now);
                self.trailing = false;
                true
            }
        }
    }

    /// Whether a call was dropped since the last one let through. Clears the flag.
    pub fn take_trailing(&mut self) -> bool {
        std::mem::take(&mut self.trailing)
    }
}

/// Runs the callback once calls have stopped for `delay_ms`.
pub struct Debounce {
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<Timeout>>,
}

impl Debounce {
    pub fn new<F: Fn() + 'static>(delay_ms: u32, callback: F) -> Self {
        Self {
            delay_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self) {
        let callback = self.callback.clone();
        // Replacing the old Timeout drops it, which cancels it.
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, move || callback()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_passes() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.allow(5_000.0));
    }

    #[test]
    fn calls_inside_interval_are_dropped() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.allow(0.0));
        assert!(!throttle.allow(40.0));
        assert!(!throttle.allow(99.9));
        assert!(throttle.allow(100.0));
        assert!(!throttle.allow(150.0));
        assert!(throttle.allow(250.0));
    }

    #[test]
    fn dropped_call_leaves_trailing_update() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.allow(0.0));
        assert!(!throttle.take_trailing());

        assert!(!throttle.allow(60.0));
        assert!(throttle.take_trailing());
        assert!(!throttle.take_trailing());
    }

    #[test]
    fn accepted_call_clears_trailing_update() {
        let mut throttle = Throttle::new(100.0);
        throttle.allow(0.0);
        throttle.allow(50.0);
        assert!(throttle.allow(120.0));
        assert!(!throttle.take_trailing());
    }

    #[test]
    fn zero_interval_never_throttles() {
        let mut throttle = Throttle::new(0.0);
        assert!(throttle.allow(1.0));
        assert!(throttle.allow(1.0));
    }
}
