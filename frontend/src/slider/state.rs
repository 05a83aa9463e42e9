use crate::config;

pub const MIN_PERCENTAGE: f64 = 0.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Horizontal extent of the slider container as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Maps a viewport x coordinate onto the container as a clamped percentage.
    ///
    /// Degenerate geometry (zero, negative or non-finite width) and non-finite
    /// coordinates land on the minimum instead of producing NaN or infinity.
    pub fn percentage_at(&self, x: f64) -> f64 {
        if !(self.width > 0.0) || !self.width.is_finite() || !self.left.is_finite() {
            return MIN_PERCENTAGE;
        }
        clamp_percentage((x - self.left) / self.width * 100.0)
    }
}

pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_PERCENTAGE;
    }
    // Adding zero turns -0.0 into 0.0 so it never renders as "-0".
    value.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE) + 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKey {
    Left,
    Right,
}

impl StepKey {
    /// Only the horizontal arrow keys move the slider.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(StepKey::Left),
            "ArrowRight" => Some(StepKey::Right),
            _ => None,
        }
    }
}

/// Position and drag phase of one comparison slider instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    percentage: f64,
    phase: DragPhase,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(config::SLIDER_INITIAL_PERCENTAGE)
    }
}

impl SliderState {
    pub fn new(initial: f64) -> Self {
        Self {
            percentage: clamp_percentage(initial),
            phase: DragPhase::Idle,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Enters the dragging phase and jumps straight to the pressed position.
    pub fn begin_drag(&mut self, x: f64, bounds: Bounds) -> f64 {
        self.phase = DragPhase::Dragging;
        self.percentage = bounds.percentage_at(x);
        self.percentage
    }

    /// Follows the pointer while dragging. Returns `None` when idle, in which
    /// case the position is left untouched.
    pub fn drag_to(&mut self, x: f64, bounds: Bounds) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        self.percentage = bounds.percentage_at(x);
        Some(self.percentage)
    }

    /// Returns whether a drag was actually in progress.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    pub fn step(&mut self, key: StepKey) -> f64 {
        let delta = match key {
            StepKey::Left => -config::SLIDER_KEYBOARD_STEP,
            StepKey::Right => config::SLIDER_KEYBOARD_STEP,
        };
        self.percentage = clamp_percentage(self.percentage + delta);
        self.percentage
    }

    pub fn aria_value_now(&self) -> String {
        format!("{}", self.percentage)
    }

    /// Polygon revealing the after layer to the right of the boundary.
    pub fn clip_path(&self) -> String {
        let p = self.percentage;
        format!("polygon({p}% 0, 100% 0, 100% 100%, {p}% 100%)")
    }

    pub fn handle_offset(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const BOX: Bounds = Bounds { left: 100.0, width: 400.0 };

    #[rstest]
    #[case(100.0, 0.0)]
    #[case(500.0, 100.0)]
    #[case(300.0, 50.0)]
    #[case(200.0, 25.0)]
    #[case(-5000.0, 0.0)]
    #[case(9000.0, 100.0)]
    fn maps_pointer_to_clamped_percentage(#[case] x: f64, #[case] expected: f64) {
        assert_eq!(BOX.percentage_at(x), expected);
    }

    #[test]
    fn percentage_stays_in_range_for_any_input() {
        let inputs = [
            f64::MIN,
            -1e12,
            -1.0,
            0.0,
            99.9,
            100.0,
            499.99,
            1e12,
            f64::MAX,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
        ];
        for x in inputs {
            let p = BOX.percentage_at(x);
            assert!((MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&p), "{x} -> {p}");
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-250.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn degenerate_width_maps_to_zero(#[case] width: f64) {
        let bounds = Bounds::new(10.0, width);
        assert_eq!(bounds.percentage_at(10.0), 0.0);
        assert_eq!(bounds.percentage_at(500.0), 0.0);
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(SliderState::new(140.0).percentage(), 100.0);
        assert_eq!(SliderState::new(-3.0).percentage(), 0.0);
        assert_eq!(SliderState::new(f64::NAN).percentage(), 0.0);
        assert_eq!(SliderState::default().percentage(), 50.0);
    }

    #[test]
    fn drag_start_applies_position_immediately() {
        let mut state = SliderState::new(50.0);
        assert_eq!(state.begin_drag(200.0, BOX), 25.0);
        assert!(state.is_dragging());
        assert_eq!(state.percentage(), 25.0);
    }

    #[test]
    fn drag_keeps_tracking_outside_container() {
        let mut state = SliderState::new(50.0);
        state.begin_drag(300.0, BOX);
        assert_eq!(state.drag_to(450.0, BOX), Some(87.5));
        assert_eq!(state.drag_to(900.0, BOX), Some(100.0));
        assert_eq!(state.drag_to(20.0, BOX), Some(0.0));
    }

    #[test]
    fn moves_after_drag_end_are_ignored() {
        let mut state = SliderState::new(50.0);
        state.begin_drag(400.0, BOX);
        assert!(state.end_drag());
        assert_eq!(state.phase(), DragPhase::Idle);

        assert_eq!(state.drag_to(150.0, BOX), None);
        assert_eq!(state.percentage(), 75.0);
        assert!(!state.end_drag());
    }

    #[test]
    fn layout_change_mid_drag_uses_new_bounds() {
        let mut state = SliderState::new(50.0);
        state.begin_drag(300.0, BOX);
        let resized = Bounds::new(0.0, 200.0);
        assert_eq!(state.drag_to(150.0, resized), Some(75.0));
    }

    #[test]
    fn arrow_right_steps_and_clamps_at_max() {
        let mut state = SliderState::new(50.0);
        assert_eq!(state.step(StepKey::Right), 55.0);

        let mut state = SliderState::new(50.0);
        let seen: Vec<f64> = (0..10).map(|_| state.step(StepKey::Right)).collect();
        assert_eq!(seen[4], 75.0);
        assert_eq!(seen, vec![55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0]);
        assert_eq!(state.step(StepKey::Right), 100.0);
    }

    #[test]
    fn arrow_left_clamps_at_min() {
        let mut state = SliderState::new(3.0);
        assert_eq!(state.step(StepKey::Left), 0.0);
        assert_eq!(state.step(StepKey::Left), 0.0);
    }

    #[test]
    fn keyboard_step_does_not_change_phase() {
        let mut state = SliderState::new(50.0);
        state.step(StepKey::Left);
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[rstest]
    #[case("ArrowLeft", Some(StepKey::Left))]
    #[case("ArrowRight", Some(StepKey::Right))]
    #[case("ArrowUp", None)]
    #[case("Home", None)]
    #[case("a", None)]
    fn only_horizontal_arrows_are_handled(#[case] key: &str, #[case] expected: Option<StepKey>) {
        assert_eq!(StepKey::from_key(key), expected);
    }

    #[test]
    fn aria_value_matches_percentage() {
        let mut state = SliderState::new(50.0);
        assert_eq!(state.aria_value_now(), "50");
        state.step(StepKey::Right);
        assert_eq!(state.aria_value_now(), "55");
        state.begin_drag(350.0, BOX);
        assert_eq!(state.aria_value_now(), "62.5");
        assert_eq!(state.aria_value_now(), state.percentage().to_string());
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        let state = SliderState::new(-0.0);
        assert!(state.percentage().is_sign_positive());
        assert_eq!(state.aria_value_now(), "0");
        assert_eq!(state.handle_offset(), "0%");
        assert_eq!(state.clip_path(), "polygon(0% 0, 100% 0, 100% 100%, 0% 100%)");
    }

    #[test]
    fn visual_strings_follow_percentage() {
        let state = SliderState::new(30.0);
        assert_eq!(state.clip_path(), "polygon(30% 0, 100% 0, 100% 100%, 30% 100%)");
        assert_eq!(state.handle_offset(), "30%");
    }
}
