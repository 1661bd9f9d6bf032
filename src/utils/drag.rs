/// Axis used to map pointer movement onto a value delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragDirection {
    X,
    #[default]
    Y,
}

impl DragDirection {
    /// Signed value delta for a single mouse move along this axis.
    ///
    /// Movement on the orthogonal axis is ignored. The Y axis is inverted:
    /// dragging upward (negative `movement_y`) increases the value.
    pub fn delta(self, movement_x: i32, movement_y: i32) -> f64 {
        match self {
            DragDirection::X => f64::from(movement_x),
            DragDirection::Y => -f64::from(movement_y),
        }
    }
}

/// Transient state of one drag gesture, from mousedown to mouseup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Value at the moment the gesture started.
        origin_value: f64,
    },
}

impl DragState {
    /// Enters the dragging state, recording the value at gesture start.
    pub fn begin(origin_value: f64) -> Self {
        DragState::Dragging { origin_value }
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Value recorded at gesture start, if a drag is active.
    pub fn origin_value(self) -> Option<f64> {
        match self {
            DragState::Dragging { origin_value } => Some(origin_value),
            DragState::Idle => None,
        }
    }
}

/// Optional lower/upper bounds for a value. An unset bound does not
/// constrain that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Bounds { min, max }
    }

    /// Clamps `value` to the configured bounds. A value exactly at a bound
    /// passes through unchanged. The lower bound is applied before the upper
    /// one, so inconsistent bounds (`min > max`) resolve to `max`.
    pub fn clamp(self, value: f64) -> f64 {
        let value = match self.min {
            Some(min) => value.max(min),
            None => value,
        };
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Applies one mouse move to `current`, returning the clamped new value.
///
/// Steps compose incrementally across a gesture: each move starts from the
/// value produced by the previous one, not from the gesture origin.
pub fn apply_move(
    current: f64,
    direction: DragDirection,
    movement_x: i32,
    movement_y: i32,
    bounds: Bounds,
) -> f64 {
    bounds.clamp(current + direction.delta(movement_x, movement_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_inverts_vertical_movement() {
        assert_eq!(DragDirection::Y.delta(0, -200), 200.0);
        assert_eq!(DragDirection::Y.delta(0, 150), -150.0);
    }

    #[test]
    fn x_axis_follows_horizontal_movement() {
        assert_eq!(DragDirection::X.delta(-200, 0), -200.0);
        assert_eq!(DragDirection::X.delta(150, 0), 150.0);
    }

    #[test]
    fn orthogonal_movement_is_ignored() {
        assert_eq!(DragDirection::Y.delta(500, -10), 10.0);
        assert_eq!(DragDirection::X.delta(25, -999), 25.0);
    }

    #[test]
    fn default_direction_is_y() {
        assert_eq!(DragDirection::default(), DragDirection::Y);
    }

    #[test]
    fn unbounded_clamp_passes_values_through() {
        let bounds = Bounds::default();
        assert_eq!(bounds.clamp(12345.5), 12345.5);
        assert_eq!(bounds.clamp(-12345.5), -12345.5);
    }

    #[test]
    fn clamp_applies_each_defined_bound() {
        let bounds = Bounds::new(Some(-10.0), Some(100.0));
        assert_eq!(bounds.clamp(-250.0), -10.0);
        assert_eq!(bounds.clamp(200.0), 100.0);
        assert_eq!(bounds.clamp(42.0), 42.0);
    }

    #[test]
    fn value_exactly_at_a_bound_is_unchanged() {
        let bounds = Bounds::new(Some(-10.0), Some(100.0));
        assert_eq!(bounds.clamp(-10.0), -10.0);
        assert_eq!(bounds.clamp(100.0), 100.0);
    }

    #[test]
    fn half_open_bounds_constrain_one_side_only() {
        let min_only = Bounds::new(Some(0.0), None);
        assert_eq!(min_only.clamp(-5.0), 0.0);
        assert_eq!(min_only.clamp(1e9), 1e9);

        let max_only = Bounds::new(None, Some(10.0));
        assert_eq!(max_only.clamp(50.0), 10.0);
        assert_eq!(max_only.clamp(-1e9), -1e9);
    }

    #[test]
    fn inconsistent_bounds_resolve_to_max() {
        let bounds = Bounds::new(Some(10.0), Some(5.0));
        assert_eq!(bounds.clamp(7.0), 5.0);
    }

    #[test]
    fn drag_state_records_origin_value() {
        let state = DragState::begin(42.0);
        assert!(state.is_dragging());
        assert_eq!(state.origin_value(), Some(42.0));

        assert!(!DragState::Idle.is_dragging());
        assert_eq!(DragState::Idle.origin_value(), None);
        assert_eq!(DragState::default(), DragState::Idle);
    }

    #[test]
    fn moves_compose_incrementally_on_the_y_axis() {
        let bounds = Bounds::default();
        let value = apply_move(0.0, DragDirection::Y, 0, -200, bounds);
        assert_eq!(value, 200.0);
        let value = apply_move(value, DragDirection::Y, 0, 150, bounds);
        assert_eq!(value, 50.0);
    }

    #[test]
    fn moves_compose_incrementally_on_the_x_axis() {
        let bounds = Bounds::default();
        let value = apply_move(0.0, DragDirection::X, -200, 0, bounds);
        assert_eq!(value, -200.0);
        let value = apply_move(value, DragDirection::X, 150, 0, bounds);
        assert_eq!(value, -50.0);
    }

    #[test]
    fn accumulated_moves_pin_at_the_bounds() {
        let bounds = Bounds::new(Some(-10.0), Some(100.0));
        let value = apply_move(0.0, DragDirection::Y, 0, -200, bounds);
        assert_eq!(value, 100.0);
        let value = apply_move(value, DragDirection::Y, 0, 350, bounds);
        assert_eq!(value, -10.0);
    }
}
