use crate::controller::input::{Action, InputSnapshot};
use crate::model::TransformState;

/// Closed range a clamped value is held within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    /// Full normalized viewport, [-1, 1]
    pub const VIEWPORT: Self = Self { min: -1.0, max: 1.0 };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Shrink both ends by `half_extent` so an object of that half-size stays inside.
    /// An extent wider than the range collapses it onto its midpoint.
    pub fn inset(self, half_extent: f32) -> Self {
        let mid = (self.min + self.max) / 2.0;
        let min = (self.min + half_extent).min(mid);
        let max = (self.max - half_extent).max(mid);
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// How one transform channel responds to input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisLimit {
    /// Input is ignored
    Locked,
    /// Input moves the value without bound
    Free,
    /// Input moves the value, result is clamped
    Clamped(AxisRange),
}

impl AxisLimit {
    pub fn is_active(&self) -> bool {
        !matches!(self, AxisLimit::Locked)
    }

    /// Move `value` by `direction * amount` and apply the limit
    fn apply(&self, value: f32, direction: f32, amount: f32) -> f32 {
        match self {
            AxisLimit::Locked => value,
            AxisLimit::Free => value + step(direction, amount),
            AxisLimit::Clamped(range) => range.clamp(value + step(direction, amount)),
        }
    }
}

/// Offset for one channel; an idle channel or a non-finite amount does not move
fn step(direction: f32, amount: f32) -> f32 {
    if direction == 0.0 || !amount.is_finite() {
        0.0
    } else {
        direction * amount
    }
}

/// Speeds and limits for one demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// units per second
    pub move_speed: f32,
    /// degrees per second
    pub rotation_speed: f32,
    /// units per second
    pub scale_speed: f32,
    pub x: AxisLimit,
    pub y: AxisLimit,
    pub rotate: bool,
    pub scale: AxisLimit,
    pub reset: bool,
}

impl MotionConfig {
    pub const SCALE_RANGE: AxisRange = AxisRange::new(0.1, 3.0);

    /// Everything locked; input has no effect
    pub fn fixed() -> Self {
        Self {
            move_speed: 0.0,
            rotation_speed: 0.0,
            scale_speed: 0.0,
            x: AxisLimit::Locked,
            y: AxisLimit::Locked,
            rotate: false,
            scale: AxisLimit::Locked,
            reset: false,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            rotation_speed: 90.0,
            scale_speed: 0.5,
            x: AxisLimit::Clamped(AxisRange::VIEWPORT),
            y: AxisLimit::Clamped(AxisRange::VIEWPORT),
            rotate: true,
            scale: AxisLimit::Clamped(Self::SCALE_RANGE),
            reset: true,
        }
    }
}

/// Net direction of an opposing action pair: +1, -1 or 0 when both or neither are held
fn axis_direction(input: &InputSnapshot, positive: Action, negative: Action) -> f32 {
    match (input.contains(positive), input.contains(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Advance `state` by one frame of held input.
///
/// Each channel moves by `speed * dt` in the net direction of its action pair and
/// is clamped afterwards, on every call, so the limits hold whatever the history.
/// Reset is applied last and wins over everything else.
pub fn update(
    mut state: TransformState,
    input: &InputSnapshot,
    dt: f32,
    config: &MotionConfig,
) -> TransformState {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    let movement = config.move_speed * dt;
    state.position.x = config.x.apply(
        state.position.x,
        axis_direction(input, Action::MoveRight, Action::MoveLeft),
        movement,
    );
    state.position.y = config.y.apply(
        state.position.y,
        axis_direction(input, Action::MoveUp, Action::MoveDown),
        movement,
    );

    if config.rotate {
        let turn = config.rotation_speed * dt;
        state.rotation.x += step(axis_direction(input, Action::TiltForward, Action::TiltBack), turn);
        state.rotation.y += step(axis_direction(input, Action::RotateLeft, Action::RotateRight), turn);
    }

    state.scale = config.scale.apply(
        state.scale,
        axis_direction(input, Action::ScaleUp, Action::ScaleDown),
        config.scale_speed * dt,
    );

    if config.reset && input.contains(Action::Reset) {
        state.reset();
    }

    state
}

/// Owns a demo's motion config and applies it to the transform each frame
pub struct TransformController {
    pub config: MotionConfig,
}

impl TransformController {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn update(&self, state: &mut TransformState, input: &InputSnapshot, dt: f32) {
        *state = update(*state, input, dt, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn held(actions: &[Action]) -> InputSnapshot {
        actions.iter().copied().collect()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn free_config() -> MotionConfig {
        MotionConfig {
            x: AxisLimit::Free,
            y: AxisLimit::Free,
            ..MotionConfig::default()
        }
    }

    #[test]
    fn test_free_axis_accumulates_speed_times_time() {
        let config = free_config();
        let mut state = TransformState::new();
        let right = held(&[Action::MoveRight]);
        let down = held(&[Action::MoveDown]);

        let frames = [0.016, 0.033, 0.0, 0.1, 0.007, 0.25];
        let total: f32 = frames.iter().sum();
        for dt in frames {
            state = update(state, &right, dt, &config);
            state = update(state, &down, dt, &config);
        }
        assert!(close(state.position.x, config.move_speed * total));
        assert!(close(state.position.y, -config.move_speed * total));
    }

    #[test]
    fn test_right_stops_at_inset_edge() {
        let config = MotionConfig {
            move_speed: 0.5,
            x: AxisLimit::Clamped(AxisRange::VIEWPORT.inset(0.1)),
            ..MotionConfig::default()
        };
        let right = held(&[Action::MoveRight]);
        let mut state = TransformState::new();
        for _ in 0..20 {
            state = update(state, &right, 0.1, &config);
        }
        assert!(close(state.position.x, 0.9));
        let pinned = state.position.x;

        for _ in 0..10 {
            state = update(state, &right, 0.1, &config);
            assert_eq!(state.position.x, pinned);
        }
    }

    #[test]
    fn test_scale_snaps_to_max() {
        let config = MotionConfig::default();
        let state = TransformState { scale: 2.8, ..TransformState::new() };
        let state = update(state, &held(&[Action::ScaleUp]), 1.0, &config);
        assert_eq!(state.scale, 3.0);

        // holding keeps it pinned
        let state = update(state, &held(&[Action::ScaleUp]), 1.0, &config);
        assert_eq!(state.scale, 3.0);
    }

    #[test]
    fn test_scale_snaps_to_min() {
        let config = MotionConfig::default();
        let mut state = TransformState::new();
        for _ in 0..50 {
            state = update(state, &held(&[Action::ScaleDown]), 0.1, &config);
            assert!(MotionConfig::SCALE_RANGE.contains(state.scale));
        }
        assert_eq!(state.scale, 0.1);
    }

    #[test]
    fn test_clamped_axes_stay_in_range() {
        let range = AxisRange::VIEWPORT.inset(0.15);
        let config = MotionConfig {
            move_speed: 3.0,
            x: AxisLimit::Clamped(range),
            y: AxisLimit::Clamped(range),
            ..MotionConfig::default()
        };
        let pattern = [
            held(&[Action::MoveLeft, Action::MoveUp]),
            held(&[Action::MoveLeft]),
            held(&[Action::MoveRight, Action::MoveDown]),
            held(&[]),
            held(&[Action::MoveDown]),
        ];
        let mut state = TransformState::new();
        for (i, input) in pattern.iter().cycle().take(200).enumerate() {
            state = update(state, input, (i % 7) as f32 * 0.05, &config);
            assert!(range.contains(state.position.x));
            assert!(range.contains(state.position.y));
        }
    }

    #[test]
    fn test_out_of_range_state_is_pulled_back_without_input() {
        let config = MotionConfig::default();
        let state = TransformState {
            position: Vec3::new(4.0, -4.0, 0.0),
            scale: 10.0,
            ..TransformState::new()
        };
        let state = update(state, &InputSnapshot::default(), 0.016, &config);
        assert_eq!(state.position.x, 1.0);
        assert_eq!(state.position.y, -1.0);
        assert_eq!(state.scale, 3.0);

        // clamping again changes nothing
        assert_eq!(update(state, &InputSnapshot::default(), 0.016, &config), state);
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let config = MotionConfig::default();
        let mut state = TransformState::new();
        let input = held(&[Action::TiltForward, Action::RotateRight]);
        for _ in 0..10 {
            state = update(state, &input, 1.0, &config);
        }
        assert!(close(state.rotation.x, 900.0));
        assert!(close(state.rotation.y, -900.0));
        assert_eq!(state.rotation.z, 0.0);
    }

    #[test]
    fn test_reset_overrides_everything() {
        let config = MotionConfig::default();
        let state = TransformState {
            position: Vec3::new(0.4, -0.2, 0.0),
            rotation: Vec3::new(123.0, 45.0, 0.0),
            scale: 2.0,
        };
        let input = held(&[Action::Reset, Action::MoveRight, Action::ScaleUp, Action::TiltBack]);
        assert_eq!(update(state, &input, 0.5, &config), TransformState::IDENTITY);
    }

    #[test]
    fn test_reset_ignored_when_disabled() {
        let config = MotionConfig { reset: false, ..free_config() };
        let state = TransformState { scale: 2.0, ..TransformState::new() };
        let state = update(state, &held(&[Action::Reset]), 0.1, &config);
        assert_eq!(state.scale, 2.0);
    }

    #[test]
    fn test_opposite_actions_cancel() {
        let config = MotionConfig::default();
        let start = TransformState {
            position: Vec3::new(0.2, 0.3, 0.0),
            rotation: Vec3::new(10.0, 20.0, 0.0),
            scale: 1.5,
        };
        let input = held(&[
            Action::MoveLeft, Action::MoveRight,
            Action::MoveUp, Action::MoveDown,
            Action::TiltForward, Action::TiltBack,
            Action::RotateLeft, Action::RotateRight,
            Action::ScaleUp, Action::ScaleDown,
        ]);
        assert_eq!(update(start, &input, 0.1, &config), start);
    }

    #[test]
    fn test_simultaneous_actions_all_apply() {
        let config = free_config();
        let input = held(&[Action::MoveRight, Action::ScaleUp, Action::RotateLeft]);
        let state = update(TransformState::new(), &input, 0.2, &config);
        assert!(close(state.position.x, 0.1));
        assert!(close(state.scale, 1.1));
        assert!(close(state.rotation.y, 18.0));
    }

    #[test]
    fn test_locked_axes_ignore_input() {
        let config = MotionConfig {
            y: AxisLimit::Locked,
            scale: AxisLimit::Locked,
            rotate: false,
            ..MotionConfig::default()
        };
        let input = held(&[Action::MoveUp, Action::ScaleUp, Action::TiltForward, Action::MoveRight]);
        let state = update(TransformState::new(), &input, 0.5, &config);
        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.rotation, Vec3::ZERO);
        assert!(close(state.position.x, 0.25));
    }

    #[test]
    fn test_negative_or_nan_dt_is_a_no_op() {
        let config = free_config();
        let input = held(&[Action::MoveRight, Action::ScaleUp, Action::TiltForward]);
        let start = TransformState::new();
        assert_eq!(update(start, &input, -0.5, &config), start);
        assert_eq!(update(start, &input, f32::NAN, &config), start);
    }

    #[test]
    fn test_infinite_dt_is_a_no_op() {
        let config = MotionConfig::default();
        let start = TransformState::new();
        assert_eq!(update(start, &InputSnapshot::default(), f32::INFINITY, &config), start);

        let input = held(&[Action::MoveRight, Action::ScaleUp, Action::RotateLeft]);
        assert_eq!(update(start, &input, f32::INFINITY, &config), start);
    }

    #[test]
    fn test_infinite_speed_leaves_idle_channels_alone() {
        let config = MotionConfig {
            move_speed: f32::INFINITY,
            rotation_speed: f32::INFINITY,
            scale_speed: f32::INFINITY,
            ..MotionConfig::default()
        };
        let mut state = TransformState::new();
        for dt in [0.0, 0.016, 0.016] {
            state = update(state, &InputSnapshot::default(), dt, &config);
            assert_eq!(state, TransformState::new());
        }

        state = update(state, &held(&[Action::MoveRight]), 0.016, &config);
        assert!(state.position.is_finite());
        assert!(AxisRange::VIEWPORT.contains(state.position.x));
    }

    #[test]
    fn test_inset_range() {
        let range = AxisRange::VIEWPORT.inset(0.15);
        assert!(close(range.min, -0.85));
        assert!(close(range.max, 0.85));

        let collapsed = AxisRange::VIEWPORT.inset(1.5);
        assert_eq!(collapsed, AxisRange::new(0.0, 0.0));
    }

    #[test]
    fn test_controller_mutates_in_place() {
        let controller = TransformController::new(free_config());
        let mut state = TransformState::new();
        controller.update(&mut state, &held(&[Action::MoveLeft]), 1.0);
        assert!(close(state.position.x, -0.5));
    }
}
