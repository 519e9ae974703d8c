//! First-Person Orientation
//!
//! Applies look deltas to body yaw and camera pitch. Look input rotates
//! directly with no smoothing; pitch is clamped so the camera can never flip.
//!
//! - Yaw is applied to the body and is unbounded
//! - Pitch is applied to the camera only, within `[-limit, +limit]` degrees
//! - Positive `look_delta_y` looks up (decreases pitch)
//! - While `can_move` is false look deltas are ignored, but pitch is still
//!   pulled back inside the limits

use crate::player::{MovementParams, MovementState};

/// Look sensitivity and pitch limits taken from `MovementParams`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationUpdater {
    /// Degrees of rotation per unit of look delta
    look_speed: f32,
    /// Pitch limits (min, max) in degrees
    pitch_limits: (f32, f32),
}

impl OrientationUpdater {
    /// Create an updater from the session parameters.
    pub fn new(params: &MovementParams) -> Self {
        Self::with_limit(params.look_speed, params.look_x_limit)
    }

    /// Create an updater with an explicit sensitivity and symmetric pitch limit.
    pub fn with_limit(look_speed: f32, look_x_limit: f32) -> Self {
        let limit = look_x_limit.abs();
        Self {
            look_speed,
            pitch_limits: (-limit, limit),
        }
    }

    /// Get the look sensitivity in degrees per unit of look delta.
    #[inline]
    pub fn look_speed(&self) -> f32 {
        self.look_speed
    }

    /// Get the pitch limits in degrees (min, max).
    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        self.pitch_limits
    }

    /// Clamp a pitch angle to the limits.
    #[inline]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(self.pitch_limits.0, self.pitch_limits.1)
    }

    /// New `(yaw, pitch)` after applying look deltas.
    pub fn rotate(&self, yaw: f32, pitch: f32, look_delta_x: f32, look_delta_y: f32) -> (f32, f32) {
        let yaw = yaw + look_delta_x * self.look_speed;
        let pitch = self.clamp_pitch(pitch - look_delta_y * self.look_speed);
        (yaw, pitch)
    }

    /// `(yaw, pitch)` a movement state should hold after this tick's look deltas.
    ///
    /// Look deltas are ignored while `state.can_move` is false; pitch is
    /// clamped either way.
    pub fn resolve(&self, state: &MovementState, look_delta_x: f32, look_delta_y: f32) -> (f32, f32) {
        if state.can_move {
            self.rotate(state.yaw, state.pitch, look_delta_x, look_delta_y)
        } else {
            (state.yaw, self.clamp_pitch(state.pitch))
        }
    }

    /// Apply look deltas to a movement state.
    pub fn apply(&self, state: &mut MovementState, look_delta_x: f32, look_delta_y: f32) {
        (state.yaw, state.pitch) = self.resolve(state, look_delta_x, look_delta_y);
    }
}

impl Default for OrientationUpdater {
    fn default() -> Self {
        Self::new(&MovementParams::default())
    }
}
