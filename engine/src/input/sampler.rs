//! Input Sampler
//!
//! Turns raw per-frame axes (already polled and smoothed by the host) into a
//! [`TickInput`]. The wish direction is built in world space from the body
//! yaw, so the integrator never needs to know about the transform system.

use glam::Vec3;

use crate::player::{MovementState, TickInput};

/// Raw axes and buttons read by the host for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawInput {
    /// Forward/back axis in [-1, 1] (positive = forward)
    pub vertical_axis: f32,
    /// Strafe axis in [-1, 1] (positive = right)
    pub horizontal_axis: f32,
    /// Horizontal look delta (positive = turn right)
    pub mouse_x: f32,
    /// Vertical look delta (positive = look up)
    pub mouse_y: f32,
    /// Jump button held
    pub jump_held: bool,
    /// Crouch button held
    pub crouch_held: bool,
}

impl RawInput {
    /// Create raw input with only movement axes set.
    pub fn axes(vertical_axis: f32, horizontal_axis: f32) -> Self {
        Self {
            vertical_axis,
            horizontal_axis,
            ..Default::default()
        }
    }
}

/// Builds tick inputs from raw axes.
pub struct InputSampler;

impl InputSampler {
    /// World-space wish vector for the given axes and body yaw (degrees).
    ///
    /// Normalized only when longer than 1, so partial analog input keeps its
    /// strength.
    pub fn wish_direction(vertical_axis: f32, horizontal_axis: f32, yaw: f32) -> Vec3 {
        let yaw = yaw.to_radians();
        let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
        let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());

        let wish = forward * vertical_axis + right * horizontal_axis;
        if wish.length_squared() > 1.0 {
            wish.normalize()
        } else {
            wish
        }
    }

    /// Build the tick input for this frame.
    pub fn sample(raw: &RawInput, yaw: f32, delta_time: f32) -> TickInput {
        TickInput {
            wish_dir: Self::wish_direction(raw.vertical_axis, raw.horizontal_axis, yaw),
            forward_axis: raw.vertical_axis,
            look_delta_x: raw.mouse_x,
            look_delta_y: raw.mouse_y,
            jump_pressed: raw.jump_held,
            crouch_held: raw.crouch_held,
            delta_time,
        }
    }

    /// Build the tick input using the body yaw of `state`.
    pub fn sample_for(raw: &RawInput, state: &MovementState, delta_time: f32) -> TickInput {
        Self::sample(raw, state.yaw, delta_time)
    }
}
