//! Air Movement
//!
//! Source-style air physics. The accelerate step only ever adds speed along
//! the wish direction, and only until the projection of the velocity onto it
//! reaches the wish speed. Velocity orthogonal to the wish direction is left
//! alone, which is what lets a rotating wish direction (strafe + mouse turn)
//! build speed past the ground cap.
//!
//! # Steps
//!
//! 1. Wish speed from input strength, wish direction normalized
//! 2. Strafe accel when the wish is near-perpendicular to velocity
//! 3. Accel scaled down while the camera yaws quickly
//! 4. Accelerate along the wish direction
//! 5. Air control bends the direction toward the wish, keeping speed
//! 6. Gravity on the vertical component

use glam::Vec3;

use super::params::MovementParams;

/// Length below which a wish or velocity vector is treated as zero
pub const DIRECTION_EPSILON: f32 = 0.0001;

/// `|dot(velocity, wish)|` below which strafe accel is selected
pub const STRAFE_DOT_THRESHOLD: f32 = 0.5;

/// Air control gain
pub const AIR_CONTROL_SCALE: f32 = 32.0;

/// Forward/back axis magnitude needed for air control to steer
pub const FORWARD_AXIS_DEADZONE: f32 = 0.001;

/// Multiplier applied to air accel for a given horizontal look delta.
///
/// Falls linearly from 1 at no turning to `min_turn_accel_multiplier` once
/// `|look_delta_x * look_speed|` reaches `turn_speed_threshold`.
pub fn turn_multiplier(look_delta_x: f32, params: &MovementParams) -> f32 {
    let turn_speed = (look_delta_x * params.look_speed).abs();
    let turn_factor = (1.0 - turn_speed / params.turn_speed_threshold).clamp(0.0, 1.0);
    let min = params.min_turn_accel_multiplier;
    min + (1.0 - min) * turn_factor
}

/// Pick air or strafe accel for the current velocity and wish direction.
///
/// `wish_dir` must already be normalized (or zero).
pub fn select_accel(horizontal: Vec3, wish_dir: Vec3, wish_speed: f32, params: &MovementParams) -> f32 {
    if horizontal.length_squared() > DIRECTION_EPSILON && wish_speed > DIRECTION_EPSILON {
        let dot = horizontal.normalize().dot(wish_dir);
        if dot.abs() < STRAFE_DOT_THRESHOLD {
            return params.strafe_accel;
        }
    }
    params.air_accel
}

/// Source-style accelerate along `wish_dir` up to `wish_speed`.
pub fn accelerate(horizontal: Vec3, wish_dir: Vec3, wish_speed: f32, accel: f32, dt: f32) -> Vec3 {
    let current_speed = horizontal.dot(wish_dir);
    let add_speed = wish_speed - current_speed;
    if add_speed <= 0.0 {
        return horizontal;
    }

    let accel_speed = (accel * dt * wish_speed).min(add_speed);
    horizontal + wish_dir * accel_speed
}

/// Bend the horizontal direction toward `wish_dir` while keeping its speed.
///
/// Only steers when the forward/back axis is held; pure strafe input gets no
/// air control.
pub fn air_control(
    horizontal: Vec3,
    wish_dir: Vec3,
    wish_speed: f32,
    forward_axis: f32,
    params: &MovementParams,
    dt: f32,
) -> Vec3 {
    if forward_axis.abs() <= FORWARD_AXIS_DEADZONE || wish_speed <= 0.0 {
        return horizontal;
    }

    let speed = horizontal.length();
    if speed <= DIRECTION_EPSILON {
        return horizontal;
    }

    let direction = horizontal / speed;
    let dot = direction.dot(wish_dir);
    if dot <= 0.0 {
        return horizontal;
    }

    let k = AIR_CONTROL_SCALE * params.air_control * dot * dot * dt;
    (direction * speed + wish_dir * k).normalize_or_zero() * speed
}

/// Horizontal velocity after one airborne tick.
///
/// # Arguments
/// * `horizontal` - Current horizontal velocity
/// * `wish` - Horizontal wish vector, length in [0, 1]
/// * `forward_axis` - Raw forward/back axis (gates air control)
/// * `look_delta_x` - Horizontal look delta this tick (turn suppression)
/// * `forward_speed` - Wish speed for full input (already crouch-adjusted)
/// * `params` - Tuning values
/// * `dt` - Delta time in seconds
pub fn apply(
    horizontal: Vec3,
    wish: Vec3,
    forward_axis: f32,
    look_delta_x: f32,
    forward_speed: f32,
    params: &MovementParams,
    dt: f32,
) -> Vec3 {
    let wish_len = wish.length();
    let wish_speed = wish_len * forward_speed;
    let wish_dir = if wish_len > DIRECTION_EPSILON {
        wish / wish_len
    } else {
        Vec3::ZERO
    };

    let accel = select_accel(horizontal, wish_dir, wish_speed, params)
        * turn_multiplier(look_delta_x, params);

    let horizontal = accelerate(horizontal, wish_dir, wish_speed, accel, dt);
    air_control(horizontal, wish_dir, wish_speed, forward_axis, params, dt)
}

/// Vertical velocity after one airborne tick (gravity pulls toward -Y).
#[inline]
pub fn apply_gravity(vertical: f32, params: &MovementParams, dt: f32) -> f32 {
    vertical - params.gravity * dt
}
