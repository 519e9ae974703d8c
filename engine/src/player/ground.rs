//! Ground Movement
//!
//! While grounded, horizontal velocity either bleeds off through friction
//! (no wish input) or accelerates straight toward the wish velocity. The
//! acceleration step clamps the velocity change per tick, so the target is
//! never overshot.
//!
//! Vertical velocity on the ground is not integrated: it is either the jump
//! impulse or a constant small downward bias that keeps the controller
//! pressed against the floor.

use glam::Vec3;

use super::params::MovementParams;

/// Vertical velocity while standing on the ground (keeps the capsule pressed down)
pub const GROUND_STICK_VELOCITY: f32 = -1.0;

/// Squared wish length below which the ground model applies friction
pub const WISH_DEADZONE_SQ: f32 = 0.0001;

/// Move `current` toward zero by at most `max_delta`, never past it.
pub fn apply_friction(current: Vec3, max_delta: f32) -> Vec3 {
    let speed = current.length();
    if speed <= max_delta || speed == 0.0 {
        Vec3::ZERO
    } else {
        current - current / speed * max_delta
    }
}

/// Move `current` toward `target`, changing it by at most `max_change`.
///
/// The change is clamped along its own direction, so the result lands exactly
/// on `target` once it is within reach.
pub fn accelerate_towards(current: Vec3, target: Vec3, max_change: f32) -> Vec3 {
    let delta = target - current;
    let delta_len = delta.length();
    if delta_len > max_change && delta_len > 0.0 {
        current + delta / delta_len * max_change
    } else {
        current + delta
    }
}

/// Horizontal velocity after one grounded tick.
///
/// # Arguments
/// * `horizontal` - Current horizontal velocity
/// * `wish_dir` - Horizontal wish direction, length in [0, 1]
/// * `forward_speed` - Target speed for full input (already crouch-adjusted)
/// * `params` - Tuning values (friction, ground accel)
/// * `dt` - Delta time in seconds
pub fn apply(
    horizontal: Vec3,
    wish_dir: Vec3,
    forward_speed: f32,
    params: &MovementParams,
    dt: f32,
) -> Vec3 {
    if wish_dir.length_squared() < WISH_DEADZONE_SQ {
        apply_friction(horizontal, params.friction * dt)
    } else {
        accelerate_towards(horizontal, wish_dir * forward_speed, params.ground_accel * dt)
    }
}

/// Vertical velocity for a grounded tick.
pub fn vertical_velocity(jump: bool, params: &MovementParams) -> f32 {
    if jump {
        params.jump_power
    } else {
        GROUND_STICK_VELOCITY
    }
}
