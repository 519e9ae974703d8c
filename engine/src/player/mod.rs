//! Player Module
//!
//! Strafe-jump movement physics for a first-person controller.
//!
//! # Components
//!
//! - [`MovementIntegrator`] - Per-tick driver choosing ground or air physics
//! - [`ground`] - Friction and direct acceleration toward the wish velocity
//! - [`air`] - Source-style accelerate, strafe accel, turn suppression, air control
//! - [`speed_clamp`] - Horizontal speed cap
//! - [`MovementParams`] - Tuning values, loadable from JSON
//! - [`MovementState`] / [`TickInput`] - Persistent state and per-tick input

pub mod air;
pub mod error;
pub mod ground;
pub mod integrator;
pub mod params;
pub mod speed_clamp;
pub mod state;

pub use error::MovementError;
pub use integrator::{tick, MovementIntegrator};
pub use params::{
    MovementParams,
    FORWARD_SPEED, CROUCH_SPEED, JUMP_POWER, GRAVITY, LOOK_SPEED, LOOK_X_LIMIT,
    GROUND_ACCEL, AIR_ACCEL, STRAFE_ACCEL, AIR_CONTROL, TURN_SPEED_THRESHOLD,
    MIN_TURN_ACCEL_MULTIPLIER, FRICTION, MAX_SPEED,
};
pub use state::{MovementMode, MovementState, TickInput};
pub use ground::GROUND_STICK_VELOCITY;

static_assertions::assert_impl_all!(MovementState: Send, Sync, Copy);
static_assertions::assert_impl_all!(MovementParams: Send, Sync, Copy);
static_assertions::assert_impl_all!(TickInput: Send, Sync, Copy);
