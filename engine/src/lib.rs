//! Strafe Jump Engine Library
//!
//! A first-person velocity integrator with id/Source-style movement:
//! ground friction and acceleration, Source air-accelerate with strafe gain,
//! air control, turn suppression and a horizontal speed cap. It is decoupled
//! from rendering and collision; the host reports ground contact and moves
//! the character by the returned velocity.
//!
//! # Modules
//!
//! - [`player`] - Movement state, parameters and the per-tick integrator
//! - [`camera`] - Yaw/pitch updates with pitch clamping
//! - [`input`] - Raw axes to world-space tick input
//!
//! # Example
//!
//! ```ignore
//! use strafe_jump_engine::input::{InputSampler, RawInput};
//! use strafe_jump_engine::player::{MovementIntegrator, MovementParams, MovementState};
//!
//! let integrator = MovementIntegrator::new(MovementParams::default())?;
//! let mut state = MovementState::new();
//!
//! // Each frame:
//! state.grounded = collision.is_grounded();
//! let input = InputSampler::sample_for(&raw_input, &state, delta_time);
//! integrator.tick(&mut state, &input)?;
//! collision.move_by(state.displacement(delta_time));
//! body.set_yaw(state.yaw);
//! camera.set_pitch(state.pitch);
//! ```

pub mod camera;
pub mod input;
pub mod player;
