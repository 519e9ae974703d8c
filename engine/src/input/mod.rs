//! Input Module
//!
//! Converts raw per-frame axes into tick inputs for the movement integrator.
//! Device polling and axis smoothing stay with the host; this module only
//! maps already-read values into world space.
//!
//! # Example
//!
//! ```rust,ignore
//! use strafe_jump_engine::input::{InputSampler, RawInput};
//!
//! let raw = RawInput::axes(1.0, -1.0); // forward + strafe left
//! let input = InputSampler::sample_for(&raw, &state, delta_time);
//! integrator.tick(&mut state, &input)?;
//! ```

pub mod sampler;

pub use sampler::{InputSampler, RawInput};
