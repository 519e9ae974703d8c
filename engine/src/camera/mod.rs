//! Camera Module
//!
//! First-person look handling: body yaw and clamped camera pitch.

pub mod orientation;

pub use orientation::OrientationUpdater;
