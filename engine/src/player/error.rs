//! Movement Errors
//!
//! Precondition violations are reported instead of letting NaN or infinite
//! values leak into the velocity. Degenerate geometry (zero-length vectors)
//! is never an error.

/// Errors returned by the movement integrator and the parameter loaders.
#[derive(Debug, thiserror::Error)]
pub enum MovementError {
    /// `delta_time` was zero, negative, or not finite.
    #[error("delta time must be finite and > 0, got {0}")]
    InvalidDeltaTime(f32),

    /// A tick input field contained NaN or infinity.
    #[error("non-finite value in tick input field `{field}`")]
    NonFiniteInput { field: &'static str },

    /// A movement state field held, or would be left holding, NaN or infinity.
    #[error("non-finite value in movement state field `{field}`")]
    NonFiniteState { field: &'static str },

    /// A tuning parameter is outside its valid range.
    #[error("invalid movement parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Reading a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file was not valid JSON for `MovementParams`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
