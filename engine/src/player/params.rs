//! Movement Parameters
//!
//! Tuning values for ground and air movement, jumping and mouse look.
//! One `MovementParams` is shared read-only for a whole session.
//!
//! # Loading
//!
//! Parameters can be loaded from JSON. Fields that are missing from the file
//! keep their default values, so a tuning file only needs to name what it
//! changes:
//!
//! ```rust,ignore
//! use strafe_jump_engine::player::MovementParams;
//!
//! let params = MovementParams::from_json_str(r#"{ "air_accel": 5.0 }"#)?;
//! assert_eq!(params.forward_speed, 6.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::MovementError;

/// Ground wish speed in units per second
pub const FORWARD_SPEED: f32 = 6.0;

/// Wish speed while crouching in units per second
pub const CROUCH_SPEED: f32 = 3.0;

/// Upward velocity applied on jump in units per second
pub const JUMP_POWER: f32 = 7.0;

/// Downward acceleration while airborne in units per second squared
pub const GRAVITY: f32 = 25.0;

/// Degrees of rotation per unit of look input
pub const LOOK_SPEED: f32 = 2.0;

/// Pitch limit in degrees (applied symmetrically)
pub const LOOK_X_LIMIT: f32 = 45.0;

/// Ground acceleration in units per second squared
pub const GROUND_ACCEL: f32 = 50.0;

/// Air acceleration factor (Source-style, scaled by wish speed)
pub const AIR_ACCEL: f32 = 3.0;

/// Air acceleration used when wish input is roughly perpendicular to velocity
pub const STRAFE_ACCEL: f32 = 25.0;

/// Air control strength
pub const AIR_CONTROL: f32 = 1.0;

/// Turn speed (look delta times look speed) at which air accel suppression bottoms out
pub const TURN_SPEED_THRESHOLD: f32 = 4.0;

/// Air accel multiplier applied at or above the turn speed threshold
pub const MIN_TURN_ACCEL_MULTIPLIER: f32 = 0.05;

/// Ground friction in units per second squared (only without wish input)
pub const FRICTION: f32 = 8.0;

/// Horizontal speed cap in units per second
pub const MAX_SPEED: f32 = 50.0;

/// Configuration for the movement integrator.
///
/// All speeds are in world units per second, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementParams {
    /// Target ground speed and wish speed for full input
    pub forward_speed: f32,
    /// Vertical velocity set on jump
    pub jump_power: f32,
    /// Gravity magnitude (positive, pulls toward -Y)
    pub gravity: f32,
    /// Look sensitivity (degrees per input unit)
    pub look_speed: f32,
    /// Pitch limit in degrees
    pub look_x_limit: f32,
    /// Ground acceleration toward target velocity
    pub ground_accel: f32,
    /// Default air acceleration
    pub air_accel: f32,
    /// Air acceleration for near-perpendicular strafing
    pub strafe_accel: f32,
    /// Air control steering strength
    pub air_control: f32,
    /// Turn speed at which air accel reaches its minimum multiplier
    pub turn_speed_threshold: f32,
    /// Smallest multiplier applied to air accel while turning fast
    pub min_turn_accel_multiplier: f32,
    /// Ground friction when there is no wish input
    pub friction: f32,
    /// Horizontal speed cap
    pub max_speed: f32,
    /// Replaces `forward_speed` while crouching
    pub crouch_speed: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            forward_speed: FORWARD_SPEED,
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            look_speed: LOOK_SPEED,
            look_x_limit: LOOK_X_LIMIT,
            ground_accel: GROUND_ACCEL,
            air_accel: AIR_ACCEL,
            strafe_accel: STRAFE_ACCEL,
            air_control: AIR_CONTROL,
            turn_speed_threshold: TURN_SPEED_THRESHOLD,
            min_turn_accel_multiplier: MIN_TURN_ACCEL_MULTIPLIER,
            friction: FRICTION,
            max_speed: MAX_SPEED,
            crouch_speed: CROUCH_SPEED,
        }
    }
}

impl MovementParams {
    /// Create parameters with custom ground speed and speed cap.
    pub fn with_speeds(forward_speed: f32, max_speed: f32) -> Self {
        Self {
            forward_speed,
            max_speed,
            ..Default::default()
        }
    }

    /// Wish speed for this tick, accounting for crouch.
    #[inline]
    pub fn effective_forward_speed(&self, crouching: bool) -> f32 {
        if crouching {
            self.crouch_speed
        } else {
            self.forward_speed
        }
    }

    /// Check every parameter is finite and inside its valid range.
    pub fn validate(&self) -> Result<(), MovementError> {
        let non_negative = [
            ("forward_speed", self.forward_speed),
            ("jump_power", self.jump_power),
            ("gravity", self.gravity),
            ("look_speed", self.look_speed),
            ("look_x_limit", self.look_x_limit),
            ("ground_accel", self.ground_accel),
            ("air_accel", self.air_accel),
            ("strafe_accel", self.strafe_accel),
            ("air_control", self.air_control),
            ("friction", self.friction),
            ("crouch_speed", self.crouch_speed),
        ];

        for (name, value) in non_negative {
            check(name, value, value >= 0.0, "must be finite and >= 0")?;
        }

        check(
            "turn_speed_threshold",
            self.turn_speed_threshold,
            self.turn_speed_threshold > 0.0,
            "must be finite and > 0",
        )?;
        check(
            "min_turn_accel_multiplier",
            self.min_turn_accel_multiplier,
            (0.0..=1.0).contains(&self.min_turn_accel_multiplier),
            "must be within [0, 1]",
        )?;
        check(
            "max_speed",
            self.max_speed,
            self.max_speed > 0.0,
            "must be finite and > 0",
        )?;

        Ok(())
    }

    /// Parse parameters from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, MovementError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a JSON file and validate them.
    pub fn load_json(path: &Path) -> Result<Self, MovementError> {
        let text = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), "loaded movement params");
        Ok(params)
    }

    /// Serialize parameters as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, MovementError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check(name: &'static str, value: f32, in_range: bool, reason: &'static str) -> Result<(), MovementError> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(MovementError::InvalidParameter { name, value, reason })
    }
}
