//! Movement State and Tick Input
//!
//! `MovementState` is the only data that survives between ticks. It is owned
//! by the caller and mutated in place by the integrator. `TickInput` is built
//! fresh every frame and consumed immediately.
//!
//! # Coordinate System
//!
//! - +Y = up
//! - yaw 0 looks along +Z, positive yaw turns toward +X
//! - positive pitch looks down (camera-local rotation about X)
//! - angles are in degrees

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::MovementError;

/// Which movement model ran on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    /// Friction and direct acceleration toward the wish velocity.
    #[default]
    Grounded,
    /// Source-style accelerate, air control and gravity.
    Airborne,
}

impl MovementMode {
    /// Select the mode from the externally supplied grounded flag.
    #[inline]
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }
}

/// Per-character movement state.
///
/// Create one per controlled character at session start, then pass it by
/// `&mut` to the integrator every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    /// World-space velocity in units per second (y is vertical)
    pub velocity: Vec3,
    /// Body yaw in degrees, unbounded
    pub yaw: f32,
    /// Camera pitch in degrees, kept within the look limit
    pub pitch: f32,
    /// Whether the collision system reports ground contact this tick
    pub grounded: bool,
    /// Pause/freeze gate; look and jump are ignored while false
    pub can_move: bool,
    /// Mode used by the last tick
    mode: MovementMode,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            grounded: true,
            can_move: true,
            mode: MovementMode::Grounded,
        }
    }
}

impl MovementState {
    /// Create a grounded state at rest facing +Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given orientation (degrees).
    pub fn with_orientation(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch,
            ..Default::default()
        }
    }

    /// Mode the last tick ran in.
    #[inline]
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: MovementMode) {
        self.mode = mode;
    }

    /// Velocity projected onto the horizontal (XZ) plane.
    #[inline]
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Horizontal speed (XZ plane only).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity().length()
    }

    /// Distance to hand to the motion/collision system for this frame.
    #[inline]
    pub fn displacement(&self, dt: f32) -> Vec3 {
        self.velocity * dt
    }

    /// Yaw wrapped into `[0, 360)`.
    #[inline]
    pub fn yaw_wrapped(&self) -> f32 {
        self.yaw.rem_euclid(360.0)
    }

    /// Body forward direction on the horizontal plane.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Body right direction on the horizontal plane.
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, -yaw.sin())
    }

    /// Camera look direction including pitch.
    pub fn camera_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    /// Check that velocity and orientation hold finite values.
    pub fn validate(&self) -> Result<(), MovementError> {
        check_finite_state("velocity", self.velocity.is_finite())?;
        check_finite_state("yaw", self.yaw.is_finite())?;
        check_finite_state("pitch", self.pitch.is_finite())
    }
}

pub(crate) fn check_finite_state(field: &'static str, finite: bool) -> Result<(), MovementError> {
    if finite {
        Ok(())
    } else {
        Err(MovementError::NonFiniteState { field })
    }
}

/// Input for a single tick.
///
/// `wish_dir` is a world-space direction whose length is the input strength
/// (at most 1). `forward_axis` is the raw forward/back axis; air control only
/// steers while it is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// World-space wish direction, length in [0, 1]
    pub wish_dir: Vec3,
    /// Raw forward/back input axis in [-1, 1]
    pub forward_axis: f32,
    /// Horizontal look delta (positive turns right)
    pub look_delta_x: f32,
    /// Vertical look delta (positive looks up)
    pub look_delta_y: f32,
    /// Jump button held this tick
    pub jump_pressed: bool,
    /// Crouch button held this tick
    pub crouch_held: bool,
    /// Elapsed time in seconds, must be > 0
    pub delta_time: f32,
}

impl TickInput {
    /// Create an input with a wish direction and no look, jump or crouch.
    pub fn new(wish_dir: Vec3, delta_time: f32) -> Self {
        Self {
            wish_dir,
            delta_time,
            ..Default::default()
        }
    }

    /// Create an input with no movement at all.
    pub fn idle(delta_time: f32) -> Self {
        Self::new(Vec3::ZERO, delta_time)
    }

    /// Set the raw forward/back axis.
    pub fn with_forward_axis(mut self, forward_axis: f32) -> Self {
        self.forward_axis = forward_axis;
        self
    }

    /// Set the look deltas.
    pub fn with_look(mut self, look_delta_x: f32, look_delta_y: f32) -> Self {
        self.look_delta_x = look_delta_x;
        self.look_delta_y = look_delta_y;
        self
    }

    /// Set the jump button.
    pub fn with_jump(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        self
    }

    /// Set the crouch button.
    pub fn with_crouch(mut self, crouch_held: bool) -> Self {
        self.crouch_held = crouch_held;
        self
    }

    /// Check the tick preconditions.
    pub fn validate(&self) -> Result<(), MovementError> {
        if !(self.delta_time.is_finite() && self.delta_time > 0.0) {
            return Err(MovementError::InvalidDeltaTime(self.delta_time));
        }
        if !self.wish_dir.is_finite() {
            return Err(MovementError::NonFiniteInput { field: "wish_dir" });
        }
        if !self.forward_axis.is_finite() {
            return Err(MovementError::NonFiniteInput { field: "forward_axis" });
        }
        if !self.look_delta_x.is_finite() {
            return Err(MovementError::NonFiniteInput { field: "look_delta_x" });
        }
        if !self.look_delta_y.is_finite() {
            return Err(MovementError::NonFiniteInput { field: "look_delta_y" });
        }
        Ok(())
    }
}
