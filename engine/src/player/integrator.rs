//! Movement Integrator
//!
//! Runs one simulation tick: picks the ground or air model from the grounded
//! flag, caps horizontal speed, composes vertical velocity and applies look
//! input to the orientation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strafe_jump_engine::player::{MovementIntegrator, MovementParams, MovementState, TickInput};
//!
//! let integrator = MovementIntegrator::new(MovementParams::default())?;
//! let mut state = MovementState::new();
//!
//! // Each frame:
//! state.grounded = collision.is_grounded();
//! integrator.tick(&mut state, &input)?;
//! collision.move_by(state.displacement(input.delta_time));
//! ```

use glam::Vec3;
use tracing::{debug, trace};

use super::error::MovementError;
use super::params::MovementParams;
use super::state::{check_finite_state, MovementMode, MovementState, TickInput};
use super::{air, ground, speed_clamp};
use crate::camera::OrientationUpdater;

/// Velocity integrator bound to one validated set of parameters.
///
/// Holds no per-character state, so one integrator can drive any number of
/// `MovementState`s.
#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    params: MovementParams,
    orientation: OrientationUpdater,
}

impl MovementIntegrator {
    /// Create an integrator, validating the parameters once.
    pub fn new(params: MovementParams) -> Result<Self, MovementError> {
        params.validate()?;
        Ok(Self {
            orientation: OrientationUpdater::new(&params),
            params,
        })
    }

    /// The parameters this integrator runs with.
    #[inline]
    pub fn params(&self) -> &MovementParams {
        &self.params
    }

    /// Advance `state` by one tick.
    ///
    /// Velocity and gravity integrate even while `state.can_move` is false;
    /// only look, jump and crouch are gated.
    ///
    /// Non-finite input or state is rejected before anything is touched, and a
    /// tick whose result would overflow to infinity is rejected without being
    /// committed. `state` is only written once the whole tick succeeded.
    ///
    /// # Returns
    /// The mode the tick ran in.
    pub fn tick(&self, state: &mut MovementState, input: &TickInput) -> Result<MovementMode, MovementError> {
        input.validate()?;
        state.validate()?;

        let params = &self.params;
        let dt = input.delta_time;
        let wish = Vec3::new(input.wish_dir.x, 0.0, input.wish_dir.z).clamp_length_max(1.0);
        let forward_speed = params.effective_forward_speed(input.crouch_held && state.can_move);

        let mode = MovementMode::from_grounded(state.grounded);

        let horizontal = state.horizontal_velocity();
        let (horizontal, vertical) = match mode {
            MovementMode::Grounded => {
                let jump = input.jump_pressed && state.can_move;
                if jump {
                    debug!(jump_power = params.jump_power, "jump");
                }
                (
                    ground::apply(horizontal, wish, forward_speed, params, dt),
                    ground::vertical_velocity(jump, params),
                )
            }
            MovementMode::Airborne => (
                air::apply(
                    horizontal,
                    wish,
                    input.forward_axis,
                    input.look_delta_x,
                    forward_speed,
                    params,
                    dt,
                ),
                air::apply_gravity(state.velocity.y, params, dt),
            ),
        };

        let (horizontal, clamped) = speed_clamp::clamp_horizontal(horizontal, params.max_speed);
        if clamped {
            debug!(max_speed = params.max_speed, "horizontal speed clamped");
        }

        let velocity = Vec3::new(horizontal.x, vertical, horizontal.z);
        let (yaw, pitch) = self
            .orientation
            .resolve(state, input.look_delta_x, input.look_delta_y);
        check_finite_state("velocity", velocity.is_finite())?;
        check_finite_state("yaw", yaw.is_finite())?;
        check_finite_state("pitch", pitch.is_finite())?;

        if mode != state.mode() {
            debug!(?mode, speed = state.horizontal_speed(), "movement mode changed");
        }
        state.velocity = velocity;
        state.yaw = yaw;
        state.pitch = pitch;
        state.set_mode(mode);

        trace!(
            ?mode,
            speed = state.horizontal_speed(),
            vertical = state.velocity.y,
            yaw = state.yaw,
            pitch = state.pitch,
            "tick"
        );

        Ok(mode)
    }
}

/// Advance `state` by one tick with the given parameters.
///
/// Validates `params` on every call; prefer [`MovementIntegrator`] when the
/// parameters are fixed for a session.
pub fn tick(
    state: &mut MovementState,
    input: &TickInput,
    params: &MovementParams,
) -> Result<MovementMode, MovementError> {
    MovementIntegrator::new(*params)?.tick(state, input)
}
