//! Movement Tests - Ground, Air and Speed Cap Behaviour
//!
//! Drives the public integrator tick by tick and checks the movement
//! properties the physics must hold.

use glam::Vec3;
use strafe_jump_engine::input::{InputSampler, RawInput};
use strafe_jump_engine::player::air;
use strafe_jump_engine::player::{
    tick, MovementIntegrator, MovementMode, MovementParams, MovementState, TickInput,
    GROUND_STICK_VELOCITY,
};

const DT: f32 = 0.02;
const EPSILON: f32 = 0.0001;

fn integrator() -> MovementIntegrator {
    MovementIntegrator::new(MovementParams::default()).expect("default params are valid")
}

fn airborne_with(velocity: Vec3) -> MovementState {
    let mut state = MovementState::new();
    state.grounded = false;
    state.velocity = velocity;
    state
}

/// Deterministic pseudo-random sequence in [-1, 1].
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.0 >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
    }
}

// ============================================================================
// Ground Tests
// ============================================================================

#[test]
fn test_ground_scenario_one_tick_from_rest() {
    let integrator = integrator();
    let mut state = MovementState::new();

    integrator
        .tick(&mut state, &TickInput::new(Vec3::Z, DT))
        .unwrap();

    // min(50 * 0.02, 6) = 1.0 along +Z
    assert!((state.horizontal_speed() - 1.0).abs() < EPSILON);
    assert!((state.velocity.z - 1.0).abs() < EPSILON);
    assert!(state.velocity.x.abs() < EPSILON);
    assert_eq!(state.velocity.y, GROUND_STICK_VELOCITY);
}

#[test]
fn test_ground_friction_converges_to_zero() {
    let integrator = integrator();
    let params = integrator.params();
    let step = params.friction * DT;

    let starts = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -7.3),
        Vec3::new(2.5, 0.0, 2.5),
        Vec3::new(40.0, 0.0, -10.0),
    ];

    for start in starts {
        let mut state = MovementState::new();
        state.velocity = start;
        let max_ticks = (start.length() / step).ceil() as usize;
        let direction = start.normalize();

        let mut previous = state.horizontal_speed();
        let mut ticks = 0;
        while state.horizontal_speed() > 0.0 {
            integrator.tick(&mut state, &TickInput::idle(DT)).unwrap();
            ticks += 1;

            let speed = state.horizontal_speed();
            assert!(speed < previous, "speed must strictly decrease");
            // Never overshoots past zero into the opposite direction
            assert!(state.horizontal_velocity().dot(direction) >= 0.0);
            previous = speed;

            assert!(ticks <= max_ticks, "did not stop within {max_ticks} ticks");
        }

        assert_eq!(state.horizontal_velocity(), Vec3::ZERO);
    }
}

#[test]
fn test_ground_acceleration_monotonic_approach() {
    let integrator = integrator();
    let forward_speed = integrator.params().forward_speed;
    let wish = Vec3::new(1.0, 0.0, -1.0).normalize();

    let mut state = MovementState::new();
    let mut previous = 0.0;
    for _ in 0..100 {
        integrator
            .tick(&mut state, &TickInput::new(wish, DT))
            .unwrap();
        let speed = state.horizontal_speed();
        assert!(speed >= previous);
        assert!(speed <= forward_speed + EPSILON);
        previous = speed;
    }

    assert!((previous - forward_speed).abs() < EPSILON);
    assert!(state.horizontal_velocity().normalize().dot(wish) > 0.9999);
}

#[test]
fn test_ground_crouch_limits_speed() {
    let integrator = integrator();
    let mut state = MovementState::new();

    for _ in 0..100 {
        integrator
            .tick(&mut state, &TickInput::new(Vec3::Z, DT).with_crouch(true))
            .unwrap();
    }

    assert!((state.horizontal_speed() - integrator.params().crouch_speed).abs() < EPSILON);
}

#[test]
fn test_jump_then_gravity() {
    let integrator = integrator();
    let params = *integrator.params();
    let mut state = MovementState::new();

    integrator
        .tick(&mut state, &TickInput::idle(DT).with_jump(true))
        .unwrap();
    assert_eq!(state.velocity.y, params.jump_power);

    // Collision system now reports airborne
    state.grounded = false;
    integrator.tick(&mut state, &TickInput::idle(DT)).unwrap();
    assert!((state.velocity.y - (params.jump_power - params.gravity * DT)).abs() < EPSILON);

    let before = state.velocity.y;
    integrator.tick(&mut state, &TickInput::idle(DT)).unwrap();
    assert!(state.velocity.y < before);
}

// ============================================================================
// Air Tests
// ============================================================================

#[test]
fn test_air_scenario_perpendicular_strafe() {
    let integrator = integrator();
    let mut state = airborne_with(Vec3::new(3.0, 0.0, 0.0));

    integrator
        .tick(&mut state, &TickInput::new(Vec3::Z, DT))
        .unwrap();

    // accel 25 selected, add speed 6, accel speed min(25 * 0.02 * 6, 6) = 3
    assert!((state.velocity.x - 3.0).abs() < EPSILON);
    assert!((state.velocity.z - 3.0).abs() < EPSILON);
    assert!((state.horizontal_speed() - 18.0_f32.sqrt()).abs() < EPSILON);
    assert!(state.horizontal_speed() > 3.0);
}

#[test]
fn test_air_accelerate_bound() {
    let params = MovementParams::default();
    let mut rng = Lcg(7);

    for _ in 0..500 {
        let velocity = Vec3::new(rng.next() * 12.0, 0.0, rng.next() * 12.0);
        let wish_dir = Vec3::new(rng.next(), 0.0, rng.next()).normalize_or_zero();
        if wish_dir == Vec3::ZERO {
            continue;
        }
        let wish_speed = params.forward_speed;
        let accel = air::select_accel(velocity, wish_dir, wish_speed, &params);

        let after = air::accelerate(velocity, wish_dir, wish_speed, accel, DT);
        let before_along = velocity.dot(wish_dir);
        let after_along = after.dot(wish_dir);

        if before_along <= wish_speed {
            assert!(after_along <= wish_speed + EPSILON);
        } else {
            assert_eq!(after, velocity);
        }
        assert!(after_along >= before_along - EPSILON);
    }
}

#[test]
fn test_air_tick_respects_wish_speed_without_air_control() {
    let integrator = integrator();
    let wish_speed = integrator.params().forward_speed;
    let mut state = airborne_with(Vec3::new(0.0, 0.0, 5.9));

    integrator
        .tick(&mut state, &TickInput::new(Vec3::Z, DT))
        .unwrap();

    assert!(state.horizontal_velocity().dot(Vec3::Z) <= wish_speed + EPSILON);
}

#[test]
fn test_turn_suppression_monotonic() {
    let integrator = integrator();
    let params = *integrator.params();
    let max_look = params.turn_speed_threshold / params.look_speed;

    let mut previous_gain = f32::MAX;
    let steps = 20;
    for i in 0..=steps {
        let look_x = max_look * i as f32 / steps as f32;
        let mut state = airborne_with(Vec3::new(3.0, 0.0, 0.0));
        integrator
            .tick(&mut state, &TickInput::new(Vec3::Z, DT).with_look(look_x, 0.0))
            .unwrap();

        let gain = state.velocity.z;
        assert!(gain < previous_gain);
        previous_gain = gain;
    }

    // Bottoms out at min multiplier * strafe accel * dt * wish speed
    let floor = params.min_turn_accel_multiplier * params.strafe_accel * DT * params.forward_speed;
    assert!((previous_gain - floor).abs() < EPSILON);
}

#[test]
fn test_strafe_jumping_gains_speed() {
    let integrator = integrator();
    let forward_speed = integrator.params().forward_speed;
    let mut state = airborne_with(Vec3::new(0.0, 0.0, forward_speed));

    for _ in 0..20 {
        // Wish 80 degrees off the current velocity, like holding strafe while turning
        let direction = state.horizontal_velocity().normalize();
        let angle = 80.0_f32.to_radians();
        let wish = Vec3::new(
            direction.x * angle.cos() + direction.z * angle.sin(),
            0.0,
            direction.z * angle.cos() - direction.x * angle.sin(),
        );
        integrator
            .tick(&mut state, &TickInput::new(wish, DT))
            .unwrap();
    }

    assert!(state.horizontal_speed() > 2.0 * forward_speed);
}

#[test]
fn test_air_control_only_with_forward_axis() {
    let integrator = integrator();
    let wish = Vec3::new(1.0, 0.0, 1.0).normalize();

    let mut strafe_only = airborne_with(Vec3::new(0.0, 0.0, 10.0));
    integrator
        .tick(&mut strafe_only, &TickInput::new(wish, DT))
        .unwrap();

    let mut with_forward = airborne_with(Vec3::new(0.0, 0.0, 10.0));
    integrator
        .tick(&mut with_forward, &TickInput::new(wish, DT).with_forward_axis(1.0))
        .unwrap();

    // Air control keeps speed but turns further toward the wish
    assert!((with_forward.horizontal_speed() - strafe_only.horizontal_speed()).abs() < EPSILON);
    let strafe_angle = strafe_only.horizontal_velocity().normalize().dot(wish);
    let forward_angle = with_forward.horizontal_velocity().normalize().dot(wish);
    assert!(forward_angle > strafe_angle);
}

// ============================================================================
// Speed Cap and State Machine Tests
// ============================================================================

#[test]
fn test_speed_clamp_invariant_over_random_ticks() {
    let params = MovementParams {
        max_speed: 8.0,
        ..Default::default()
    };
    let integrator = MovementIntegrator::new(params).unwrap();
    let mut rng = Lcg(42);
    let mut state = MovementState::new();
    state.velocity = Vec3::new(30.0, 0.0, 0.0);

    for _ in 0..2000 {
        state.grounded = rng.next() > 0.3;
        let raw = RawInput {
            vertical_axis: rng.next(),
            horizontal_axis: rng.next(),
            mouse_x: rng.next() * 3.0,
            mouse_y: rng.next() * 3.0,
            jump_held: rng.next() > 0.5,
            crouch_held: rng.next() > 0.8,
        };
        let input = InputSampler::sample_for(&raw, &state, DT);
        integrator.tick(&mut state, &input).unwrap();

        assert!(state.horizontal_speed() <= params.max_speed + EPSILON);
        assert!(state.velocity.is_finite());
    }
}

#[test]
fn test_no_hysteresis_between_modes() {
    let integrator = integrator();
    let mut state = MovementState::new();
    let pattern = [true, false, true, true, false, false, true];

    for grounded in pattern {
        state.grounded = grounded;
        let mode = integrator.tick(&mut state, &TickInput::idle(DT)).unwrap();
        assert_eq!(mode, MovementMode::from_grounded(grounded));
        assert_eq!(state.mode(), mode);
    }
}

#[test]
fn test_frozen_character_still_integrates() {
    let integrator = integrator();
    let mut state = airborne_with(Vec3::new(2.0, 3.0, 0.0));
    state.can_move = false;

    integrator
        .tick(&mut state, &TickInput::idle(DT).with_look(5.0, 5.0))
        .unwrap();

    // Gravity still applies, look does not
    assert!(state.velocity.y < 3.0);
    assert_eq!(state.yaw, 0.0);
    assert_eq!(state.pitch, 0.0);

    // Frozen on the ground: jump ignored, stick bias kept
    state.grounded = true;
    integrator
        .tick(&mut state, &TickInput::idle(DT).with_jump(true))
        .unwrap();
    assert_eq!(state.velocity.y, GROUND_STICK_VELOCITY);
}

#[test]
fn test_free_function_matches_integrator() {
    let params = MovementParams::default();
    let integrator = MovementIntegrator::new(params).unwrap();
    let input = TickInput::new(Vec3::new(0.6, 0.0, 0.8), DT)
        .with_forward_axis(1.0)
        .with_look(0.3, -0.2);

    let mut a = airborne_with(Vec3::new(4.0, 1.0, -2.0));
    let mut b = a;
    tick(&mut a, &input, &params).unwrap();
    integrator.tick(&mut b, &input).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_params_file_drives_integrator() {
    let path = std::env::temp_dir().join("strafe_jump_params_test.json");
    std::fs::write(&path, r#"{ "forward_speed": 10.0, "ground_accel": 100.0 }"#).unwrap();

    let params = MovementParams::load_json(&path).unwrap();
    let integrator = MovementIntegrator::new(params).unwrap();
    let mut state = MovementState::new();
    integrator
        .tick(&mut state, &TickInput::new(Vec3::Z, DT))
        .unwrap();

    // 100 * 0.02 = 2.0
    assert!((state.horizontal_speed() - 2.0).abs() < EPSILON);
    let _ = std::fs::remove_file(&path);
}
