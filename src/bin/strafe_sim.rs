//! Headless Strafe-Jump Simulation
//!
//! Run with: `cargo run --bin strafe_sim [params.json]`
//!
//! Drives the movement integrator through a scripted run: a one second
//! run-up on flat ground, then a series of bunny hops where each hop strafes
//! and turns the camera toward alternating sides. The floor is a plane at
//! y = 0 standing in for a real collision system.
//!
//! Set `RUST_LOG=strafe_jump_engine=debug` to see mode changes and jumps.

use std::path::Path;

use glam::Vec3;
use strafe_jump_engine::input::{InputSampler, RawInput};
use strafe_jump_engine::player::{MovementIntegrator, MovementParams, MovementState};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ============================================================================
// SCRIPT
// ============================================================================

/// Fixed simulation step (60 Hz)
const DT: f32 = 1.0 / 60.0;

/// Ticks spent accelerating on the ground before the first jump
const RUN_UP_TICKS: usize = 60;

/// Number of hops to simulate
const HOPS: usize = 8;

/// Safety cap on ticks per hop
const MAX_TICKS_PER_HOP: usize = 600;

/// Mouse X per tick while turning into a strafe
const TURN_PER_TICK: f32 = 0.6;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "strafe_jump_engine=info";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let params = match std::env::args().nth(1) {
        Some(path) => MovementParams::load_json(Path::new(&path))?,
        None => MovementParams::default(),
    };
    let integrator = MovementIntegrator::new(params)?;

    let mut state = MovementState::new();
    let mut position = Vec3::ZERO;

    println!("=== Run-up ({RUN_UP_TICKS} ticks) ===");
    for _ in 0..RUN_UP_TICKS {
        step(&integrator, &mut state, &mut position, &RawInput::axes(1.0, 0.0))?;
    }
    println!("speed after run-up: {:.2}", state.horizontal_speed());

    println!("=== Strafe jumps ===");
    for hop in 0..HOPS {
        // Alternate right and left strafes each hop
        let side = if hop % 2 == 0 { 1.0 } else { -1.0 };
        let raw = RawInput {
            horizontal_axis: side,
            mouse_x: TURN_PER_TICK * side,
            jump_held: true,
            ..Default::default()
        };

        // Take off
        step(&integrator, &mut state, &mut position, &raw)?;

        let mut ticks = 0;
        while !state.grounded && ticks < MAX_TICKS_PER_HOP {
            step(&integrator, &mut state, &mut position, &raw)?;
            ticks += 1;
        }

        println!(
            "hop {:>2}: speed {:>6.2}  yaw {:>7.1}  airtime {:>3} ticks  pos ({:.1}, {:.1})",
            hop + 1,
            state.horizontal_speed(),
            state.yaw,
            ticks,
            position.x,
            position.z,
        );
    }

    println!("=== Coast to a stop ===");
    let mut ticks = 0;
    while state.horizontal_speed() > 0.0 && ticks < MAX_TICKS_PER_HOP {
        step(&integrator, &mut state, &mut position, &RawInput::default())?;
        ticks += 1;
    }
    println!("stopped after {ticks} ticks");

    Ok(())
}

/// `RUST_LOG` directives when given and valid, otherwise the default filter.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// One host frame: sample input, integrate, move, resolve the floor.
fn step(
    integrator: &MovementIntegrator,
    state: &mut MovementState,
    position: &mut Vec3,
    raw: &RawInput,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputSampler::sample_for(raw, state, DT);
    integrator.tick(state, &input)?;

    *position += state.displacement(DT);
    if position.y <= 0.0 {
        position.y = 0.0;
        state.grounded = true;
    } else {
        state.grounded = false;
    }

    Ok(())
}
