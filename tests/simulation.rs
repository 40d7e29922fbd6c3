/*
 * Simulation Integration Tests
 *
 * Drive the simulation with long seeded random key sequences and check the
 * state invariants after every tick.
 */

use nannou::prelude::*;
use paper_turtle::{FixedTimestep, RunState, Simulation, SimulationParams, TickInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_input(rng: &mut StdRng) -> TickInput {
    TickInput {
        forward: rng.gen_bool(0.4),
        backward: rng.gen_bool(0.3),
        turn_left: rng.gen_bool(0.3),
        turn_right: rng.gen_bool(0.3),
        ..Default::default()
    }
}

#[test]
fn random_driving_respects_speed_and_arena_bounds() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sim = Simulation::new(SimulationParams::default());

        for _ in 0..5_000 {
            sim.tick(&random_input(&mut rng));

            let robot = sim.robot;
            assert!((-5.0..=5.0).contains(&robot.speed), "speed {} out of range", robot.speed);
            assert!((15.0..=785.0).contains(&robot.position.x), "x {} out of arena", robot.position.x);
            assert!((15.0..=585.0).contains(&robot.position.y), "y {} out of arena", robot.position.y);
        }
    }
}

#[test]
fn trail_length_tracks_ticks_between_clears() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = Simulation::new(SimulationParams::default());
    let mut since_clear = 0;

    for _ in 0..2_000 {
        let mut input = random_input(&mut rng);
        let clicked = rng.gen_bool(0.01);
        if clicked {
            input.click = Some(pt2(rng.gen_range(640.0..780.0), rng.gen_range(20.0..60.0)));
            since_clear = 0;
        }

        let before = sim.trail.len();
        sim.tick(&input);
        since_clear += 1;

        assert_eq!(sim.trail.len(), since_clear);
        if !clicked {
            assert_eq!(sim.trail.len(), before + 1);
        }
        assert_eq!(sim.trail.last(), Some(sim.robot.position));
    }
}

#[test]
fn clicks_outside_button_never_clear() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut sim = Simulation::new(SimulationParams::default());

    for n in 1..=500 {
        // Anywhere left of the button
        let click = pt2(rng.gen_range(0.0..640.0), rng.gen_range(0.0..600.0));
        sim.tick(&TickInput {
            click: Some(click),
            ..random_input(&mut rng)
        });
        assert_eq!(sim.trail.len(), n);
    }
}

#[test]
fn driver_runs_ticks_at_fixed_cadence() {
    let params = SimulationParams::default();
    let mut timestep = FixedTimestep::from_params(&params);
    let mut sim = Simulation::new(params);

    // One second of 60 fps frames
    let frame = Duration::from_micros(16_667);
    for _ in 0..60 {
        for _ in 0..timestep.advance(frame) {
            sim.tick(&TickInput::default());
        }
    }

    assert_eq!(sim.ticks(), 33);
    assert_eq!(sim.trail.len(), 33);
}

#[test]
fn quit_ends_the_run() {
    let mut sim = Simulation::new(SimulationParams::default());
    for _ in 0..10 {
        sim.tick(&TickInput {
            forward: true,
            ..Default::default()
        });
    }

    assert_eq!(sim.tick(&TickInput::quit()), RunState::Terminated);
    let frozen = sim.robot;
    for _ in 0..10 {
        sim.tick(&TickInput {
            forward: true,
            ..Default::default()
        });
    }
    assert_eq!(sim.robot, frozen);
    assert_eq!(sim.ticks(), 10);
}
