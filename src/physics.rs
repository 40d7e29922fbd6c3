/*
 * Physics Module
 *
 * This module owns the simulation state and the ordered update step that
 * runs once per tick:
 * 1. Input sampling: quit request, clear button click
 * 2. Control update from the held keys
 * 3. Speed clamp
 * 4. Kinematic integration along the heading
 * 5. Boundary clamp
 * 6. Trail append
 *
 * It also contains the fixed timestep accumulator that decides how many
 * ticks a rendered frame should run.
 */

use std::time::Duration;

use crate::button::Button;
use crate::input::TickInput;
use crate::params::SimulationParams;
use crate::robot::RobotState;
use crate::trail::Trail;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

pub struct Simulation {
    pub robot: RobotState,
    pub trail: Trail,
    pub button: Button,
    pub params: SimulationParams,
    run_state: RunState,
    ticks: u64,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            robot: RobotState::new(params.start_position()),
            trail: Trail::new(),
            button: Button::from_params(&params),
            params,
            run_state: RunState::Running,
            ticks: 0,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    // Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // Advance the simulation by one tick
    pub fn tick(&mut self, input: &TickInput) -> RunState {
        if !self.is_running() {
            return self.run_state;
        }

        if input.quit {
            log::info!("Simulation terminated after {} ticks", self.ticks);
            self.run_state = RunState::Terminated;
            return self.run_state;
        }

        if let Some(click) = input.click {
            if self.button.contains(click) {
                log::info!("Trail cleared ({} points)", self.trail.len());
                self.trail.clear();
            }
        }

        self.robot.apply_controls(input, &self.params);
        self.robot.clamp_speed(self.params.max_speed);
        self.robot.integrate();
        self.robot
            .clamp_to_arena(self.params.arena_min(), self.params.arena_max());

        self.trail.push(self.robot.position);
        self.ticks += 1;

        self.run_state
    }
}

// Fixed timestep accumulator, fed with the wall-clock time of each frame
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    accumulator: Duration,
    step: Duration,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            accumulator: Duration::ZERO,
            step,
            max_steps,
        }
    }

    pub fn from_params(params: &SimulationParams) -> Self {
        Self::new(params.tick_period, params.max_catch_up_ticks)
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    // Time carried over to the next frame
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    // Add a frame's elapsed time and return how many ticks to run now.
    // Backlog beyond max_steps is dropped, not carried.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.1} ms of simulation backlog",
                self.accumulator.as_secs_f64() * 1000.0
            );
            self.accumulator = Duration::from_nanos(
                (self.accumulator.as_nanos() % self.step.as_nanos()) as u64,
            );
        }

        steps
    }
}
