/*
 * Application Module
 *
 * This module defines the main application model for the paper turtle
 * simulation: window creation, the fixed timestep update that drives the
 * physics tick, and teardown.
 *
 * nannou calls update once per frame with the elapsed wall-clock time. That
 * time is fed to a FixedTimestep, which decides how many 30 ms ticks the
 * frame runs. Queued clicks and the close request go to the first of them.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{self, PendingInput, TickInput};
use crate::params::SimulationParams;
use crate::physics::{FixedTimestep, RunState, Simulation};
use crate::renderer::view;
use crate::ui;
use crate::viewport::Viewport;
use crate::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub viewport: Viewport,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub timestep: FixedTimestep,
    pub pending: PendingInput,
    pub show_telemetry: bool,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Only a close request ends the simulation
    app.set_exit_on_escape(false);

    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .resizable(false)
        .view(view)
        .mouse_pressed(input::mouse_pressed)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to create the simulation window");

    let window = app
        .window(window_id)
        .expect("Simulation window closed during startup");
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    let viewport = Viewport::new(params.arena_width, params.arena_height);
    let timestep = FixedTimestep::from_params(&params);

    log::info!(
        "Window {}x{} ready, ticking every {} ms",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        timestep.step().as_millis()
    );

    Model {
        simulation: Simulation::new(params),
        viewport,
        egui,
        debug_info: DebugInfo::default(),
        timestep,
        pending: PendingInput::default(),
        show_telemetry: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let steps = model.timestep.advance(update.since_last);
    let mut ticks_run = 0;

    for _ in 0..steps {
        let input = TickInput::sample(|key| app.keys.down.contains(&key), model.pending.take());
        ticks_run += 1;

        if model.simulation.tick(&input) == RunState::Terminated {
            app.quit();
            break;
        }
    }

    model.debug_info.ticks_this_frame = ticks_run;

    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(
        &mut model.egui,
        &model.debug_info,
        &model.simulation,
        model.show_telemetry,
    );
}

// Teardown once nannou's event loop has finished
pub fn exit(_app: &App, mut model: Model) {
    // The window may close before another tick sees the request
    if model.simulation.is_running() {
        model.simulation.tick(&TickInput::quit());
    }

    log::info!(
        "Exiting after {} ticks with {} trail points",
        model.simulation.ticks(),
        model.simulation.trail.len()
    );
}
