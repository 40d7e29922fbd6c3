/*
 * Renderer Module
 *
 * This module draws one frame of the simulation, back to front:
 * background, trail, robot, clear button, position readout and finally the
 * egui overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let simulation = &model.simulation;
    let params = &simulation.params;

    draw.background().color(WHITE);

    simulation.trail.draw(&draw, &model.viewport, params.line_weight);
    simulation.robot.draw(&draw, &model.viewport, params);
    simulation.button.draw(&draw, &model.viewport, params.font_size);
    ui::draw_position(&draw, &model.viewport, &simulation.robot, params.font_size);

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("Failed to render frame: {:?}", err);
        return;
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::warn!("Failed to render telemetry overlay: {:?}", err);
    }
}
