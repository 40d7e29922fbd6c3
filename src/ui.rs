/*
 * UI Module
 *
 * This module contains the egui telemetry overlay and the on-canvas
 * position readout. The overlay only reads simulation state.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::physics::Simulation;
use crate::robot::RobotState;
use crate::viewport::Viewport;

// Top-left corner and box of the position readout, screen space
const READOUT_ORIGIN: [f32; 2] = [10.0, 10.0];
const READOUT_SIZE: [f32; 2] = [240.0, 30.0];

// Build this frame's egui UI. Must run every frame so egui keeps its input in sync.
pub fn update_ui(egui: &mut Egui, debug_info: &DebugInfo, simulation: &Simulation, visible: bool) {
    let ctx = egui.begin_frame();

    if !visible {
        return;
    }

    egui::Window::new("Telemetry")
        .default_pos([10.0, 440.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Ticks this frame: {}", debug_info.ticks_this_frame));
            ui.label(format!("Total ticks: {}", simulation.ticks()));

            ui.separator();

            let robot = &simulation.robot;
            ui.label(format!("Speed: {:.1}", robot.speed));
            ui.label(format!("Heading: {:.2} rad", robot.heading));
            ui.label(format!("Trail points: {}", simulation.trail.len()));
        });
}

// Text of the live position readout. Coordinates are truncated, not rounded.
pub fn position_label(robot: &RobotState) -> String {
    format!("X: {} Y: {}", robot.position.x as i32, robot.position.y as i32)
}

// Draw the position readout in the top-left corner
pub fn draw_position(draw: &Draw, viewport: &Viewport, robot: &RobotState, font_size: u32) {
    let origin = Vec2::from(READOUT_ORIGIN);
    let size = Vec2::from(READOUT_SIZE);
    draw.text(&position_label(robot))
        .xy(viewport.rect_centre(origin, size))
        .wh(size)
        .left_justify()
        .align_text_top()
        .font_size(font_size)
        .color(RED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_label_truncates() {
        let mut robot = RobotState::new(pt2(400.0, 300.0));
        assert_eq!(position_label(&robot), "X: 400 Y: 300");

        robot.position = pt2(404.99, 15.7);
        assert_eq!(position_label(&robot), "X: 404 Y: 15");
    }
}
