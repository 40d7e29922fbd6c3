/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds every constant
 * of the simulation: arena size, robot geometry, control increments, tick
 * pacing and button placement. Nothing here is adjustable at runtime.
 */

use nannou::prelude::*;
use std::time::Duration;

use crate::{ROBOT_RADIUS, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub arena_width: f32,
    pub arena_height: f32,
    pub robot_radius: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub turn_increment: f32,
    pub heading_indicator_length: f32,
    pub line_weight: f32,
    // Fixed timestep pacing
    pub tick_period: Duration,
    pub max_catch_up_ticks: u32,
    // Clear button, top-left corner and size in screen space
    pub button_origin: Point2,
    pub button_size: Vec2,
    pub button_label: &'static str,
    pub font_size: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        let arena_width = WINDOW_WIDTH as f32;
        Self {
            arena_width,
            arena_height: WINDOW_HEIGHT as f32,
            robot_radius: ROBOT_RADIUS,
            max_speed: 5.0,
            speed_increment: 1.0,
            turn_increment: 0.1,
            heading_indicator_length: 20.0,
            line_weight: 2.0,
            tick_period: Duration::from_millis(30),
            max_catch_up_ticks: 5,
            button_origin: pt2(arena_width - 160.0, 20.0),
            button_size: vec2(140.0, 40.0),
            button_label: "Limpa td",
            font_size: 20,
        }
    }
}

impl SimulationParams {
    // Where the robot starts: the middle of the arena
    pub fn start_position(&self) -> Point2 {
        pt2(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    // Lowest position the robot centre may take on each axis
    pub fn arena_min(&self) -> Point2 {
        pt2(self.robot_radius, self.robot_radius)
    }

    // Highest position the robot centre may take on each axis
    pub fn arena_max(&self) -> Point2 {
        pt2(
            self.arena_width - self.robot_radius,
            self.arena_height - self.robot_radius,
        )
    }
}
