/*
 * Robot Module
 *
 * This module defines the RobotState struct and its per-tick behaviour.
 * The robot is a point mass: its heading is both the direction it faces and
 * the direction it travels, and its speed is changed directly by the keys.
 */

use nannou::prelude::*;

use crate::input::TickInput;
use crate::params::SimulationParams;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotState {
    pub position: Point2,
    pub heading: f32,
    pub speed: f32,
}

impl RobotState {
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
        }
    }

    // Apply one increment per held key. Opposing keys cancel out.
    pub fn apply_controls(&mut self, input: &TickInput, params: &SimulationParams) {
        if input.forward {
            self.speed += params.speed_increment;
        }
        if input.backward {
            self.speed -= params.speed_increment;
        }
        if input.turn_left {
            self.heading -= params.turn_increment;
        }
        if input.turn_right {
            self.heading += params.turn_increment;
        }
    }

    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.speed = self.speed.clamp(-max_speed, max_speed);
    }

    // Move one tick along the heading. Heading is never wrapped.
    pub fn integrate(&mut self) {
        self.position.x += self.speed * self.heading.cos();
        self.position.y += self.speed * self.heading.sin();
    }

    // Pin the robot inside the arena. Speed is left alone so it keeps pushing against the wall.
    pub fn clamp_to_arena(&mut self, min: Point2, max: Point2) {
        self.position.x = self.position.x.clamp(min.x, max.x);
        self.position.y = self.position.y.clamp(min.y, max.y);
    }

    // End point of the heading indicator
    pub fn heading_tip(&self, length: f32) -> Point2 {
        self.position + vec2(self.heading.cos(), self.heading.sin()) * length
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport, params: &SimulationParams) {
        let centre = viewport.to_draw(self.position);

        draw.ellipse()
            .xy(centre)
            .radius(params.robot_radius)
            .color(BLUE);

        draw.line()
            .start(centre)
            .end(viewport.to_draw(self.heading_tip(params.heading_indicator_length)))
            .weight(params.line_weight)
            .color(BLACK);
    }
}
