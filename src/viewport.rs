/*
 * Viewport Module
 *
 * The simulation works in screen space: pixels with the origin at the
 * window's top-left corner and y growing downwards. nannou draws with the
 * origin at the window centre and y growing upwards. Viewport converts
 * between the two.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Convert a point from screen space to nannou's drawing space
    pub fn to_draw(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a point from nannou's drawing space (e.g. the mouse) to screen space
    pub fn to_screen(&self, point: Point2) -> Point2 {
        pt2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Centre, in drawing space, of a screen-space rectangle given by its top-left corner
    pub fn rect_centre(&self, origin: Point2, size: Vec2) -> Point2 {
        self.to_draw(origin + size / 2.0)
    }
}
