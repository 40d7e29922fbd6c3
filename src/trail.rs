/*
 * Trail Module
 *
 * The trail is the pen line of the paper turtle: every tick appends the
 * robot's position, in order, and only the clear button removes points.
 * It grows without bound for the lifetime of the window.
 */

use nannou::prelude::*;

use crate::viewport::Viewport;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: Vec<Point2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    // Draw the trail as a single polyline through every recorded point
    pub fn draw(&self, draw: &Draw, viewport: &Viewport, weight: f32) {
        if self.points.len() < 2 {
            return;
        }

        let points = self.points.iter().map(|&p| (viewport.to_draw(p), LIME));
        draw.polyline().weight(weight).points_colored(points);
    }
}
