/*
 * Button Module
 *
 * A static, labelled screen-space rectangle. It holds no state of its own;
 * clicks are hit-tested against it by the physics tick.
 */

use nannou::prelude::*;

use crate::params::SimulationParams;
use crate::viewport::Viewport;

// Offset of the label from the button's top-left corner
const LABEL_INSET: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub origin: Point2,
    pub size: Vec2,
    pub label: &'static str,
}

impl Button {
    pub fn new(origin: Point2, size: Vec2, label: &'static str) -> Self {
        Self { origin, size, label }
    }

    pub fn from_params(params: &SimulationParams) -> Self {
        Self::new(params.button_origin, params.button_size, params.button_label)
    }

    // Half-open hit test: the left and top edges are inside, the right and bottom edges are not
    pub fn contains(&self, point: Point2) -> bool {
        let end = self.origin + self.size;
        point.x >= self.origin.x && point.x < end.x && point.y >= self.origin.y && point.y < end.y
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport, font_size: u32) {
        draw.rect()
            .xy(viewport.rect_centre(self.origin, self.size))
            .wh(self.size)
            .color(rgb(200u8, 200, 200));

        let label_origin = self.origin + vec2(LABEL_INSET, LABEL_INSET);
        let label_size = self.size - vec2(LABEL_INSET, LABEL_INSET);
        draw.text(self.label)
            .xy(viewport.rect_centre(label_origin, label_size))
            .wh(label_size)
            .left_justify()
            .align_text_top()
            .font_size(font_size)
            .color(BLACK);
    }
}
