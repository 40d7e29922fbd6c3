/*
 * Input Module
 *
 * This module handles user input for the paper turtle simulation.
 *
 * Window events (clicks, the close request) arrive between ticks, so the
 * handlers only queue them in PendingInput. The next tick drains the queue
 * together with the current key-down state into a TickInput.
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;

use crate::app::Model;
use crate::button::Button;

// Everything a single tick reads from the user
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    pub quit: bool,
    // Left click in screen space
    pub click: Option<Point2>,
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl TickInput {
    // Build the input for one tick from the host's key-down state and the queued events
    pub fn sample<F>(is_down: F, pending: PendingInput) -> Self
    where
        F: Fn(Key) -> bool,
    {
        Self {
            quit: pending.quit,
            click: pending.click,
            forward: is_down(Key::Up),
            backward: is_down(Key::Down),
            turn_left: is_down(Key::Left),
            turn_right: is_down(Key::Right),
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

// Events queued between ticks
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingInput {
    pub click: Option<Point2>,
    pub quit: bool,
}

impl PendingInput {
    // Queue a click. A queued click on the button is kept over any later click.
    pub fn record_click(&mut self, click: Point2, button: &Button) {
        let button_queued = self.click.map_or(false, |queued| button.contains(queued));
        if !button_queued {
            self.click = Some(click);
        }
    }

    // Drain the queue. The quit request is sticky so a later tick still sees it.
    pub fn take(&mut self) -> PendingInput {
        let taken = *self;
        self.click = None;
        taken
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Clicks on the telemetry overlay belong to egui
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let click = model.viewport.to_screen(app.mouse.position());
    model.pending.record_click(click, &model.simulation.button);
}

// Key pressed event handler, only for keys that toggle something once per press
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::F1 {
        model.show_telemetry = !model.show_telemetry;
        log::debug!("Telemetry overlay {}", if model.show_telemetry { "shown" } else { "hidden" });
    }
}

// Handle raw window events for egui and the close request
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);

    if let WindowEvent::CloseRequested = event {
        log::info!("Close requested");
        model.pending.quit = true;
    }
}
