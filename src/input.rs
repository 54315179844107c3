/*
 * Input Module
 *
 * This module handles user input events for the simulation.
 * A left click inside the world rectangle spawns a boid at the cursor,
 * unless the pointer is over the control panel.
 */

use log::debug;
use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    if !model.viewport.contains_screen_point(model.mouse_position) {
        debug!("ignored click outside the world at {:?}", model.mouse_position);
        return;
    }

    let world_pos = model.viewport.screen_to_world(model.mouse_position);
    model.flock.spawn_boid(world_pos);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
