/*
 * Application Module
 *
 * This module defines the application model and the per-frame update for
 * the windowed simulation. It wires nannou's window events to the input,
 * UI and renderer modules and advances the flock once per frame by the
 * elapsed time expressed in frames.
 */

use log::info;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::Viewport;
use crate::debug::DebugInfo;
use crate::flock::{Boundary, Flock};
use crate::input::{mouse_moved, mouse_pressed, raw_window_event};
use crate::renderer::view;
use crate::ui;
use crate::{WORLD_HEIGHT, WORLD_WIDTH};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub viewport: Viewport,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(WORLD_WIDTH as u32, WORLD_HEIGHT as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to create the simulation window");

    let window = app
        .window(window_id)
        .expect("simulation window closed during startup");
    let egui = Egui::from_window(&window);

    let boundary = Boundary::new(WORLD_WIDTH, WORLD_HEIGHT);
    info!("world boundary {}x{}", boundary.width, boundary.height);

    Model {
        flock: Flock::new(boundary),
        egui,
        debug_info: DebugInfo::default(),
        viewport: Viewport::new(boundary),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let delta_frames = model.debug_info.record_frame(app.fps(), update.since_last);

    let actions = ui::update_ui(&mut model.egui, &mut model.flock, &model.debug_info);
    if actions.reset_params {
        model.flock.reset_params();
    }
    if actions.clear_boids {
        model.flock.clear();
    }

    model.flock.update(delta_frames);
}
