/*
 * UI Module
 *
 * This module builds the control panel with nannou_egui. Every flock
 * parameter gets a slider bounded by its own range; edits go through the
 * clamped setter so the panel can never push a value out of range.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::flock::{Flock, FrameOrder};
use crate::params::FlockParams;

// Actions requested from the panel this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub reset_params: bool,
    pub clear_boids: bool,
}

// Update the UI and apply parameter edits to the flock
pub fn update_ui(egui: &mut Egui, flock: &mut Flock, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();
    let boid_count = flock.len();
    let mut snapshot_order = flock.frame_order() == FrameOrder::Snapshot;

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Parameters", |ui| {
                parameter_sliders(ui, flock.params_mut());

                if ui.button("Reset Parameters").clicked() {
                    actions.reset_params = true;
                }
            });

            ui.collapsing("Boids", |ui| {
                ui.label(format!("Boids: {}", boid_count));
                if ui.button("Clear Boids").clicked() {
                    actions.clear_boids = true;
                }
                ui.checkbox(&mut snapshot_order, "Update from frame snapshot");
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
        });

    flock.set_frame_order(if snapshot_order {
        FrameOrder::Snapshot
    } else {
        FrameOrder::InPlace
    });

    actions
}

fn parameter_sliders(ui: &mut egui::Ui, params: &mut FlockParams) {
    for (label, param) in params.iter_mut() {
        let mut value = param.value();
        let response = ui.add(egui::Slider::new(&mut value, param.range()).text(label));
        if response.changed() {
            param.set_value(value);
        }
    }
}
