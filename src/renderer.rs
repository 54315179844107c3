/*
 * Renderer Module
 *
 * This module draws the simulation: the world rectangle, each boid as a
 * triangle facing its heading together with its view-radius circle, and the
 * spawn prompt while the flock is empty.
 */

use log::warn;
use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::camera::Viewport;
use crate::BOID_SIZE;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(WHITE);

    // World background
    let world_rect = model.viewport.world_rect();
    draw.rect()
        .xy(world_rect.xy())
        .wh(world_rect.wh())
        .color(rgb8(0x5D, 0xAD, 0xE2));

    let view_radius = model.flock.params().view_radius.value();
    for boid in model.flock.boids() {
        draw_boid(&draw, &model.viewport, boid, view_radius);
    }

    if model.flock.is_empty() {
        let centre = model.viewport.world_to_screen(model.flock.boundary().centre());
        draw.text("Click to spawn boids")
            .xy(centre)
            .color(WHITE)
            .font_size(20);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!("failed to draw frame: {:?}", err);
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!("failed to draw controls: {:?}", err);
    }
}

fn draw_boid(draw: &Draw, viewport: &Viewport, boid: &Boid, view_radius: f32) {
    let screen_pos = viewport.world_to_screen(boid.position());
    let angle = viewport.world_to_screen_angle(boid.heading());

    // View field behind the body
    draw.ellipse()
        .xy(screen_pos)
        .radius(view_radius)
        .no_fill()
        .stroke(rgb8(0x85, 0xC1, 0xE9))
        .stroke_weight(1.0);

    let points = [
        pt2(BOID_SIZE, 0.0),
        pt2(-BOID_SIZE, BOID_SIZE * 0.8),
        pt2(-BOID_SIZE, -BOID_SIZE * 0.8),
    ];
    draw.polygon()
        .color(WHITE)
        .points(points)
        .xy(screen_pos)
        .rotate(angle);
}
