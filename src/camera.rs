/*
 * Camera Module
 *
 * This module defines the Viewport that maps the flock's world space
 * (origin at the top-left corner, y pointing down) onto nannou's window
 * space (origin at the window centre, y pointing up), and back again.
 */

use nannou::prelude::*;

use crate::flock::Boundary;
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            world_width: boundary.width,
            world_height: boundary.height,
        }
    }

    // Convert a point from world space to window space
    pub fn world_to_screen(&self, point: Vector) -> Vec2 {
        vec2(
            point.x - self.world_width / 2.0,
            self.world_height / 2.0 - point.y,
        )
    }

    // Convert a point from window space to world space
    pub fn screen_to_world(&self, point: Vec2) -> Vector {
        Vector::new(
            point.x + self.world_width / 2.0,
            self.world_height / 2.0 - point.y,
        )
    }

    // World headings turn the other way once y is flipped
    pub fn world_to_screen_angle(&self, heading: f32) -> f32 {
        -heading
    }

    // The world rectangle in window space
    pub fn world_rect(&self) -> Rect {
        Rect::from_w_h(self.world_width, self.world_height)
    }

    pub fn contains_screen_point(&self, point: Vec2) -> bool {
        let world = self.screen_to_world(point);
        world.x >= 0.0 && world.x < self.world_width && world.y >= 0.0 && world.y < self.world_height
    }
}
