/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, params, boid, flock) has no windowing
 * dependencies beyond nannou's Vec2 conversion. The remaining modules are
 * the nannou host: window setup, input, control panel and rendering.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::Viewport;
pub use debug::DebugInfo;
pub use flock::{Boundary, Flock, FrameOrder};
pub use params::{FlockParams, Parameter};
pub use vector::Vector;

// Define modules
pub mod app;
pub mod boid;
pub mod camera;
pub mod debug;
pub mod flock;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;
pub mod vector;

// Constants
pub const BOID_SIZE: f32 = 10.0;
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 640.0;
pub const FRAMES_PER_SECOND: f32 = 60.0;
