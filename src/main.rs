/*
 * Boid Flocking Simulation
 *
 * Click inside the window to spawn boids. Each boid steers by separation,
 * alignment and cohesion against the boids inside its view radius; the
 * control panel tunes the shared parameters live.
 *
 * Set RUST_LOG (for example RUST_LOG=flock_sim=debug) to see simulation logs.
 */

use flock_sim::app::{model, update};

fn main() {
    env_logger::init();

    nannou::app(model)
        .update(update)
        .run();
}
