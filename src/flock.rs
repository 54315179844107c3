/*
 * Flock Module
 *
 * This module owns the boid collection, the shared FlockParams and the
 * world boundary. It drives the per-frame update and teleports boids that
 * leave the boundary to the mirrored position on the opposite side.
 */

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::{Boid, DEFAULT_MIN_SEPARATION};
use crate::params::FlockParams;
use crate::vector::Vector;

// Distance a wrapped boid is pushed past the edge it re-enters from
pub const WRAP_OFFSET: f32 = 2.0;

// World rectangle with its origin at (0, 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub width: f32,
    pub height: f32,
}

impl Boundary {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Vector) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    pub fn centre(&self) -> Vector {
        Vector::new(self.width / 2.0, self.height / 2.0)
    }

    /// Mirrors an out-of-bounds point through the centre of the boundary.
    ///
    /// On an axis the point left by, the offset pushes it away from the edge
    /// it re-enters from; on the other axis the offset points inward. An
    /// overshoot too large to absorb lands `WRAP_OFFSET` inside the entry edge.
    pub fn wrap(&self, point: Vector) -> Vector {
        Vector::new(
            wrap_axis(point.x, self.width),
            wrap_axis(point.y, self.height),
        )
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let mirrored = extent - value;
    if value >= extent {
        let wrapped = mirrored + WRAP_OFFSET;
        if wrapped < 0.0 {
            WRAP_OFFSET
        } else {
            wrapped
        }
    } else if value < 0.0 {
        let wrapped = mirrored - WRAP_OFFSET;
        if wrapped >= extent {
            extent - WRAP_OFFSET
        } else {
            wrapped
        }
    } else if value < extent / 2.0 {
        mirrored - WRAP_OFFSET
    } else {
        mirrored + WRAP_OFFSET
    }
}

// How boids observe each other within a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameOrder {
    /// Boids update in collection order and later boids see positions
    /// already moved this frame.
    #[default]
    InPlace,
    /// Every boid reads a copy of the flock taken at the start of the frame.
    Snapshot,
}

pub struct Flock {
    boundary: Boundary,
    boids: Vec<Boid>,
    params: FlockParams,
    frame_order: FrameOrder,
    min_separation: f32,
    rng: StdRng,
}

impl Flock {
    pub fn new(boundary: Boundary) -> Self {
        Self::with_rng(boundary, StdRng::from_entropy())
    }

    // Reproducible spawn directions
    pub fn with_seed(boundary: Boundary, seed: u64) -> Self {
        Self::with_rng(boundary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(boundary: Boundary, rng: StdRng) -> Self {
        Self {
            boundary,
            boids: Vec::new(),
            params: FlockParams::default(),
            frame_order: FrameOrder::default(),
            min_separation: DEFAULT_MIN_SEPARATION,
            rng,
        }
    }

    pub fn with_params(mut self, params: FlockParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_frame_order(mut self, frame_order: FrameOrder) -> Self {
        self.frame_order = frame_order;
        self
    }

    // Minimum separation distance given to boids spawned from now on
    pub fn with_min_separation(mut self, distance: f32) -> Self {
        self.min_separation = distance;
        self
    }

    // Adds a boid moving in a random direction at the current speed
    pub fn spawn_boid(&mut self, position: Vector) {
        let boid = Boid::spawn(position, self.params.speed.value(), &mut self.rng)
            .with_min_separation(self.min_separation);
        debug!(
            "spawned boid #{} at ({:.1}, {:.1})",
            self.boids.len(),
            position.x,
            position.y
        );
        self.boids.push(boid);
    }

    pub fn insert_boid(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    /// Advances every boid by `delta_time` frames, in insertion order.
    pub fn update(&mut self, delta_time: f32) {
        match self.frame_order {
            FrameOrder::InPlace => self.update_in_place(delta_time),
            FrameOrder::Snapshot => self.update_from_snapshot(delta_time),
        }
    }

    fn update_in_place(&mut self, delta_time: f32) {
        for i in 0..self.boids.len() {
            let (before, rest) = self.boids.split_at_mut(i);
            if let Some((boid, after)) = rest.split_first_mut() {
                boid.update(before.iter().chain(after.iter()), &self.params, delta_time);
                Self::confine(&self.boundary, boid);
            }
        }
    }

    fn update_from_snapshot(&mut self, delta_time: f32) {
        let snapshot = self.boids.clone();
        for (i, boid) in self.boids.iter_mut().enumerate() {
            let others = snapshot[..i].iter().chain(snapshot[i + 1..].iter());
            boid.update(others, &self.params, delta_time);
            Self::confine(&self.boundary, boid);
        }
    }

    fn confine(boundary: &Boundary, boid: &mut Boid) {
        let position = boid.position();
        if boundary.contains(position) {
            return;
        }
        let wrapped = boundary.wrap(position);
        trace!(
            "wrapped boid from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            position.x,
            position.y,
            wrapped.x,
            wrapped.y
        );
        boid.set_position(wrapped);
    }

    pub fn reset_params(&mut self) {
        self.params.reset();
        info!("flock parameters reset to defaults");
    }

    pub fn clear(&mut self) {
        info!("cleared {} boids", self.boids.len());
        self.boids.clear();
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut FlockParams {
        &mut self.params
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn frame_order(&self) -> FrameOrder {
        self.frame_order
    }

    pub fn set_frame_order(&mut self, frame_order: FrameOrder) {
        self.frame_order = frame_order;
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}
