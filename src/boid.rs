/*
 * Boid Module
 *
 * This module defines the Boid struct and its steering behavior.
 * Each frame a boid looks at every other boid inside its view radius and
 * blends three rules into its velocity:
 * 1. Separation: Move away from neighbors that are too close
 * 2. Alignment: Match the average velocity of the neighborhood
 * 3. Cohesion: Head toward the centre of mass of the neighbors
 * The velocity is then snapped back to the shared speed and integrated.
 */

use rand::Rng;

use crate::params::FlockParams;
use crate::vector::Vector;

// Neighbors closer than this push the boid away
pub const DEFAULT_MIN_SEPARATION: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    position: Vector,
    velocity: Vector,
    heading: f32,
    min_separation: f32,
}

impl Boid {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            heading: velocity.heading(),
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    // Boid at `position` moving in a random direction at `speed`
    pub fn spawn<R: Rng + ?Sized>(position: Vector, speed: f32, rng: &mut R) -> Self {
        Self::new(position, Vector::random(speed, rng))
    }

    pub fn with_min_separation(mut self, distance: f32) -> Self {
        self.min_separation = distance;
        self
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    // Facing angle in radians, derived from the last velocity
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Advances the boid by one frame.
    ///
    /// `others` must yield every boid in the flock except this one. The
    /// blend runs separation, then alignment, then cohesion, each step
    /// reading the velocity left by the previous one.
    pub fn update<'a, I>(&mut self, others: I, params: &FlockParams, delta_time: f32)
    where
        I: IntoIterator<Item = &'a Boid>,
    {
        let neighbors = self.neighbors(others, params.view_radius.value());

        let previous = self.velocity;
        let mut velocity = previous;

        if let Some(desired) = self.separation(&neighbors) {
            velocity = blend(velocity, desired, params.separation_factor.value());
        }
        if let Some(desired) = self.alignment(&neighbors, velocity) {
            velocity = blend(velocity, desired, params.alignment_factor.value());
        }
        if let Some(desired) = self.cohesion(&neighbors) {
            velocity = blend(velocity, desired, params.cohesion_factor.value());
        }

        // A blend that cancels out keeps the previous direction, and a boid
        // with no velocity at all moves along its stored heading
        let mut direction = velocity.normalized();
        if direction == Vector::ZERO {
            direction = previous.normalized();
        }
        if direction == Vector::ZERO {
            direction = Vector::new(self.heading.cos(), self.heading.sin());
        }
        self.velocity = direction.scale(params.speed.value());

        self.integrate(delta_time);
    }

    // Every other boid within the view circle (boundary inclusive)
    fn neighbors<'a, I>(&self, others: I, view_radius: f32) -> Vec<&'a Boid>
    where
        I: IntoIterator<Item = &'a Boid>,
    {
        others
            .into_iter()
            .filter(|other| Vector::distance(other.position, self.position) <= view_radius)
            .collect()
    }

    // Average of the away-directions from neighbors inside the minimum
    // separation distance, each weighted by the inverse of its distance
    fn separation(&self, neighbors: &[&Boid]) -> Option<Vector> {
        let pushes: Vec<Vector> = neighbors
            .iter()
            .filter_map(|other| {
                let distance = Vector::distance(other.position, self.position);
                if distance > self.min_separation {
                    return None;
                }
                if distance <= 0.0 {
                    // Coincident neighbor has no direction to push along
                    return Some(Vector::ZERO);
                }
                let away = Vector::direction(self.position, other.position);
                Some(away.normalized().scale(1.0 / distance))
            })
            .collect();

        if pushes.is_empty() {
            return None;
        }
        Some(Vector::average(&pushes))
    }

    // Average velocity of the neighbors and this boid, where this boid's
    // term is the velocity already blended by separation
    fn alignment(&self, neighbors: &[&Boid], current: Vector) -> Option<Vector> {
        if neighbors.is_empty() {
            return None;
        }
        let velocities: Vec<Vector> = neighbors
            .iter()
            .map(|other| other.velocity)
            .chain(std::iter::once(current))
            .collect();
        Some(Vector::average(&velocities))
    }

    // Offset toward the neighbors' centre of mass, unless already close to it
    fn cohesion(&self, neighbors: &[&Boid]) -> Option<Vector> {
        if neighbors.is_empty() {
            return None;
        }
        let positions: Vec<Vector> = neighbors.iter().map(|other| other.position).collect();
        let centre = Vector::average(&positions);
        if Vector::distance(centre, self.position) <= self.min_separation {
            return None;
        }
        Some(Vector::direction(centre, self.position))
    }

    fn integrate(&mut self, delta_time: f32) {
        self.position = self.position + self.velocity * delta_time;
        self.heading = self.velocity.heading();
    }
}

// Linear interpolation of `current` toward `desired`
fn blend(current: Vector, desired: Vector, factor: f32) -> Vector {
    current + (desired - current) * factor
}
