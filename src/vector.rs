/*
 * Vector Module
 *
 * This module defines the Vector value type used by the steering code.
 * Every operation returns a new Vector; nothing mutates in place.
 * Conversions to and from nannou's Vec2 are provided for the render layer.
 */

use nannou::prelude::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

// Magnitudes at or below this are treated as zero when normalizing
pub const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is within [`EPSILON`] of zero.
    pub fn normalized(self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude <= EPSILON {
            return Vector::ZERO;
        }
        self.scale(1.0 / magnitude)
    }

    // Facing angle in radians, measured from the positive x axis
    pub fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Component-wise mean of `vectors`.
    ///
    /// Callers must not pass an empty slice; in debug builds this is asserted.
    pub fn average(vectors: &[Vector]) -> Vector {
        debug_assert!(!vectors.is_empty(), "average of an empty vector list");
        let sum = vectors.iter().fold(Vector::ZERO, |acc, v| acc.add(*v));
        sum.scale(1.0 / vectors.len() as f32)
    }

    // Vector pointing from `from` to `to`
    pub fn direction(to: Vector, from: Vector) -> Vector {
        to.subtract(from)
    }

    pub fn distance(a: Vector, b: Vector) -> f32 {
        Vector::direction(a, b).magnitude()
    }

    // Uniformly distributed direction, rescaled to `magnitude`
    pub fn random<R: Rng + ?Sized>(magnitude: f32, rng: &mut R) -> Vector {
        let angle = rng.gen_range(0.0..TAU);
        Vector::new(angle.cos(), angle.sin()).scale(magnitude)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Vector::new(x, y)
    }
}
