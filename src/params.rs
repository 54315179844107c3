/*
 * Simulation Parameters Module
 *
 * This module defines the bounded, resettable Parameter type and the
 * FlockParams handle that groups the five live-tunable values shared by
 * every boid in a flock. The UI writes through the clamped setters; boids
 * read the current values every frame, so an edit is observed on the next read.
 */

// A bounded scalar control value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameter {
    default: f32,
    min: f32,
    max: f32,
    current: f32,
}

impl Parameter {
    /// Creates a parameter whose current value starts at `default`.
    ///
    /// `default` is expected to lie within `[min, max]`.
    pub fn new(default: f32, min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "parameter range is inverted");
        Self {
            default,
            min,
            max,
            current: default,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn min_val(&self) -> f32 {
        self.min
    }

    pub fn max_val(&self) -> f32 {
        self.max
    }

    pub fn default_val(&self) -> f32 {
        self.default
    }

    // Out-of-range writes saturate silently; NaN writes are ignored
    pub fn set_value(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.current = value.clamp(self.min, self.max);
    }

    pub fn reset(&mut self) {
        self.current = self.default;
    }

    // Inclusive range for UI sliders
    pub fn range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

// Parameters shared by every boid in a flock
#[derive(Clone, Debug, PartialEq)]
pub struct FlockParams {
    pub speed: Parameter,
    pub view_radius: Parameter,
    pub separation_factor: Parameter,
    pub alignment_factor: Parameter,
    pub cohesion_factor: Parameter,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            speed: Parameter::new(4.0, 2.0, 8.0),
            view_radius: Parameter::new(120.0, 80.0, 160.0),
            separation_factor: Parameter::new(0.05, 0.0, 0.05),
            alignment_factor: Parameter::new(0.05, 0.0, 0.05),
            cohesion_factor: Parameter::new(0.0025, 0.0, 0.005),
        }
    }
}

impl FlockParams {
    pub fn new(
        speed: Parameter,
        view_radius: Parameter,
        separation_factor: Parameter,
        alignment_factor: Parameter,
        cohesion_factor: Parameter,
    ) -> Self {
        Self {
            speed,
            view_radius,
            separation_factor,
            alignment_factor,
            cohesion_factor,
        }
    }

    pub fn reset(&mut self) {
        for (_, param) in self.iter_mut() {
            param.reset();
        }
    }

    // Labelled parameters in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Parameter)> {
        [
            ("speed", &self.speed),
            ("view-radius", &self.view_radius),
            ("separation", &self.separation_factor),
            ("alignment", &self.alignment_factor),
            ("cohesion", &self.cohesion_factor),
        ]
        .into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut Parameter)> {
        [
            ("speed", &mut self.speed),
            ("view-radius", &mut self.view_radius),
            ("separation", &mut self.separation_factor),
            ("alignment", &mut self.alignment_factor),
            ("cohesion", &mut self.cohesion_factor),
        ]
        .into_iter()
    }
}
