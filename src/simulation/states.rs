//! Core state types for the circle simulation.
//!
//! - `Body`      a single circle with Verlet state (current + previous position)
//! - `BodyStore` the index-stable arena owning every body
//!
//! Bodies are addressed by [`BodyIndex`]. Indices are handed out in insertion
//! order and never reused, so they stay valid across growth of the store.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Stable handle to a body in a [`BodyStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyIndex(pub usize);

impl BodyIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Render tag carried by a body, no physical meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyColor(pub [u8; 3]);

impl Default for BodyColor {
    fn default() -> Self {
        BodyColor([0, 176, 255])
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub radius: f64, // radius, fixed after creation
    pub x: NVec2, // current position
    pub x_prev: NVec2, // position one sub-step ago
    pub a: NVec2, // constant acceleration (gravity)
    pub color: BodyColor, // render tag
}

impl Body {
    /// Body at `x` moving with velocity `v`.
    /// `x_prev` is back-projected by `dt` so the first Verlet step carries `v`
    pub fn new(radius: f64, x: NVec2, v: NVec2, a: NVec2, dt: f64) -> Self {
        Self {
            radius,
            x,
            x_prev: x - v * dt,
            a,
            color: BodyColor::default(),
        }
    }

    /// Motionless body with no acceleration
    pub fn at_rest(radius: f64, x: NVec2) -> Self {
        Self::new(radius, x, NVec2::zeros(), NVec2::zeros(), 0.0)
    }

    /// Implicit velocity over the last step of length `dt`
    pub fn velocity(&self, dt: f64) -> NVec2 {
        (self.x - self.x_prev) / dt
    }

    pub fn speed(&self, dt: f64) -> f64 {
        self.velocity(dt).norm()
    }
}

/// Arena of bodies plus the accumulated simulation time
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>, // insertion-ordered, never shrinks
    pub t: f64, // simulated time
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `additional` more bodies
    pub fn reserve(&mut self, additional: usize) {
        self.bodies.reserve(additional);
    }

    pub fn push(&mut self, body: Body) -> BodyIndex {
        self.bodies.push(body);
        BodyIndex(self.bodies.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bodies.capacity()
    }

    pub fn get(&self, index: BodyIndex) -> Option<&Body> {
        self.bodies.get(index.0)
    }

    pub fn set_color(&mut self, index: BodyIndex, color: BodyColor) -> bool {
        match self.bodies.get_mut(index.0) {
            Some(body) => {
                body.color = color;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    // Only the stepper mutates positions, keeping x and x_prev consistent
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyIndex, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyIndex(i), b))
    }
}
