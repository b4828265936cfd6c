//! Plate geometry: agent positions and the bounded domain they are seeded in.
//!
//! Coordinates are abstract plate units.  The default domain matches the
//! 800 × 400 display viewport with a 10-unit margin, but the
//! engine never assumes pixels; renderers map plate units to whatever they
//! draw on.

use crate::RandomSource;

/// A position on the plate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return `self` shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle used to seed the initial population.
///
/// Offspring are jittered around their parent and may land outside the
/// domain; the domain only bounds *initial* placement.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Domain {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// `true` if `p` lies inside the domain (bounds inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Draw a uniformly distributed point.  Consumes two draws, x first.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Point {
        let x = rng.uniform(self.min_x, self.max_x);
        let y = rng.uniform(self.min_y, self.max_y);
        Point { x, y }
    }
}

impl Default for Domain {
    /// x ∈ [10, 790], y ∈ [10, 390].
    fn default() -> Self {
        Domain::new(10.0, 790.0, 10.0, 390.0)
    }
}
