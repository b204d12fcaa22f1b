//! Sampling intervals and placement rectangles

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::foundation::math::Point2d;

/// Closed interval on one axis
///
/// Always stored with `min <= max`. Declaring the ends in either order
/// describes the same interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    min: f64,
    max: f64,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl Bounds {
    /// Create an interval from two ends given in any order
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Lower end
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper end
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether both ends are finite numbers
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Distance between the ends
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether uniform draws over the interval are well defined
    ///
    /// Both ends and the width must be finite; `[-1e308, 1e308]` has finite
    /// ends but overflows the sampler.
    pub fn is_sampleable(&self) -> bool {
        self.is_finite() && self.width().is_finite()
    }

    /// Whether `value` lies inside the interval, ends included
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draw a uniform value from the interval
    ///
    /// A zero-width interval always yields its single value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

/// Axis-aligned rectangle in the x/y placement plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Horizontal extent
    pub x: Bounds,
    /// Vertical extent
    pub y: Bounds,
}

impl Region {
    /// Create a region from its horizontal and vertical extents
    pub const fn new(x: Bounds, y: Bounds) -> Self {
        Self { x, y }
    }

    /// Draw a uniform point inside the region, x first then y
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2d {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        Point2d::new(x, y)
    }

    /// Whether the point lies inside the region, edges included
    pub fn contains(&self, point: &Point2d) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Whether both extents can be sampled from
    pub fn is_sampleable(&self) -> bool {
        self.x.is_sampleable() && self.y.is_sampleable()
    }
}
