//! Asteroid Field Generator
//!
//! Builds the asteroid list for the scene file. Each asteroid is placed in
//! one of two overlapping rectangles:
//!
//! ```text
//!   total region   x [-15, 20]  y [-10, 10]   (65% of draws)
//!   favored region x [-7, 12]   y [-6, 7]     (35% of draws)
//! ```
//!
//! The favored rectangle sits around the flight path so the player meets a
//! denser cluster there. Depth, mesh and size are drawn independently of the
//! rectangle choice.
//!
//! # Draw Order
//!
//! For every asteroid the random source is consumed in a fixed order:
//! coin flip, x, y, z, mesh, scale. Keeping that order stable is what makes
//! a seeded run reproduce the same document.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::record::AsteroidRecord;
use super::region::Bounds;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::foundation::math::{position_from, uniform_scale};

/// Rule for picking the scale interval of an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Favored asteroids use the favored scale, the rest use the spread scale
    #[default]
    ByPlacement,
    /// Every asteroid uses the favored scale
    AlwaysFavored,
}

/// Which rectangle an asteroid was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Drawn from the favored region
    Favored,
    /// Drawn from the total region
    Spread,
}

/// An asteroid record together with the placement branch that produced it
#[derive(Debug, Clone)]
pub struct SampledAsteroid {
    /// The record as written to the scene file
    pub record: AsteroidRecord,
    /// Placement branch taken for this record
    pub placement: Placement,
}

/// Generates asteroid records from a validated configuration
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    config: FieldConfig,
}

impl FieldGenerator {
    /// Create a generator, rejecting unusable parameters up front
    pub fn new(config: FieldConfig) -> Result<Self, FieldError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parameters this generator draws from
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Scale interval for a record placed by `placement`
    pub const fn scale_range(&self, placement: Placement) -> Bounds {
        match (self.config.size_policy, placement) {
            (SizePolicy::AlwaysFavored, _) | (SizePolicy::ByPlacement, Placement::Favored) => {
                self.config.favored_scale
            }
            (SizePolicy::ByPlacement, Placement::Spread) => self.config.spread_scale,
        }
    }

    /// Sample the `index`-th asteroid
    pub fn sample_asteroid<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> SampledAsteroid {
        let placement = if rng.gen::<f64>() < self.config.favored_probability {
            Placement::Favored
        } else {
            Placement::Spread
        };

        let region = match placement {
            Placement::Favored => &self.config.favored_region,
            Placement::Spread => &self.config.total_region,
        };
        let point = region.sample(rng);
        let z = self.config.depth.sample(rng);
        let model = catalog::choose_model(rng);
        let size = self.scale_range(placement).sample(rng);

        let record = AsteroidRecord::new(
            index,
            model,
            &position_from(&point, z),
            &uniform_scale(size),
        );

        log::debug!(
            "{} {:?} model={} position={:?} scale={:.3}",
            record.name,
            placement,
            record.model,
            record.position,
            size
        );

        SampledAsteroid { record, placement }
    }

    /// Generate the full field in order
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<AsteroidRecord> {
        let mut records = Vec::with_capacity(self.config.count);
        let mut favored = 0usize;

        for index in 0..self.config.count {
            let sampled = self.sample_asteroid(index, rng);
            if sampled.placement == Placement::Favored {
                favored += 1;
            }
            records.push(sampled.record);
        }

        log::info!(
            "Generated {} asteroids ({} in favored region, size policy {:?})",
            records.len(),
            favored,
            self.config.size_policy
        );

        records
    }
}
