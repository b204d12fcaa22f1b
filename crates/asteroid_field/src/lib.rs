//! # Asteroid Field
//!
//! Procedural generator for the asteroid field scene file.
//!
//! ## Features
//!
//! - **Weighted Placement**: Asteroids cluster in a favored region around the flight path
//! - **Deterministic Runs**: The random source is always passed in, so a seed reproduces a field
//! - **Scene Output**: Records serialize straight into the scene loader's `mesh` object format
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asteroid_field::prelude::*;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), FieldError> {
//!     let config = FieldConfig::default();
//!     let generator = FieldGenerator::new(config.clone())?;
//!     let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!     let records = generator.generate(&mut rng);
//!     output::write_field(&config.output_path, &records)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod field;
pub mod foundation;
pub mod output;

pub use error::FieldError;

/// Common imports for generator users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, FieldConfig},
        error::FieldError,
        field::{
            AsteroidRecord, Bounds, FieldGenerator, MaterialDescriptor, Placement, Region,
            SampledAsteroid, SizePolicy,
        },
        output,
    };
}
