//! Asteroid field generation
//!
//! Records are built one at a time from an injected random source and kept
//! in generation order.

pub mod catalog;
pub mod generator;
pub mod material;
pub mod record;
pub mod region;

pub use generator::{FieldGenerator, Placement, SampledAsteroid, SizePolicy};
pub use material::MaterialDescriptor;
pub use record::{AsteroidRecord, ObjectKind};
pub use region::{Bounds, Region};
