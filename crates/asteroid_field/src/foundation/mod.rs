//! Foundation utilities shared by the generator

pub mod logging;
pub mod math;
