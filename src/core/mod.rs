// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod angles;
pub mod ratios;
pub mod constants;

// Re-export public types for convenient access via `anglefit::core::TypeName`
pub use error::{FitError, FitResult};
pub use angles::{AngleParameters, AngleRef};
pub use ratios::{DerivedRatios, RatioKind};
pub use constants::math_constants::{E, PHI, PI};
pub use constants::{DEFAULT_DEFICIT_DEG, DEFAULT_TORSION_DEG};
