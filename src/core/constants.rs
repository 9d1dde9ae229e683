// src/core/constants.rs

//! Mathematical constants and the fixed angle inputs.

/// Mathematical constants used by the closed-form expressions.
pub mod math_constants {
    /// Archimedes' constant π.
    pub const PI: f64 = std::f64::consts::PI;
    /// Euler's number e.
    pub const E: f64 = std::f64::consts::E;
    /// Golden ratio φ = (1 + √5) / 2.
    pub const PHI: f64 = 1.618_033_988_749_895;
    /// π/180 for degree to radian conversion.
    pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;
    /// 180/π for radian to degree conversion.
    pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;
}

/// Default deficit angle, in degrees.
pub const DEFAULT_DEFICIT_DEG: f64 = 10.0;

/// Default torsion angle, in degrees.
pub const DEFAULT_TORSION_DEG: f64 = 35.0;
