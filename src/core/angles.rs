// src/core/angles.rs

use super::constants::math_constants::{DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
use super::constants::{DEFAULT_DEFICIT_DEG, DEFAULT_TORSION_DEG};
use super::error::{FitError, FitResult};
use crate::validation::{check_angle_regular, DEFAULT_SINGULARITY_TOLERANCE};
use std::fmt;

/// Selects one of the two input angles inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AngleRef {
    /// The deficit angle (10° by default).
    Deficit,
    /// The torsion angle (35° by default).
    Torsion,
}

impl AngleRef {
    /// Short lowercase label, also used when rendering expressions.
    pub fn label(&self) -> &'static str {
        match self {
            AngleRef::Deficit => "deficit",
            AngleRef::Torsion => "torsion",
        }
    }
}

impl fmt::Display for AngleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleRef::Deficit => write!(f, "δ"),
            AngleRef::Torsion => write!(f, "τ"),
        }
    }
}

/// The two scalar inputs shared by every formula.
///
/// Both angles are stored in degrees. Construction rejects any angle whose
/// sine vanishes, since the derived sine ratio and its inverse divide by
/// `sin(torsion)` and `sin(deficit)` respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleParameters {
    deficit_deg: f64,
    torsion_deg: f64,
}

impl AngleParameters {
    /// Creates a validated pair of angles given in degrees.
    ///
    /// # Errors
    /// Returns `FitError::InvalidAngle` if either angle is non-finite or a
    /// multiple of 180°.
    pub fn new(deficit_deg: f64, torsion_deg: f64) -> FitResult<Self> {
        check_input("deficit", deficit_deg)?;
        check_input("torsion", torsion_deg)?;
        Ok(Self { deficit_deg, torsion_deg })
    }

    /// Creates a validated pair of angles given in radians.
    pub fn from_radians(deficit_rad: f64, torsion_rad: f64) -> FitResult<Self> {
        Self::new(deficit_rad * DEGREES_PER_RADIAN, torsion_rad * DEGREES_PER_RADIAN)
    }

    pub fn deficit_deg(&self) -> f64 {
        self.deficit_deg
    }

    pub fn torsion_deg(&self) -> f64 {
        self.torsion_deg
    }

    /// Deficit angle in radians, reduced to [-π, π).
    pub fn deficit_rad(&self) -> f64 {
        reduce_degrees(self.deficit_deg) * RADIANS_PER_DEGREE
    }

    /// Torsion angle in radians, reduced to [-π, π).
    pub fn torsion_rad(&self) -> f64 {
        reduce_degrees(self.torsion_deg) * RADIANS_PER_DEGREE
    }

    /// Returns the selected angle in radians, reduced to [-π, π).
    pub fn radians(&self, angle: AngleRef) -> f64 {
        match angle {
            AngleRef::Deficit => self.deficit_rad(),
            AngleRef::Torsion => self.torsion_rad(),
        }
    }

    /// Returns the selected angle in degrees.
    pub fn degrees(&self, angle: AngleRef) -> f64 {
        match angle {
            AngleRef::Deficit => self.deficit_deg,
            AngleRef::Torsion => self.torsion_deg,
        }
    }
}

impl Default for AngleParameters {
    /// The fixed 10° / 35° pair.
    fn default() -> Self {
        Self {
            deficit_deg: DEFAULT_DEFICIT_DEG,
            torsion_deg: DEFAULT_TORSION_DEG,
        }
    }
}

impl fmt::Display for AngleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ = {}°, τ = {}°", self.deficit_deg, self.torsion_deg)
    }
}

/// Reduces an angle to [-180°, 180°). `rem_euclid` is exact for floats, so
/// large multiples of 180° land exactly on 0 or -180.
pub(crate) fn reduce_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    if reduced >= 180.0 { reduced - 360.0 } else { reduced }
}

fn check_input(angle: &'static str, degrees: f64) -> FitResult<()> {
    if !degrees.is_finite() {
        return Err(FitError::InvalidAngle {
            angle,
            message: format!("angle must be finite, got {}", degrees),
        });
    }
    if degrees.rem_euclid(180.0) == 0.0 {
        return Err(FitError::InvalidAngle {
            angle,
            message: format!("{}° is a multiple of 180°", degrees),
        });
    }
    check_angle_regular(reduce_degrees(degrees) * RADIANS_PER_DEGREE, Some(DEFAULT_SINGULARITY_TOLERANCE)).map_err(
        |e| FitError::InvalidAngle {
            angle,
            message: format!("{}° cannot be used: {}", degrees, e),
        },
    )
}
