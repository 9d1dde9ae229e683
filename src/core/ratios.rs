// src/core/ratios.rs

use super::angles::AngleParameters;
use std::fmt;

/// Selects one of the derived sine ratios inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKind {
    /// `sin(δ) / sin(τ)`
    Sine,
    /// `(sin(δ) / sin(τ))²`
    SineSquared,
    /// `sin(τ) / sin(δ)`
    InverseSine,
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioKind::Sine => write!(f, "ρ"),
            RatioKind::SineSquared => write!(f, "ρ²"),
            RatioKind::InverseSine => write!(f, "ρ⁻¹"),
        }
    }
}

/// Scalar ratios derived once per run from the two input angles.
///
/// `AngleParameters` guarantees neither sine is zero, so all three values
/// are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    sine_ratio: f64,
    sine_ratio_squared: f64,
    inverse_sine_ratio: f64,
}

impl DerivedRatios {
    /// Computes the ratios for the given angles.
    pub fn from_angles(angles: &AngleParameters) -> Self {
        let sin_deficit = angles.deficit_rad().sin();
        let sin_torsion = angles.torsion_rad().sin();
        let sine_ratio = sin_deficit / sin_torsion;
        Self {
            sine_ratio,
            sine_ratio_squared: sine_ratio * sine_ratio,
            inverse_sine_ratio: sin_torsion / sin_deficit,
        }
    }

    pub fn sine_ratio(&self) -> f64 {
        self.sine_ratio
    }

    pub fn sine_ratio_squared(&self) -> f64 {
        self.sine_ratio_squared
    }

    pub fn inverse_sine_ratio(&self) -> f64 {
        self.inverse_sine_ratio
    }

    /// Returns the selected ratio.
    pub fn get(&self, kind: RatioKind) -> f64 {
        match kind {
            RatioKind::Sine => self.sine_ratio,
            RatioKind::SineSquared => self.sine_ratio_squared,
            RatioKind::InverseSine => self.inverse_sine_ratio,
        }
    }
}

impl fmt::Display for DerivedRatios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ρ = {:.10}, ρ² = {:.10}, ρ⁻¹ = {:.10}",
            self.sine_ratio, self.sine_ratio_squared, self.inverse_sine_ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_default_ratios() {
        let ratios = DerivedRatios::from_angles(&AngleParameters::default());
        assert!((ratios.sine_ratio() - 0.302_746_358_918_852_8).abs() < TEST_TOLERANCE);
        assert!((ratios.sine_ratio_squared() - 0.091_655_357_838_622_86).abs() < TEST_TOLERANCE);
        assert!((ratios.inverse_sine_ratio() - 3.303_095_051_485_117_4).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_get_matches_accessors() {
        let ratios = DerivedRatios::from_angles(&AngleParameters::default());
        assert_eq!(ratios.get(RatioKind::Sine), ratios.sine_ratio());
        assert_eq!(ratios.get(RatioKind::SineSquared), ratios.sine_ratio_squared());
        assert_eq!(ratios.get(RatioKind::InverseSine), ratios.inverse_sine_ratio());
    }
}
