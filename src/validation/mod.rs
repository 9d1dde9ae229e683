// src/validation/mod.rs

//! Provides checks on angle inputs, intermediate values and finished comparisons.

use crate::core::{FitError, FitResult};
use crate::evaluation::{Comparison, EvaluationReport};
use num_traits::{Float, NumCast};

/// Magnitude below which a sine or cosine is treated as zero.
pub const DEFAULT_SINGULARITY_TOLERANCE: f64 = 1e-12;
/// Default allowed absolute deviation of a prediction, in percent.
pub const DEFAULT_DEVIATION_TOLERANCE_PERCENT: f64 = 5.0;

/// Checks that an angle (radians) is not a multiple of π, i.e. that its sine
/// can safely be used as a denominator.
///
/// # Returns
/// * `Ok(())` if `|sin(angle)|` exceeds the tolerance.
/// * `Err(FitError::Singularity)` otherwise.
pub fn check_angle_regular(angle_rad: f64, tolerance: Option<f64>) -> FitResult<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_SINGULARITY_TOLERANCE);
    let sine = angle_rad.sin();
    if sine.abs() <= effective_tolerance {
        Err(FitError::Singularity {
            message: format!("sin({:.6} rad) = {:e} is within {:e} of zero", angle_rad, sine, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Rejects NaN and infinities, tagging the error with `context`.
pub fn check_finite(value: f64, context: &str) -> FitResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FitError::NonFinite { context: context.to_string(), value })
    }
}

/// Signed deviation `100 · (predicted - observed) / observed`.
/// Returns `None` when `observed` is zero or either input is not finite.
pub fn percent_deviation<T: Float>(predicted: T, observed: T) -> Option<T> {
    if observed.is_zero() || !observed.is_finite() || !predicted.is_finite() {
        return None;
    }
    let hundred = <T as NumCast>::from(100.0)?;
    Some(hundred * (predicted - observed) / observed)
}

/// Checks a single comparison against an absolute percentage limit.
pub fn check_within_tolerance(comparison: &Comparison, tolerance_percent: Option<f64>) -> FitResult<()> {
    let limit = tolerance_percent.unwrap_or(DEFAULT_DEVIATION_TOLERANCE_PERCENT);
    if comparison.percent_error().abs() <= limit {
        Ok(())
    } else {
        Err(FitError::ToleranceExceeded {
            formula: comparison.formula().to_string(),
            percent_error: comparison.percent_error(),
            tolerance_percent: limit,
        })
    }
}

/// Checks every comparison of a report. Fails on the first one out of range,
/// in report order.
pub fn validate_report(report: &EvaluationReport, tolerance_percent: Option<f64>) -> FitResult<()> {
    for comparison in report.comparisons() {
        check_within_tolerance(comparison, tolerance_percent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_regularity() {
        assert!(check_angle_regular(0.1, None).is_ok());
        assert!(check_angle_regular(PI / 2.0, None).is_ok());
        assert!(check_angle_regular(0.0, None).is_err());
        assert!(check_angle_regular(PI, None).is_err());
        assert!(check_angle_regular(-3.0 * PI, None).is_err());
        // Looser tolerance catches near-singular angles too.
        assert!(check_angle_regular(PI + 1e-6, Some(1e-3)).is_err());
    }

    #[test]
    fn test_percent_deviation() {
        assert_eq!(percent_deviation(110.0_f64, 100.0), Some(10.0));
        assert_eq!(percent_deviation(90.0_f32, 100.0), Some(-10.0));
        assert_eq!(percent_deviation(1.0_f64, 0.0), None);
        assert_eq!(percent_deviation(f64::NAN, 1.0), None);
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        use crate::observed::PhysicalConstant;

        let at_limit = Comparison::new("edge".to_string(), PhysicalConstant::HiggsVev, 0.0, 5.0, 5.0);
        assert!(at_limit.within_tolerance());
        assert!(check_within_tolerance(&at_limit, Some(5.0)).is_ok());
        assert!(check_within_tolerance(&at_limit, None).is_ok());

        let below = Comparison::new("edge".to_string(), PhysicalConstant::HiggsVev, 0.0, -5.0, 5.0);
        assert!(check_within_tolerance(&below, Some(5.0)).is_ok());

        let over = Comparison::new("edge".to_string(), PhysicalConstant::HiggsVev, 0.0, 5.000_001, 5.0);
        assert!(!over.within_tolerance());
        assert!(matches!(
            check_within_tolerance(&over, Some(5.0)),
            Err(FitError::ToleranceExceeded { tolerance_percent, .. }) if tolerance_percent == 5.0
        ));

        let exact = Comparison::new("edge".to_string(), PhysicalConstant::HiggsVev, 0.0, 0.0, 0.0);
        assert!(check_within_tolerance(&exact, Some(0.0)).is_ok());
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(2.5, "x").ok(), Some(2.5));
        assert!(matches!(check_finite(f64::INFINITY, "x"), Err(FitError::NonFinite { .. })));
    }
}
