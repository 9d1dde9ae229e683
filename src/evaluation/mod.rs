// src/evaluation/mod.rs

//! Evaluates a `catalog::Catalog` against a pair of angles and compares every
//! prediction with its observed constant.
//! This module contains the `Evaluator` entry point and the internal
//! `EvaluationEngine` that walks expression trees.

mod results;
pub(crate) mod engine;

pub use results::{Comparison, EvaluationReport};

use crate::catalog::{Catalog, Formula};
use crate::core::{AngleParameters, FitError, FitResult};
use crate::validation::{percent_deviation, DEFAULT_DEVIATION_TOLERANCE_PERCENT};
use engine::EvaluationEngine;
use tracing::{debug, info, warn};

/// Runs catalogs of formulas and collects the comparisons.
///
/// The evaluator only carries the tolerance used to flag comparisons;
/// evaluation itself is stateless and deterministic, so one evaluator can
/// be reused for any number of runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    tolerance_percent: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { tolerance_percent: DEFAULT_DEVIATION_TOLERANCE_PERCENT }
    }
}

impl Evaluator {
    /// Creates a new Evaluator with the default ±5% tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Evaluator that flags comparisons deviating by more than
    /// `tolerance_percent` (absolute, in percent).
    ///
    /// # Errors
    /// Returns `FitError::Config` for a negative or non-finite tolerance.
    pub fn with_tolerance(tolerance_percent: f64) -> FitResult<Self> {
        if !tolerance_percent.is_finite() || tolerance_percent < 0.0 {
            return Err(FitError::Config(format!(
                "tolerance must be a finite, non-negative percentage, got {}",
                tolerance_percent
            )));
        }
        Ok(Self { tolerance_percent })
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// Evaluates every formula of `catalog`, in order.
    ///
    /// # Returns
    /// * `Ok(EvaluationReport)` with one comparison per formula.
    /// * `Err(FitError)` from the first formula that cannot be evaluated
    ///   (singularity, domain error, non-finite value).
    pub fn run(&self, catalog: &Catalog, angles: &AngleParameters) -> FitResult<EvaluationReport> {
        let engine = EvaluationEngine::init(angles);
        let mut report = EvaluationReport::new(*engine.angles(), *engine.ratios(), self.tolerance_percent);

        info!(formulas = catalog.len(), %angles, "evaluating catalog");
        for formula in catalog {
            let comparison = self.compare(&engine, formula)?;
            report.record(comparison);
        }
        info!(
            within = report.count_within_tolerance(),
            total = report.len(),
            tolerance_percent = self.tolerance_percent,
            "evaluation finished"
        );
        Ok(report)
    }

    /// Evaluates a single formula outside of a catalog.
    pub fn evaluate_formula(&self, formula: &Formula, angles: &AngleParameters) -> FitResult<Comparison> {
        let engine = EvaluationEngine::init(angles);
        self.compare(&engine, formula)
    }

    fn compare(&self, engine: &EvaluationEngine, formula: &Formula) -> FitResult<Comparison> {
        let predicted = engine.evaluate(formula.expression())?;
        let observed = formula.target().value();
        let percent_error = percent_deviation(predicted, observed).ok_or_else(|| FitError::DomainError {
            message: format!("percent error undefined for {} (observed value {})", formula.name(), observed),
        })?;

        let comparison = Comparison::new(
            formula.name().to_string(),
            formula.target(),
            predicted,
            percent_error,
            self.tolerance_percent,
        );
        debug!(
            formula = formula.name(),
            predicted,
            observed,
            percent_error,
            "formula evaluated"
        );
        if !comparison.within_tolerance() {
            warn!(
                formula = formula.name(),
                percent_error,
                tolerance_percent = self.tolerance_percent,
                "prediction outside tolerance"
            );
        }
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngleRef, RatioKind};
    use crate::formulas::Term;
    use crate::observed::PhysicalConstant;

    const TEST_TOLERANCE: f64 = 1e-9;

    // --- Helper Functions ---
    fn default_engine() -> EvaluationEngine {
        EvaluationEngine::init(&AngleParameters::default())
    }

    fn assert_close(actual: f64, expected: f64, context: &str) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= TEST_TOLERANCE * scale,
            "{}: actual {} expected {}",
            context,
            actual,
            expected
        );
    }

    #[test]
    fn test_engine_leaves() -> FitResult<()> {
        let engine = default_engine();
        assert_close(engine.evaluate(&Term::Pi)?, std::f64::consts::PI, "pi");
        assert_close(engine.evaluate(&Term::Euler)?, std::f64::consts::E, "e");
        assert_close(engine.evaluate(&Term::Phi)?, (1.0 + 5f64.sqrt()) / 2.0, "φ");
        // φ² = φ + 1
        assert_close(engine.evaluate(&(Term::Phi.powi(2) - Term::Phi))?, 1.0, "φ² - φ");
        assert_close(engine.evaluate(&Term::sin(AngleRef::Deficit))?, 0.173_648_177_666_930_33, "sin δ");
        assert_close(engine.evaluate(&Term::sin(AngleRef::Torsion))?, 0.573_576_436_351_046, "sin τ");
        assert_close(engine.evaluate(&Term::ratio(RatioKind::InverseSine))?, 3.303_095_051_485_117_4, "ρ⁻¹");
        Ok(())
    }

    #[test]
    fn test_engine_tan_singularity() -> FitResult<()> {
        let engine = EvaluationEngine::init(&AngleParameters::new(90.0, 35.0)?);
        let err = engine.evaluate(&Term::tan(AngleRef::Deficit)).unwrap_err();
        assert!(matches!(err, FitError::Singularity { .. }), "got {:?}", err);
        // Other functions of the same angle stay defined.
        assert_close(engine.evaluate(&Term::sin(AngleRef::Deficit))?, 1.0, "sin 90°");
        Ok(())
    }

    #[test]
    fn test_engine_tan_singularity_at_large_angles() -> FitResult<()> {
        for torsion in [90.0 + 180.0 * 1e7, -90.0 - 180.0 * 1e5, 270.0 + 360.0 * 1e6] {
            let engine = EvaluationEngine::init(&AngleParameters::new(10.0, torsion)?);
            let err = engine.evaluate(&Term::tan(AngleRef::Torsion)).unwrap_err();
            assert!(matches!(err, FitError::Singularity { .. }), "tan at {}° gave {:?}", torsion, err);
        }
        Ok(())
    }

    #[test]
    fn test_engine_tan_of_wrapped_angle() -> FitResult<()> {
        let engine = EvaluationEngine::init(&AngleParameters::new(10.0, 35.0 + 360.0 * 1e7)?);
        assert_close(engine.evaluate(&Term::tan(AngleRef::Torsion))?, 0.700_207_538_209_709_7, "tan 35°");
        Ok(())
    }

    #[test]
    fn test_engine_division_by_zero() {
        let engine = default_engine();
        let t = Term::Pi / (Term::cos(AngleRef::Deficit) - Term::cos(AngleRef::Deficit));
        assert!(matches!(engine.evaluate(&t), Err(FitError::Singularity { .. })));
    }

    #[test]
    fn test_engine_small_denominator_is_not_singular() -> FitResult<()> {
        let engine = default_engine();
        let t = Term::constant(1e-3) / Term::constant(1e-13);
        assert_close(engine.evaluate(&t)?, 1e10, "1e-3 / 1e-13");

        // ρ^30 ≈ 2.7e-16 is tiny but the quotient is still finite.
        let t = Term::constant(1.0) / Term::ratio(RatioKind::Sine).powi(30);
        let value = engine.evaluate(&t)?;
        assert!(value.is_finite() && value > 1e15, "got {}", value);
        Ok(())
    }

    #[test]
    fn test_engine_wide_tree() -> FitResult<()> {
        let mut t = Term::Pi;
        for _ in 0..12 {
            t = t.clone() + t;
        }
        assert_eq!(t.node_count(), 2 * 4096 - 1);
        assert_close(default_engine().evaluate(&t)?, 4096.0 * std::f64::consts::PI, "4096π");
        Ok(())
    }

    #[test]
    fn test_non_finite_error_names_failing_subtree() {
        let t = Term::constant(2.0) * Term::constant(1000.0).exp();
        match default_engine().evaluate(&t) {
            Err(FitError::NonFinite { context, .. }) => assert_eq!(context, "exp(1000)"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_overflowing_quotient_is_non_finite() {
        let engine = default_engine();
        let t = Term::constant(1e300) / Term::constant(1e-300);
        assert!(matches!(engine.evaluate(&t), Err(FitError::NonFinite { .. })));
    }

    #[test]
    fn test_engine_zero_to_negative_power() {
        let engine = default_engine();
        let t = Term::constant(0.0).powi(-2);
        assert!(matches!(engine.evaluate(&t), Err(FitError::Singularity { .. })));
        let t = (Term::cos(AngleRef::Deficit) - Term::cos(AngleRef::Deficit)).pow(Term::constant(-0.5));
        assert!(matches!(engine.evaluate(&t), Err(FitError::Singularity { .. })));
    }

    #[test]
    fn test_engine_domain_errors() {
        let engine = default_engine();
        let ln_negative = (-Term::Pi).ln();
        assert!(matches!(engine.evaluate(&ln_negative), Err(FitError::DomainError { .. })));

        let negative_root = (-Term::Pi).pow(Term::constant(0.5));
        assert!(matches!(engine.evaluate(&negative_root), Err(FitError::DomainError { .. })));
    }

    #[test]
    fn test_engine_negative_base_integer_power() -> FitResult<()> {
        let engine = default_engine();
        assert_close(engine.evaluate(&Term::constant(-2.0).powi(3))?, -8.0, "(-2)^3");
        Ok(())
    }

    #[test]
    fn test_engine_overflow_is_non_finite() {
        let engine = default_engine();
        let huge = Term::constant(1000.0).exp();
        assert!(matches!(engine.evaluate(&huge), Err(FitError::NonFinite { .. })));
    }

    #[test]
    fn test_with_tolerance_validation() {
        assert!(Evaluator::with_tolerance(-1.0).is_err());
        assert!(Evaluator::with_tolerance(f64::NAN).is_err());
        assert!(Evaluator::with_tolerance(0.0).is_ok());
    }

    #[test]
    fn test_evaluate_single_formula() -> FitResult<()> {
        let formula = Formula::new(
            "vev",
            "",
            Term::constant(250.0) * Term::cos(AngleRef::Deficit),
            PhysicalConstant::HiggsVev,
        );
        let comparison = Evaluator::new().evaluate_formula(&formula, &AngleParameters::default())?;
        assert_close(comparison.predicted(), 246.201_938_253_052, "vev");
        assert_close(comparison.percent_error(), -0.007_335_613_251_566_438, "vev error");
        assert!(comparison.within_tolerance());
        Ok(())
    }

    #[test]
    fn test_empty_catalog() -> FitResult<()> {
        let report = Evaluator::new().run(&Catalog::new(), &AngleParameters::default())?;
        assert!(report.is_empty());
        assert_eq!(report.best(), None);
        assert_eq!(report.mean_absolute_percent_error(), None);
        assert!(report.all_within_tolerance());
        Ok(())
    }
}
