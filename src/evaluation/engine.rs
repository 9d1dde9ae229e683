// src/evaluation/engine.rs
use crate::core::{AngleParameters, DerivedRatios, FitError, FitResult, E, PHI, PI};
use crate::formulas::Term;
use crate::validation::{check_finite, DEFAULT_SINGULARITY_TOLERANCE};
use tracing::trace;

/// Evaluates expression trees against one fixed pair of angles.
/// The derived ratios are computed once at construction and shared by
/// every expression. (Internal visibility)
#[derive(Debug, Clone)]
pub(crate) struct EvaluationEngine {
    angles: AngleParameters,
    ratios: DerivedRatios,
}

impl EvaluationEngine {
    /// Initializes the engine. `AngleParameters` has already rejected
    /// singular angles, so this cannot fail on its own.
    pub(crate) fn init(angles: &AngleParameters) -> Self {
        let ratios = DerivedRatios::from_angles(angles);
        trace!(%angles, %ratios, "evaluation engine initialized");
        Self { angles: *angles, ratios }
    }

    pub(crate) fn angles(&self) -> &AngleParameters {
        &self.angles
    }

    pub(crate) fn ratios(&self) -> &DerivedRatios {
        &self.ratios
    }

    /// Evaluates `term` to a finite scalar.
    ///
    /// # Errors
    /// * `FitError::Singularity` for a zero denominator, zero raised to a negative
    ///   power, or `tan` at an odd multiple of 90°.
    /// * `FitError::DomainError` for `ln` of a non-positive value or a negative base
    ///   raised to a non-integer power.
    /// * `FitError::NonFinite` if any intermediate value overflows.
    pub(crate) fn evaluate(&self, term: &Term) -> FitResult<f64> {
        let value = match term {
            Term::Constant(v) => *v,
            Term::Pi => PI,
            Term::Euler => E,
            Term::Phi => PHI,
            Term::Ratio(kind) => self.ratios.get(*kind),
            Term::Sin(a) => self.angles.radians(*a).sin(),
            Term::Cos(a) => self.angles.radians(*a).cos(),
            Term::Tan(a) => {
                let degrees = self.angles.degrees(*a);
                let theta = self.angles.radians(*a);
                let cosine = theta.cos();
                if (degrees - 90.0).rem_euclid(180.0) == 0.0 || cosine.abs() <= DEFAULT_SINGULARITY_TOLERANCE {
                    return Err(FitError::Singularity {
                        message: format!("tan({}) is undefined at {}°", a, degrees),
                    });
                }
                theta.sin() / cosine
            }
            Term::Add(l, r) => self.evaluate(l)? + self.evaluate(r)?,
            Term::Sub(l, r) => self.evaluate(l)? - self.evaluate(r)?,
            Term::Mul(l, r) => self.evaluate(l)? * self.evaluate(r)?,
            Term::Div(l, r) => {
                let numerator = self.evaluate(l)?;
                let denominator = self.evaluate(r)?;
                if denominator == 0.0 {
                    return Err(FitError::Singularity {
                        message: format!("division by zero: denominator {} evaluated to 0", r),
                    });
                }
                numerator / denominator
            }
            Term::Pow(base, exponent) => {
                let b = self.evaluate(base)?;
                let x = self.evaluate(exponent)?;
                if b == 0.0 && x < 0.0 {
                    return Err(FitError::Singularity {
                        message: format!("zero base {} raised to negative power {}", base, x),
                    });
                }
                if b < 0.0 && x.fract() != 0.0 {
                    return Err(FitError::DomainError {
                        message: format!("negative base {} raised to non-integer power {}", b, x),
                    });
                }
                b.powf(x)
            }
            Term::Neg(t) => -self.evaluate(t)?,
            Term::Exp(t) => self.evaluate(t)?.exp(),
            Term::Ln(t) => {
                let v = self.evaluate(t)?;
                if v <= 0.0 {
                    return Err(FitError::DomainError {
                        message: format!("ln({}) is undefined for {}", t, v),
                    });
                }
                v.ln()
            }
        };
        if value.is_finite() {
            return Ok(value);
        }
        check_finite(value, &term.to_string())
    }
}
