// src/evaluation/results.rs
use crate::core::{AngleParameters, DerivedRatios};
use crate::observed::{PhysicalConstant, Unit};
use std::fmt;

/// The outcome of evaluating one formula: its prediction next to the
/// observed value it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    formula: String,
    target: PhysicalConstant,
    predicted: f64,
    observed: f64,
    percent_error: f64,
    within_tolerance: bool,
}

impl Comparison {
    pub(crate) fn new(
        formula: String,
        target: PhysicalConstant,
        predicted: f64,
        percent_error: f64,
        tolerance_percent: f64,
    ) -> Self {
        Self {
            formula,
            target,
            predicted,
            observed: target.value(),
            percent_error,
            within_tolerance: percent_error.abs() <= tolerance_percent,
        }
    }

    /// Name of the formula that produced the prediction.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn target(&self) -> PhysicalConstant {
        self.target
    }

    pub fn predicted(&self) -> f64 {
        self.predicted
    }

    pub fn observed(&self) -> f64 {
        self.observed
    }

    /// Signed deviation `100 · (predicted - observed) / observed`.
    pub fn percent_error(&self) -> f64 {
        self.percent_error
    }

    pub fn within_tolerance(&self) -> bool {
        self.within_tolerance
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: predicted {} = {:.6e}, observed {:.6e} ({:+.4}%)",
            self.formula,
            self.target.symbol(),
            self.predicted,
            self.observed,
            self.percent_error
        )
    }
}

/// Holds every comparison of one evaluation run, in catalog order,
/// together with the inputs they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    angles: AngleParameters,
    ratios: DerivedRatios,
    tolerance_percent: f64,
    comparisons: Vec<Comparison>,
}

impl EvaluationReport {
    /// Creates a new, empty report. (Internal visibility)
    pub(crate) fn new(angles: AngleParameters, ratios: DerivedRatios, tolerance_percent: f64) -> Self {
        Self {
            angles,
            ratios,
            tolerance_percent,
            comparisons: Vec::new(),
        }
    }

    /// Records a comparison. (Internal visibility)
    pub(crate) fn record(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn angles(&self) -> &AngleParameters {
        &self.angles
    }

    pub fn ratios(&self) -> &DerivedRatios {
        &self.ratios
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// All comparisons, in the order the formulas were evaluated.
    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    /// Gets the comparison for a named formula.
    /// Returns `None` if the formula was not part of the run.
    pub fn get(&self, formula: &str) -> Option<&Comparison> {
        self.comparisons.iter().find(|c| c.formula() == formula)
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    /// The comparison with the smallest absolute deviation.
    /// Ties keep the earliest formula.
    pub fn best(&self) -> Option<&Comparison> {
        self.comparisons.iter().reduce(|best, c| {
            if c.percent_error().abs() < best.percent_error().abs() { c } else { best }
        })
    }

    /// The comparison with the largest absolute deviation.
    /// Ties keep the earliest formula.
    pub fn worst(&self) -> Option<&Comparison> {
        self.comparisons.iter().reduce(|worst, c| {
            if c.percent_error().abs() > worst.percent_error().abs() { c } else { worst }
        })
    }

    /// Mean of `|percent_error|` over all comparisons, `None` for an empty report.
    pub fn mean_absolute_percent_error(&self) -> Option<f64> {
        if self.comparisons.is_empty() {
            return None;
        }
        let total: f64 = self.comparisons.iter().map(|c| c.percent_error().abs()).sum();
        Some(total / self.comparisons.len() as f64)
    }

    pub fn count_within_tolerance(&self) -> usize {
        self.comparisons.iter().filter(|c| c.within_tolerance()).count()
    }

    pub fn all_within_tolerance(&self) -> bool {
        self.comparisons.iter().all(|c| c.within_tolerance())
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation Report:")?;
        writeln!(f, "  Angles: {}", self.angles)?;
        writeln!(f, "  Ratios: {}", self.ratios)?;
        if self.comparisons.is_empty() {
            writeln!(f, "  No formulas were evaluated.")?;
            return Ok(());
        }

        let name_width = self.comparisons.iter().map(|c| c.formula().len()).max().unwrap_or(0).max("formula".len());
        writeln!(
            f,
            "  {:<nw$}  {:>16}  {:>16}  {:<4}  {:>10}",
            "formula",
            "predicted",
            "observed",
            "unit",
            "error %",
            nw = name_width
        )?;
        for c in &self.comparisons {
            let unit = match c.target().unit() {
                Unit::Dimensionless => String::from("-"),
                unit => unit.to_string(),
            };
            writeln!(
                f,
                "  {:<nw$}  {:>16.8e}  {:>16.8e}  {:<4}  {:>+10.4}  {}",
                c.formula(),
                c.predicted(),
                c.observed(),
                unit,
                c.percent_error(),
                if c.within_tolerance() { "ok" } else { "OUT" },
                nw = name_width
            )?;
        }
        writeln!(
            f,
            "  {}/{} within ±{}%",
            self.count_within_tolerance(),
            self.comparisons.len(),
            self.tolerance_percent
        )?;
        if let Some(mape) = self.mean_absolute_percent_error() {
            writeln!(f, "  Mean |error|: {:.4}%", mape)?;
        }
        Ok(())
    }
}
