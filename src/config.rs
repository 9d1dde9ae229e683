// src/config.rs

//! JSON run configuration.
//!
//! Every field is optional; a missing field falls back to the fixed
//! 10° / 35° angles, a ±5% tolerance and the full standard catalog.
//!
//! ```json
//! {
//!   "angles": { "deficit_deg": 10.0, "torsion_deg": 35.0 },
//!   "tolerance_percent": 2.0,
//!   "formulas": ["higgs_mass", "w_boson_mass"]
//! }
//! ```

use crate::catalog::Catalog;
use crate::core::{AngleParameters, FitResult, DEFAULT_DEFICIT_DEG, DEFAULT_TORSION_DEG};
use crate::evaluation::Evaluator;
use crate::validation::DEFAULT_DEVIATION_TOLERANCE_PERCENT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub angles: AngleConfig,
    /// Allowed absolute deviation, in percent.
    #[serde(default = "default_tolerance_percent")]
    pub tolerance_percent: f64,
    /// Formula names to evaluate. `None` evaluates the whole catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formulas: Option<Vec<String>>,
}

/// The two input angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleConfig {
    #[serde(default = "default_deficit_deg")]
    pub deficit_deg: f64,
    #[serde(default = "default_torsion_deg")]
    pub torsion_deg: f64,
}

fn default_tolerance_percent() -> f64 {
    DEFAULT_DEVIATION_TOLERANCE_PERCENT
}
fn default_deficit_deg() -> f64 {
    DEFAULT_DEFICIT_DEG
}
fn default_torsion_deg() -> f64 {
    DEFAULT_TORSION_DEG
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            deficit_deg: DEFAULT_DEFICIT_DEG,
            torsion_deg: DEFAULT_TORSION_DEG,
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            angles: AngleConfig::default(),
            tolerance_percent: DEFAULT_DEVIATION_TOLERANCE_PERCENT,
            formulas: None,
        }
    }
}

impl EvaluationConfig {
    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> FitResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> FitResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validated angles.
    pub fn angle_parameters(&self) -> FitResult<AngleParameters> {
        AngleParameters::new(self.angles.deficit_deg, self.angles.torsion_deg)
    }

    /// Evaluator carrying the configured tolerance.
    pub fn evaluator(&self) -> FitResult<Evaluator> {
        Evaluator::with_tolerance(self.tolerance_percent)
    }

    /// Narrows `catalog` to the configured formula names, if any.
    pub fn select(&self, mut catalog: Catalog) -> FitResult<Catalog> {
        if let Some(names) = &self.formulas {
            catalog.retain_names(names)?;
        }
        Ok(catalog)
    }
}
