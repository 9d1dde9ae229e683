//! Error handling logic

use thiserror::Error;

/// Error types raised while building or evaluating angle formulas.
/// Most of them mark an expression reaching a point where the closed form
/// stops being defined (a vanishing sine, a logarithm of a negative value).
#[derive(Error, Debug)]
pub enum FitError {
    /// A denominator or tangent argument hit a singular point.
    #[error("Singularity: {message}")]
    Singularity {
        /// Singularity failure message
        message: String,
    },

    /// A function was applied outside of its real domain (e.g. `ln(x)` for `x <= 0`).
    #[error("Domain error: {message}")]
    DomainError {
        /// DomainError failure message
        message: String,
    },

    /// An intermediate or final value overflowed or became NaN.
    #[error("Non-finite value in {context}: {value}")]
    NonFinite {
        /// Where the value was produced
        context: String,
        /// The offending value
        value: f64,
    },

    /// One of the two input angles is unusable.
    #[error("Invalid angle ({angle}): {message}")]
    InvalidAngle {
        /// Name of the rejected angle
        angle: &'static str,
        /// InvalidAngle failure message
        message: String,
    },

    /// A formula name was requested that the catalog does not contain.
    #[error("Unknown formula: {name}")]
    UnknownFormula {
        /// Requested formula name
        name: String,
    },

    /// A physical constant key that is not part of the reference table.
    #[error("Unknown constant: {key}")]
    UnknownConstant {
        /// Requested constant key
        key: String,
    },

    /// Two formulas in one catalog share a name.
    #[error("Duplicate formula: {name}")]
    DuplicateFormula {
        /// Name that is already registered
        name: String,
    },

    /// A comparison deviates from its target by more than the allowed percentage.
    #[error("Tolerance exceeded for {formula}: {percent_error:+.4}% (limit {tolerance_percent}%)")]
    ToleranceExceeded {
        /// Formula whose prediction is out of range
        formula: String,
        /// Signed deviation in percent
        percent_error: f64,
        /// Allowed absolute deviation in percent
        tolerance_percent: f64,
    },

    /// Configuration values that parse but make no sense.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FitResult<T> = Result<T, FitError>;
