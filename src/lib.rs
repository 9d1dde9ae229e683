// src/lib.rs

//! `anglefit` - closed-form angle-ratio evaluations compared against
//! reference physical constants
//!
//! Every formula is a fixed trigonometric/exponential expression of two angle
//! inputs (the deficit angle δ = 10° and the torsion angle τ = 35°). Each one
//! is evaluated once and its result is compared to a literal observed
//! constant, reporting the signed percentage deviation.

pub mod core;
pub mod observed;
pub mod formulas;
pub mod catalog;
pub mod evaluation;
pub mod validation;
pub mod config;

// Re-export the most common types for easier top-level use
pub use self::core::{AngleParameters, AngleRef, DerivedRatios, FitError, FitResult, RatioKind};
pub use observed::{PhysicalConstant, Unit};
pub use formulas::Term;
pub use catalog::{Catalog, CatalogBuilder, Formula};
pub use evaluation::{Comparison, EvaluationReport, Evaluator};
pub use config::EvaluationConfig;
pub use validation::{
    check_angle_regular,
    check_finite,
    check_within_tolerance,
    percent_deviation,
    validate_report,
};

// Example 1: Standard catalog at the default angles
// Evaluates all twelve built-in predictions and inspects the spread.
/// ```
/// use anglefit::{AngleParameters, Catalog, Evaluator, FitError};
///
/// let report = Evaluator::new().run(&Catalog::standard(), &AngleParameters::default())?;
/// println!("{}", report);
///
/// // 250 · cos(10°) lands closest to the Higgs vacuum expectation value.
/// assert_eq!(report.best().map(|c| c.formula()), Some("higgs_vev"));
/// // exp(π^ρ⁻¹) misses the Planck mass by almost 8%.
/// assert_eq!(report.worst().map(|c| c.formula()), Some("planck_mass"));
/// assert_eq!(report.count_within_tolerance(), 11);
/// # Ok::<(), FitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: A custom formula
// Builds a one-formula catalog and evaluates it at shifted angles.
/// ```
/// use anglefit::{AngleParameters, AngleRef, CatalogBuilder, Evaluator, FitError, PhysicalConstant, Term};
///
/// let catalog = CatalogBuilder::new()
///     .formula(
///         "z_from_cosines",
///         Term::constant(100.0) * Term::cos(AngleRef::Deficit).powi(2) * Term::cos(AngleRef::Torsion),
///         PhysicalConstant::ZBosonMass,
///     )
///     .build()?;
///
/// let angles = AngleParameters::new(12.0, 30.0)?;
/// let report = Evaluator::with_tolerance(1.0)?.run(&catalog, &angles)?;
/// let z = report.get("z_from_cosines").expect("formula was evaluated");
/// println!("{}", z);
/// assert!(z.predicted() > 80.0 && z.predicted() < 90.0);
/// # Ok::<(), FitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
