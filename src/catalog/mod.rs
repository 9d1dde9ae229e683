// src/catalog/mod.rs

//! Defines named formulas and ordered, name-unique collections of them.
//!
//! A `Catalog` is the unit of work handed to the `Evaluator`: every formula
//! in it is evaluated once, in insertion order, against the same angles.

use crate::core::{AngleRef, FitError, FitResult, RatioKind};
use crate::formulas::Term;
use crate::observed::PhysicalConstant;
use std::collections::HashSet;
use std::fmt;

/// A single "prediction": an expression paired with the constant it is
/// claimed to reproduce.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    name: String,
    description: String,
    expression: Term,
    target: PhysicalConstant,
}

impl Formula {
    /// Creates a new formula. The description is free text for reports.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expression: Term,
        target: PhysicalConstant,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expression,
            target,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expression(&self) -> &Term {
        &self.expression
    }

    pub fn target(&self) -> PhysicalConstant {
        self.target
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ≈ {}", self.name, self.expression, self.target.symbol())
    }
}

/// An ordered collection of formulas with unique names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    formulas: Vec<Formula>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The twelve fixed predictions evaluated by default.
    pub fn standard() -> Self {
        use AngleRef::{Deficit, Torsion};
        use PhysicalConstant as C;

        let rho = || Term::ratio(RatioKind::Sine);
        let rho_inv = || Term::ratio(RatioKind::InverseSine);
        let k = Term::constant;

        let formulas = vec![
            Formula::new(
                "fine_structure",
                "eighth power of the sine ratio, scaled by 100",
                k(100.0) * rho().powi(8),
                C::FineStructure,
            ),
            Formula::new(
                "inverse_fine_structure",
                "exponential of the sine ratio, scaled by 100",
                k(100.0) * rho().exp(),
                C::InverseFineStructure,
            ),
            Formula::new(
                "electron_mass",
                "cosine of the torsion angle raised to the inverse sine ratio (MeV)",
                Term::cos(Torsion).pow(rho_inv()),
                C::ElectronMass,
            ),
            Formula::new(
                "muon_mass",
                "inverse sine ratio over π, scaled by 100 (MeV)",
                k(100.0) * rho_inv() / Term::Pi,
                C::MuonMass,
            ),
            Formula::new(
                "proton_electron_mass_ratio",
                "100π over the sine of the deficit angle",
                k(100.0) * Term::Pi / Term::sin(Deficit),
                C::ProtonElectronMassRatio,
            ),
            Formula::new(
                "w_boson_mass",
                "product of both cosines, scaled by 100 (GeV)",
                k(100.0) * Term::cos(Deficit) * Term::cos(Torsion),
                C::WBosonMass,
            ),
            Formula::new(
                "z_boson_mass",
                "sine ratio scaled by 300 (GeV)",
                k(300.0) * rho(),
                C::ZBosonMass,
            ),
            Formula::new(
                "higgs_mass",
                "product of both tangents, scaled by 1000 (GeV)",
                k(1000.0) * Term::tan(Deficit) * Term::tan(Torsion),
                C::HiggsMass,
            ),
            Formula::new(
                "higgs_vev",
                "cosine of the deficit angle scaled by 250 (GeV)",
                k(250.0) * Term::cos(Deficit),
                C::HiggsVev,
            ),
            Formula::new(
                "top_quark_mass",
                "sine of the torsion angle scaled by 300 (GeV)",
                k(300.0) * Term::sin(Torsion),
                C::TopQuarkMass,
            ),
            Formula::new(
                "weak_mixing_angle",
                "a third of the torsion tangent",
                Term::tan(Torsion) / k(3.0),
                C::WeakMixingAngle,
            ),
            Formula::new(
                "planck_mass",
                "exponential of π raised to the inverse sine ratio (GeV)",
                Term::Pi.pow(rho_inv()).exp(),
                C::PlanckMass,
            ),
        ];

        Catalog { formulas }
    }

    /// Appends a formula.
    ///
    /// # Errors
    /// Returns `FitError::DuplicateFormula` if a formula with the same name is
    /// already present. The catalog is left unchanged in that case.
    pub fn add_formula(&mut self, formula: Formula) -> FitResult<()> {
        if self.get(formula.name()).is_some() {
            return Err(FitError::DuplicateFormula { name: formula.name().to_string() });
        }
        self.formulas.push(formula);
        Ok(())
    }

    /// Looks a formula up by name.
    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.name() == name)
    }

    /// Keeps only the named formulas, preserving catalog order.
    ///
    /// # Errors
    /// Returns `FitError::UnknownFormula` for the first name with no match;
    /// the catalog is left unchanged in that case.
    pub fn retain_names<S: AsRef<str>>(&mut self, names: &[S]) -> FitResult<()> {
        let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        for name in names {
            if self.get(name.as_ref()).is_none() {
                return Err(FitError::UnknownFormula { name: name.as_ref().to_string() });
            }
        }
        self.formulas.retain(|f| wanted.contains(f.name()));
        Ok(())
    }

    /// Returns the formulas in evaluation order.
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Formula> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Formula;
    type IntoIter = std::slice::Iter<'a, Formula>;

    fn into_iter(self) -> Self::IntoIter {
        self.formulas.iter()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "anglefit::Catalog[{} formulas]", self.formulas.len())?;
        let width = self.formulas.iter().map(|fm| fm.name().len()).max().unwrap_or(0);
        for formula in &self.formulas {
            writeln!(
                f,
                "  {:<width$}  {}  ≈ {}",
                formula.name(),
                formula.expression(),
                formula.target(),
                width = width
            )?;
        }
        Ok(())
    }
}

//-------------------------------------------------------------------------
// Catalog Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Catalog` instances using method chaining.
///
/// Duplicate names are reported by `build()` rather than at each call so
/// that chains stay infallible.
#[derive(Default)]
pub struct CatalogBuilder {
    formulas: Vec<Formula>,
}

impl CatalogBuilder {
    /// Creates a new, empty CatalogBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing catalog, e.g. `Catalog::standard()`.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { formulas: catalog.formulas }
    }

    /// Adds a single formula.
    pub fn add(mut self, formula: Formula) -> Self {
        self.formulas.push(formula);
        self
    }

    /// Shorthand for `add(Formula::new(..))` with an empty description.
    pub fn formula(self, name: impl Into<String>, expression: Term, target: PhysicalConstant) -> Self {
        self.add(Formula::new(name, String::new(), expression, target))
    }

    /// Finalizes the catalog.
    ///
    /// # Errors
    /// Returns `FitError::DuplicateFormula` if two formulas share a name.
    pub fn build(self) -> FitResult<Catalog> {
        let mut catalog = Catalog::new();
        for formula in self.formulas {
            catalog.add_formula(formula)?;
        }
        Ok(catalog)
    }
}
