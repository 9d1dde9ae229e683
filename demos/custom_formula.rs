//! Adds a hand-written formula to the standard catalog and shows how a
//! singular angle surfaces as an error instead of a silent infinity.

use anglefit::{
    AngleParameters, AngleRef, Catalog, CatalogBuilder, Evaluator, FitError, PhysicalConstant, RatioKind, Term,
};

fn main() -> Result<(), FitError> {
    println!("--- anglefit Example: Custom Formula ---");

    // 1/α ≈ 4π² · ρ⁻¹ + ln(ρ⁻¹)
    let expression = Term::constant(4.0) * Term::Pi.powi(2) * Term::ratio(RatioKind::InverseSine)
        + Term::ratio(RatioKind::InverseSine).ln();
    println!("Expression: {}", expression);

    let catalog = CatalogBuilder::from_catalog(Catalog::standard())
        .formula("inverse_fine_structure_log", expression, PhysicalConstant::InverseFineStructure)
        .build()?;

    let report = Evaluator::with_tolerance(2.0)?.run(&catalog, &AngleParameters::default())?;
    if let Some(comparison) = report.get("inverse_fine_structure_log") {
        println!("{}", comparison);
    }
    println!("{}/{} within ±2%", report.count_within_tolerance(), report.len());

    // tan(τ) is undefined at τ = 90°, so the weak mixing formula cannot be evaluated.
    let right_angle = AngleParameters::new(10.0, 90.0)?;
    let tangent = Term::tan(AngleRef::Torsion) / Term::constant(3.0);
    let formula = anglefit::Formula::new("weak_mixing_angle", "", tangent, PhysicalConstant::WeakMixingAngle);
    match Evaluator::new().evaluate_formula(&formula, &right_angle) {
        Ok(c) => println!("Unexpected success: {}", c),
        Err(e) => println!("\nAt {}: {}", right_angle, e),
    }

    Ok(())
}
