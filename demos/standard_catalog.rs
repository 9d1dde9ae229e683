//! Evaluates the standard catalog at the fixed angles and prints the comparison table.

use anglefit::{AngleParameters, Catalog, Evaluator, FitError};

fn main() -> Result<(), FitError> {
    println!("--- anglefit Example: Standard Catalog ---");

    let catalog = Catalog::standard();
    println!("\nCatalog Definition:\n{}", catalog);

    let angles = AngleParameters::default();
    let report = Evaluator::new().run(&catalog, &angles)?;
    println!("{}", report);

    if let (Some(best), Some(worst)) = (report.best(), report.worst()) {
        println!("Closest:  {}", best);
        println!("Farthest: {}", worst);
    }

    // Same inputs, same numbers: a second run is bit-identical.
    let again = Evaluator::new().run(&catalog, &angles)?;
    assert_eq!(report, again);
    println!("\nRe-running the catalog reproduced every value exactly.");

    Ok(())
}
