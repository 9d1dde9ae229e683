// src/main.rs
use anglefit::{validate_report, Catalog, EvaluationConfig};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate closed-form angle formulas against physical constants", long_about = None)]
struct Args {
    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deficit angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    deficit: Option<f64>,

    /// Torsion angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    torsion: Option<f64>,

    /// Allowed absolute deviation in percent
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Evaluate only the named formula (repeatable)
    #[arg(long = "only", value_name = "FORMULA")]
    only: Vec<String>,

    /// List the catalog and exit
    #[arg(long)]
    list: bool,

    /// Exit with a failure status if any prediction is outside the tolerance
    #[arg(long)]
    strict: bool,
}

/// Loads the config file, if any, and applies the command-line overrides.
fn resolve_config(args: &Args) -> anyhow::Result<EvaluationConfig> {
    let mut config = match &args.config {
        Some(path) => EvaluationConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EvaluationConfig::default(),
    };
    if let Some(deficit) = args.deficit {
        config.angles.deficit_deg = deficit;
    }
    if let Some(torsion) = args.torsion {
        config.angles.torsion_deg = torsion;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance_percent = tolerance;
    }
    if !args.only.is_empty() {
        config.formulas = Some(args.only.clone());
    }
    Ok(config)
}

/// Writes the catalog listing or the report to `out`.
/// Returns `false` only when `--strict` is set and a prediction is out of tolerance.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = resolve_config(args)?;
    let catalog = config.select(Catalog::standard())?;
    if args.list {
        write!(out, "{}", catalog)?;
        return Ok(true);
    }

    let angles = config.angle_parameters()?;
    let evaluator = config.evaluator()?;
    let report = evaluator.run(&catalog, &angles)?;
    write!(out, "{}", report)?;

    if args.strict {
        if let Err(e) = validate_report(&report, Some(evaluator.tolerance_percent())) {
            eprintln!("{}", e);
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let passed = run(&args, &mut std::io::stdout().lock())?;
    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("anglefit").chain(argv.iter().copied())).unwrap()
    }

    fn run_to_string(args: &Args) -> (bool, String) {
        let mut out = Vec::new();
        let passed = run(args, &mut out).unwrap();
        (passed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&["--deficit", "12", "--torsion", "-30", "-t", "1.5", "--only", "higgs_vev", "--only", "z_boson_mass"]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.angles.deficit_deg, 12.0);
        assert_eq!(config.angles.torsion_deg, -30.0);
        assert_eq!(config.tolerance_percent, 1.5);
        assert_eq!(config.formulas, Some(vec!["higgs_vev".to_string(), "z_boson_mass".to_string()]));
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let config = resolve_config(&parse(&[])).unwrap();
        assert_eq!(config, EvaluationConfig::default());
    }

    #[test]
    fn test_list_prints_catalog_without_evaluating() {
        // 90° would make tan(δ) singular, but listing never evaluates.
        let args = parse(&["--list", "--deficit", "90", "--only", "higgs_mass"]);
        let (passed, out) = run_to_string(&args);
        assert!(passed);
        assert!(out.starts_with("anglefit::Catalog[1 formulas]"));
        assert!(out.contains("higgs_mass"));
        assert!(!out.contains("Evaluation Report"));
    }

    #[test]
    fn test_strict_fails_when_out_of_tolerance() {
        // planck_mass is almost 8% off at the default angles.
        let (passed, out) = run_to_string(&parse(&["--strict"]));
        assert!(!passed);
        assert!(out.contains("11/12 within ±5%"));

        let (passed, _) = run_to_string(&parse(&["--strict", "--tolerance", "10"]));
        assert!(passed);
    }

    #[test]
    fn test_without_strict_out_of_tolerance_passes() {
        let (passed, out) = run_to_string(&parse(&[]));
        assert!(passed);
        assert!(out.contains("OUT"));
    }

    #[test]
    fn test_strict_with_only_selected_formulas() {
        let (passed, out) = run_to_string(&parse(&["--strict", "--only", "higgs_vev"]));
        assert!(passed);
        assert!(out.contains("1/1 within ±5%"));
    }

    #[test]
    fn test_unknown_formula_is_an_error() {
        let mut out = Vec::new();
        let err = run(&parse(&["--only", "no_such_formula"]), &mut out).unwrap_err();
        assert!(err.to_string().contains("no_such_formula"), "{}", err);
    }
}
