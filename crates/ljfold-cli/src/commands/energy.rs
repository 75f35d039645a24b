use super::minimize::read_points;
use crate::cli::EnergyArgs;
use crate::config::builder::resolve_potential;
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use ljfold::core::forcefield::energy;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    let potential = resolve_potential(&args.potential, None, &DefaultsConfig::default())?;

    info!("Loading point set from {:?}", &args.input);
    let points = read_points(&args.input)?;

    let total = energy::total_energy(&points, &potential)
        .map_err(|source| CliError::Engine(source.into()))?;
    info!(
        num_points = points.len(),
        num_dimensions = points.dimensions(),
        total,
        "Evaluated total potential energy."
    );

    println!("Total potential energy: {}", total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PotentialArgs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_scores_a_saved_point_set() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pair.csv");
        fs::write(&input, "0.0,0.0,0.0\n1.0,0.0,0.0\n").unwrap();

        let args = EnergyArgs {
            input,
            potential: PotentialArgs::default(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn run_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let args = EnergyArgs {
            input: dir.path().join("missing.csv"),
            potential: PotentialArgs::default(),
        };
        assert!(matches!(run(args), Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn run_rejects_invalid_potential_before_reading() {
        let dir = tempdir().unwrap();
        let args = EnergyArgs {
            input: dir.path().join("missing.csv"),
            potential: PotentialArgs {
                epsilon: Some(0.0),
                ..Default::default()
            },
        };
        assert!(matches!(run(args), Err(CliError::Potential(_))));
    }

    #[test]
    fn run_rejects_coincident_points() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dup.csv");
        fs::write(&input, "2.0,2.0\n2.0,2.0\n").unwrap();

        let args = EnergyArgs {
            input,
            potential: PotentialArgs::default(),
        };
        assert!(matches!(run(args), Err(CliError::Engine(_))));
    }
}
