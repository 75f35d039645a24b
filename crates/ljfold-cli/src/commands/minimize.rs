use crate::cli::MinimizeArgs;
use crate::config::builder::build_config;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ljfold::{
    core::forcefield::energy,
    core::io::{csv::CsvFile, traits::PointFile},
    core::models::points::PointSet,
    engine::{optimizer, progress::ProgressReporter},
    workflows::minimize,
};
use std::path::Path;
use tracing::info;

pub fn run(args: MinimizeArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;
    let core_config = &app_config.core_config;

    let initial_points = starting_points(&app_config)?;

    let initial_energy = energy::total_energy(&initial_points, &core_config.potential)
        .map_err(|source| CliError::Engine(source.into()))?;

    println!("Initial points:");
    print!("{}", format_points(&initial_points));
    println!("Initial total potential energy: {}", initial_energy);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core minimization workflow...");
    let result = minimize::run_from_points(
        initial_points,
        &core_config.potential,
        &core_config.optimization,
        &reporter,
    )?;

    println!("\nOutput points:");
    print!("{}", format_points(&result.final_points));
    println!("Final total potential energy: {}", result.final_energy);

    if let Some(output_path) = &app_config.output_path {
        info!("Writing minimized configuration to {:?}", output_path);
        CsvFile::write_to_path(&result.final_points, output_path).map_err(|e| {
            CliError::FileParsing {
                path: output_path.clone(),
                source: e.into(),
            }
        })?;
        println!("✓ Minimized points written to: {}", output_path.display());
    }

    Ok(())
}

/// Loads or draws the starting set and rejects it before anything is printed.
fn starting_points(app_config: &AppConfig) -> Result<PointSet> {
    let points = match &app_config.input_path {
        Some(path) => {
            info!("Loading starting configuration from {:?}", path);
            read_points(path)?
        }
        None => minimize::draw_initial_points(&app_config.core_config.system)?,
    };
    optimizer::check_starting_points(&points)?;
    Ok(points)
}

pub(crate) fn read_points(path: &Path) -> Result<PointSet> {
    CsvFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// One line per point, coordinates bracketed and comma-separated.
fn format_points(points: &PointSet) -> String {
    points
        .iter()
        .map(|point| {
            let coords: Vec<String> = point.iter().map(|c| c.to_string()).collect();
            format!("[{}]\n", coords.join(", "))
        })
        .collect()
}
