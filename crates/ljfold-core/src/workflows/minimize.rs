use crate::core::forcefield::params::LennardJonesParams;
use crate::core::models::points::PointSet;
use crate::engine::config::{MinimizationConfig, OptimizationConfig, SystemConfig};
use crate::engine::error::EngineError;
use crate::engine::optimizer::Optimizer;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampling;
use crate::engine::state::EnergyReport;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct MinimizationResult {
    pub initial_points: PointSet,
    pub final_points: PointSet,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub reports: Vec<EnergyReport>,
}

/// Draws a seeded random starting configuration and minimizes it.
#[instrument(skip_all, name = "minimization_workflow")]
pub fn run(
    config: &MinimizationConfig,
    reporter: &ProgressReporter,
) -> Result<MinimizationResult, EngineError> {
    config.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Initializing Points",
    });
    let points = draw_initial_points(&config.system)?;
    reporter.report(Progress::PhaseFinish);

    run_from_points(points, &config.potential, &config.optimization, reporter)
}

/// Draws the starting configuration described by `system` from a generator
/// seeded with `system.seed`.
pub fn draw_initial_points(system: &SystemConfig) -> Result<PointSet, EngineError> {
    system.validate()?;
    info!(
        num_points = system.num_points,
        num_dimensions = system.num_dimensions,
        seed = system.seed,
        low = system.init_range.low,
        high = system.init_range.high,
        "Drawing initial configuration."
    );
    let mut rng = StdRng::seed_from_u64(system.seed);
    let points = sampling::sample_uniform_points(
        system.num_points,
        system.num_dimensions,
        system.init_range,
        &mut rng,
    )?;
    Ok(points)
}

/// Minimizes a caller-supplied starting configuration.
#[instrument(skip_all, name = "minimization_workflow")]
pub fn run_from_points(
    points: PointSet,
    potential: &LennardJonesParams,
    optimization: &OptimizationConfig,
    reporter: &ProgressReporter,
) -> Result<MinimizationResult, EngineError> {
    let initial_points = points.clone();
    let mut optimizer = Optimizer::new(points, *potential, optimization.clone(), reporter)?;

    let initial_energy = optimizer.energy(0)?;
    info!(initial_energy, "Initial total potential energy.");

    reporter.report(Progress::PhaseStart {
        name: "Gradient Descent",
    });
    let reports = optimizer.descend()?;
    reporter.report(Progress::PhaseFinish);

    let final_energy = optimizer.energy(optimization.num_iterations)?;
    let delta = final_energy - initial_energy;
    info!(final_energy, delta, "Final total potential energy.");
    reporter.report(Progress::Message(format!(
        "Energy change over {} iterations: {:+}",
        optimization.num_iterations, delta
    )));

    Ok(MinimizationResult {
        initial_points,
        final_points: optimizer.into_points(),
        initial_energy,
        final_energy,
        reports,
    })
}
