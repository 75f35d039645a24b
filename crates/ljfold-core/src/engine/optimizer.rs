use super::config::{self, OptimizationConfig};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::state::EnergyReport;
use crate::core::forcefield::energy;
use crate::core::forcefield::params::LennardJonesParams;
use crate::core::models::points::PointSet;
use tracing::{debug, info, instrument, trace};

/// Rejects starting sets the descent cannot run on: fewer than two points,
/// or any two points sharing coordinates.
pub fn check_starting_points(points: &PointSet) -> Result<(), EngineError> {
    config::validate_point_count(points.len())?;
    if let Some((first, second)) = points.find_coincident_pair() {
        return Err(EngineError::CoincidentPoints { first, second });
    }
    Ok(())
}

/// Fixed-step gradient descent over an owned point set.
///
/// Points are updated one at a time in ascending index order, each update
/// seeing the positions already moved earlier in the same sweep.
pub struct Optimizer<'a> {
    points: PointSet,
    potential: LennardJonesParams,
    optimization: OptimizationConfig,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a> Optimizer<'a> {
    /// Validates the configuration and starting points before taking ownership.
    pub fn new(
        points: PointSet,
        potential: LennardJonesParams,
        optimization: OptimizationConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Result<Self, EngineError> {
        check_starting_points(&points)?;
        config::validate_potential(&potential)?;
        optimization.validate()?;

        Ok(Self {
            points,
            potential,
            optimization,
            reporter,
        })
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn into_points(self) -> PointSet {
        self.points
    }

    /// Total energy of the current configuration, rejecting non-finite values.
    pub fn energy(&self, iteration: usize) -> Result<f64, EngineError> {
        let energy = energy::total_energy(&self.points, &self.potential)?;
        if !energy.is_finite() {
            return Err(EngineError::Diverged { iteration, energy });
        }
        Ok(energy)
    }

    /// One Gauss–Seidel sweep over every point.
    pub fn sweep(&mut self) -> Result<(), EngineError> {
        let learning_rate = self.optimization.learning_rate;
        for index in 0..self.points.len() {
            let gradient = energy::gradient_at(index, &self.points, &self.potential)?;
            self.points.displace(index, &gradient, -learning_rate);
        }
        Ok(())
    }

    /// Runs every configured iteration, reporting the total energy after each
    /// iteration whose 1-based number is a multiple of the report interval.
    #[instrument(skip_all, name = "gradient_descent")]
    pub fn descend(&mut self) -> Result<Vec<EnergyReport>, EngineError> {
        let OptimizationConfig {
            num_iterations,
            report_interval,
            learning_rate,
        } = self.optimization;
        info!(
            num_iterations,
            learning_rate,
            num_points = self.points.len(),
            "Starting gradient descent."
        );

        self.reporter.report(Progress::TaskStart {
            total_steps: num_iterations as u64,
        });

        let mut reports = Vec::with_capacity(num_iterations / report_interval);
        for iteration in 1..=num_iterations {
            self.sweep()?;
            self.reporter.report(Progress::TaskIncrement);

            if iteration % report_interval == 0 {
                let energy = self.energy(iteration)?;
                debug!(iteration, energy, "Energy report.");
                self.reporter
                    .report(Progress::EnergyReport { iteration, energy });
                reports.push(EnergyReport { iteration, energy });
            } else {
                trace!(iteration, "Sweep complete.");
            }
        }

        self.reporter.report(Progress::TaskFinish);
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::energy::EnergyError;
    use crate::core::forcefield::potentials;
    use nalgebra::DVector;
    use std::sync::{Arc, Mutex};

    fn unit_params() -> LennardJonesParams {
        LennardJonesParams::default()
    }

    fn optimization(num_iterations: usize, report_interval: usize) -> OptimizationConfig {
        OptimizationConfig {
            learning_rate: 0.001,
            num_iterations,
            report_interval,
        }
    }

    fn cluster() -> PointSet {
        PointSet::from_rows(vec![
            vec![0.0, 0.0, 0.0],
            vec![1.3, 0.1, 0.0],
            vec![0.2, 1.4, 0.3],
            vec![0.9, 0.8, 1.2],
        ])
        .unwrap()
    }

    #[test]
    fn new_rejects_single_point() {
        let reporter = ProgressReporter::new();
        let points = PointSet::from_rows(vec![vec![0.0, 0.0]]).unwrap();
        let result = Optimizer::new(points, unit_params(), optimization(1, 1), &reporter);
        assert!(matches!(
            result,
            Err(EngineError::Config(config::ConfigError::TooFewPoints(1)))
        ));
    }

    #[test]
    fn new_rejects_coincident_points() {
        let reporter = ProgressReporter::new();
        let points =
            PointSet::from_rows(vec![vec![0.5, 0.5], vec![1.0, 2.0], vec![0.5, 0.5]]).unwrap();
        let result = Optimizer::new(points, unit_params(), optimization(1, 1), &reporter);
        assert!(matches!(
            result,
            Err(EngineError::CoincidentPoints {
                first: 0,
                second: 2
            })
        ));
    }

    #[test]
    fn new_rejects_invalid_learning_rate() {
        let reporter = ProgressReporter::new();
        let mut opt = optimization(1, 1);
        opt.learning_rate = -0.5;
        let result = Optimizer::new(cluster(), unit_params(), opt, &reporter);
        assert!(matches!(
            result,
            Err(EngineError::Config(config::ConfigError::InvalidLearningRate(_)))
        ));
    }

    #[test]
    fn check_starting_points_accepts_distinct_pair() {
        let points = PointSet::from_rows(vec![vec![0.0, 0.0], vec![0.0, 1e-12]]).unwrap();
        assert!(check_starting_points(&points).is_ok());
    }

    #[test]
    fn sweep_fails_when_a_moved_point_lands_on_a_later_one() {
        let reporter = ProgressReporter::new();
        // Point 2 sits far enough away that its pull on point 0 underflows to
        // exactly zero, so point 0 moves by exactly lr * 93/512 = 93 * 2^131.
        let learning_rate = 2f64.powi(140);
        let landing = 93.0 * 2f64.powi(131);
        let start = PointSet::from_rows(vec![vec![0.0], vec![2.0], vec![landing]]).unwrap();
        let mut opt = optimization(1, 1);
        opt.learning_rate = learning_rate;
        let mut optimizer = Optimizer::new(start, unit_params(), opt, &reporter).unwrap();

        let result = optimizer.sweep();
        assert!(matches!(
            result,
            Err(EngineError::Energy {
                source: EnergyError::CoincidentPoints {
                    first: 0,
                    second: 2
                }
            })
        ));
        assert_eq!(optimizer.points().point(0).unwrap()[0], landing);
    }

    #[test]
    fn descend_stops_with_diverged_when_energy_goes_non_finite() {
        let reporter = ProgressReporter::new();
        // At r = 0.5 the repulsive gradient is large enough that this step
        // pushes point 0 to -inf, after which the total energy is NaN.
        let start = PointSet::from_rows(vec![vec![0.0], vec![0.5]]).unwrap();
        let mut opt = optimization(5, 1);
        opt.learning_rate = 1e305;
        let mut optimizer = Optimizer::new(start, unit_params(), opt, &reporter).unwrap();

        let result = optimizer.descend();
        assert!(matches!(
            result,
            Err(EngineError::Diverged { iteration: 1, energy }) if !energy.is_finite()
        ));
    }

    #[test]
    fn energy_reports_diverged_for_non_finite_coordinates() {
        let reporter = ProgressReporter::new();
        let mut optimizer =
            Optimizer::new(cluster(), unit_params(), optimization(1, 1), &reporter).unwrap();
        let direction = DVector::from_element(3, f64::NAN);
        optimizer.points.displace(1, &direction, 1.0);

        assert!(matches!(
            optimizer.energy(7),
            Err(EngineError::Diverged { iteration: 7, .. })
        ));
    }

    #[test]
    fn sweep_updates_points_sequentially() {
        let reporter = ProgressReporter::new();
        let params = unit_params();
        let start = PointSet::from_rows(vec![vec![0.0], vec![1.5], vec![3.1]]).unwrap();
        let mut optimizer =
            Optimizer::new(start.clone(), params, optimization(1, 1), &reporter).unwrap();
        optimizer.sweep().unwrap();

        // Replay by hand: each gradient sees the already-moved earlier points.
        let mut expected = start.clone();
        for index in 0..expected.len() {
            let g = energy::gradient_at(index, &expected, &params).unwrap();
            expected.displace(index, &g, -0.001);
        }
        assert_eq!(optimizer.points(), &expected);

        // A frozen-snapshot update lands somewhere else.
        let mut batch = start.clone();
        let gradients: Vec<_> = (0..start.len())
            .map(|i| energy::gradient_at(i, &start, &params).unwrap())
            .collect();
        for (index, g) in gradients.iter().enumerate() {
            batch.displace(index, g, -0.001);
        }
        assert_ne!(optimizer.points(), &batch);
    }

    #[test]
    fn sweep_moves_first_point_by_learning_rate_times_gradient() {
        let reporter = ProgressReporter::new();
        let params = unit_params();
        let start = PointSet::from_rows(vec![vec![0.0, 0.0], vec![2.0, 0.0]]).unwrap();
        let mut optimizer = Optimizer::new(start, params, optimization(1, 1), &reporter).unwrap();
        optimizer.sweep().unwrap();

        let radial = potentials::lennard_jones_12_6_gradient(2.0, &params);
        let expected_x = 0.0 - 0.001 * (radial * -2.0);
        assert_eq!(optimizer.points().point(0).unwrap()[0], expected_x);
        assert_eq!(optimizer.points().point(0).unwrap()[1], 0.0);
    }

    #[test]
    fn descend_with_zero_iterations_leaves_points_untouched() {
        let reporter = ProgressReporter::new();
        let start = cluster();
        let mut optimizer =
            Optimizer::new(start.clone(), unit_params(), optimization(0, 50), &reporter).unwrap();
        let reports = optimizer.descend().unwrap();
        assert!(reports.is_empty());
        assert_eq!(optimizer.into_points(), start);
    }

    #[test]
    fn descend_reports_at_every_interval_multiple() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::EnergyReport { iteration, .. } = event {
                sink.lock().unwrap().push(iteration);
            }
        }));

        let mut optimizer =
            Optimizer::new(cluster(), unit_params(), optimization(120, 50), &reporter).unwrap();
        let reports = optimizer.descend().unwrap();

        let iterations: Vec<usize> = reports.iter().map(|r| r.iteration).collect();
        assert_eq!(iterations, vec![50, 100]);
        assert_eq!(*events.lock().unwrap(), vec![50, 100]);
        for report in &reports {
            assert!(report.energy.is_finite());
        }
    }

    #[test]
    fn descend_lowers_energy_of_loose_cluster() {
        let reporter = ProgressReporter::new();
        let mut optimizer =
            Optimizer::new(cluster(), unit_params(), optimization(500, 100), &reporter).unwrap();
        let initial = optimizer.energy(0).unwrap();
        let reports = optimizer.descend().unwrap();
        let last = reports.last().unwrap();
        assert_eq!(last.iteration, 500);
        assert!(last.energy < initial);
    }

    #[test]
    fn descend_reports_task_lifecycle() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        let mut optimizer =
            Optimizer::new(cluster(), unit_params(), optimization(3, 2), &reporter).unwrap();
        optimizer.descend().unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(events[0], Progress::TaskStart { total_steps: 3 }));
        let increments = events
            .iter()
            .filter(|e| matches!(e, Progress::TaskIncrement))
            .count();
        assert_eq!(increments, 3);
        assert!(matches!(events.last(), Some(Progress::TaskFinish)));
    }
}
