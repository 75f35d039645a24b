use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::energy::EnergyError;
use crate::core::models::points::PointSetError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid point set: {0}")]
    Points(#[from] PointSetError),

    #[error("Degenerate configuration: points {first} and {second} occupy identical coordinates")]
    CoincidentPoints { first: usize, second: usize },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyError,
    },

    #[error("Descent diverged at iteration {iteration}: total energy is {energy}")]
    Diverged { iteration: usize, energy: f64 },
}
