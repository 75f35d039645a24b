use crate::core::forcefield::params::LennardJonesParams;
use thiserror::Error;

pub const DEFAULT_REPORT_INTERVAL: usize = 50;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least 2 points are required, got {0}")]
    TooFewPoints(usize),
    #[error("Number of dimensions must be at least 1")]
    ZeroDimensions,
    #[error("Learning rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),
    #[error("Potential parameter '{name}' must be positive and finite, got {value}")]
    InvalidPotential { name: &'static str, value: f64 },
    #[error("Initialization range [{low}, {high}) is empty or not finite")]
    InvalidInitRange { low: f64, high: f64 },
    #[error("Reporting interval must be at least 1")]
    ZeroReportInterval,
}

/// Half-open interval `[low, high)` from which starting coordinates are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitRange {
    pub low: f64,
    pub high: f64,
}

impl Default for InitRange {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub num_points: usize,
    pub num_dimensions: usize,
    pub seed: u64,
    pub init_range: InitRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub report_interval: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimizationConfig {
    pub system: SystemConfig,
    pub potential: LennardJonesParams,
    pub optimization: OptimizationConfig,
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_point_count(self.num_points)?;
        if self.num_dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        let InitRange { low, high } = self.init_range;
        // The width must be finite too, or the uniform draw overflows.
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(ConfigError::InvalidInitRange { low, high });
        }
        Ok(())
    }
}

impl OptimizationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

impl MinimizationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.system.validate()?;
        validate_potential(&self.potential)?;
        self.optimization.validate()
    }
}

pub(crate) fn validate_point_count(num_points: usize) -> Result<(), ConfigError> {
    if num_points < 2 {
        return Err(ConfigError::TooFewPoints(num_points));
    }
    Ok(())
}

pub(crate) fn validate_potential(params: &LennardJonesParams) -> Result<(), ConfigError> {
    match params.invalid_parameter() {
        Some((name, value)) => Err(ConfigError::InvalidPotential { name, value }),
        None => Ok(()),
    }
}

#[derive(Default)]
pub struct MinimizationConfigBuilder {
    num_points: Option<usize>,
    num_dimensions: Option<usize>,
    seed: Option<u64>,
    init_range: Option<InitRange>,
    potential: Option<LennardJonesParams>,
    learning_rate: Option<f64>,
    num_iterations: Option<usize>,
    report_interval: Option<usize>,
}

impl MinimizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_points(mut self, n: usize) -> Self {
        self.num_points = Some(n);
        self
    }
    pub fn num_dimensions(mut self, n: usize) -> Self {
        self.num_dimensions = Some(n);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn init_range(mut self, low: f64, high: f64) -> Self {
        self.init_range = Some(InitRange { low, high });
        self
    }
    pub fn potential(mut self, params: LennardJonesParams) -> Self {
        self.potential = Some(params);
        self
    }
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = Some(rate);
        self
    }
    pub fn num_iterations(mut self, iterations: usize) -> Self {
        self.num_iterations = Some(iterations);
        self
    }
    pub fn report_interval(mut self, interval: usize) -> Self {
        self.report_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<MinimizationConfig, ConfigError> {
        let system = SystemConfig {
            num_points: self
                .num_points
                .ok_or(ConfigError::MissingParameter("num_points"))?,
            num_dimensions: self
                .num_dimensions
                .ok_or(ConfigError::MissingParameter("num_dimensions"))?,
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
            init_range: self.init_range.unwrap_or_default(),
        };
        let optimization = OptimizationConfig {
            learning_rate: self
                .learning_rate
                .ok_or(ConfigError::MissingParameter("learning_rate"))?,
            num_iterations: self
                .num_iterations
                .ok_or(ConfigError::MissingParameter("num_iterations"))?,
            report_interval: self.report_interval.unwrap_or(DEFAULT_REPORT_INTERVAL),
        };
        let config = MinimizationConfig {
            system,
            potential: self.potential.unwrap_or_default(),
            optimization,
        };
        config.validate()?;
        Ok(config)
    }
}
