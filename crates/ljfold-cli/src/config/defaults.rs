use ljfold::engine::config::DEFAULT_REPORT_INTERVAL;

/// Values used when neither the command line nor the config file sets a field.
pub struct DefaultsConfig {
    pub num_points: usize,
    pub num_dimensions: usize,
    pub seed: u64,
    pub init_low: f64,
    pub init_high: f64,
    pub epsilon: f64,
    pub sigma: f64,
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub report_interval: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_points: 5,
            num_dimensions: 3,
            seed: 42,
            init_low: 0.0,
            init_high: 1.0,
            epsilon: 1.0,
            sigma: 1.0,
            learning_rate: 0.001,
            num_iterations: 6000,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}
