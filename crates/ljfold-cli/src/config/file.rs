use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSystemConfig {
    pub num_points: Option<usize>,
    pub num_dimensions: Option<usize>,
    pub seed: Option<u64>,
    pub init_low: Option<f64>,
    pub init_high: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePotentialConfig {
    pub epsilon: Option<f64>,
    pub sigma: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOptimizationConfig {
    pub learning_rate: Option<f64>,
    pub num_iterations: Option<usize>,
    pub report_interval: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub system: Option<FileSystemConfig>,
    pub potential: Option<FilePotentialConfig>,
    pub optimization: Option<FileOptimizationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
