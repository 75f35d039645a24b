use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LennardJonesParams {
    /// Well depth (energy scale).
    pub epsilon: f64,
    /// Distance at which the pair energy crosses zero (length scale).
    pub sigma: f64,
}

impl Default for LennardJonesParams {
    fn default() -> Self {
        Self {
            epsilon: 1.0,
            sigma: 1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid potential parameter '{name}': {value} (must be positive and finite)")]
    Invalid { name: &'static str, value: f64 },
}

impl LennardJonesParams {
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self, ParamLoadError> {
        let params = Self { epsilon, sigma };
        params.validate()?;
        Ok(params)
    }

    /// Name and value of the first parameter that is not positive and finite.
    pub fn invalid_parameter(&self) -> Option<(&'static str, f64)> {
        [("epsilon", self.epsilon), ("sigma", self.sigma)]
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value <= 0.0)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        match self.invalid_parameter() {
            Some((name, value)) => Err(ParamLoadError::Invalid { name, value }),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }
}
