use ljfold::engine::config::MinimizationConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub core_config: MinimizationConfig,
}
