use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FilePotentialConfig};
use super::models::AppConfig;
use crate::cli::{MinimizeArgs, PotentialArgs};
use crate::error::{CliError, Result};
use ljfold::core::forcefield::params::LennardJonesParams;
use ljfold::engine::config::MinimizationConfigBuilder;
use std::str::FromStr;
use tracing::debug;

pub fn build_config(args: &MinimizeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let system_file = file_config.system.take().unwrap_or_default();
    let num_points = args
        .num_points
        .or(system_file.num_points)
        .unwrap_or(defaults.num_points);
    let num_dimensions = args
        .num_dimensions
        .or(system_file.num_dimensions)
        .unwrap_or(defaults.num_dimensions);
    let seed = args.seed.or(system_file.seed).unwrap_or(defaults.seed);
    let init_low = args
        .init_low
        .or(system_file.init_low)
        .unwrap_or(defaults.init_low);
    let init_high = args
        .init_high
        .or(system_file.init_high)
        .unwrap_or(defaults.init_high);

    let potential = resolve_potential(&args.potential, file_config.potential.take(), &defaults)?;

    let opt_file = file_config.optimization.take().unwrap_or_default();
    let learning_rate = args
        .learning_rate
        .or(opt_file.learning_rate)
        .unwrap_or(defaults.learning_rate);
    let num_iterations = args
        .num_iterations
        .or(opt_file.num_iterations)
        .unwrap_or(defaults.num_iterations);
    let report_interval = args
        .report_interval
        .or(opt_file.report_interval)
        .unwrap_or(defaults.report_interval);

    let core_config = MinimizationConfigBuilder::new()
        .num_points(num_points)
        .num_dimensions(num_dimensions)
        .seed(seed)
        .init_range(init_low, init_high)
        .potential(potential)
        .learning_rate(learning_rate)
        .num_iterations(num_iterations)
        .report_interval(report_interval)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Resolved minimization configuration.");

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

/// Resolves the potential parameters, later sources overriding earlier ones:
/// built-in defaults, the `[potential]` config section, `--potential-file`,
/// then `--epsilon` / `--sigma`.
pub fn resolve_potential(
    args: &PotentialArgs,
    file_section: Option<FilePotentialConfig>,
    defaults: &DefaultsConfig,
) -> Result<LennardJonesParams> {
    let section = file_section.unwrap_or_default();
    let mut params = LennardJonesParams {
        epsilon: section.epsilon.unwrap_or(defaults.epsilon),
        sigma: section.sigma.unwrap_or(defaults.sigma),
    };

    if let Some(path) = &args.potential_file {
        debug!("Loading potential parameters from file: {:?}", path);
        params = LennardJonesParams::load(path)?;
    }
    if let Some(epsilon) = args.epsilon {
        params.epsilon = epsilon;
    }
    if let Some(sigma) = args.sigma {
        params.sigma = sigma;
    }

    params.validate()?;
    Ok(params)
}

fn parse_set_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "system.num-points" => {
                config.system.get_or_insert_with(Default::default).num_points =
                    Some(parse_set_value(key, value_str, "integer")?);
            }
            "system.num-dimensions" => {
                config
                    .system
                    .get_or_insert_with(Default::default)
                    .num_dimensions = Some(parse_set_value(key, value_str, "integer")?);
            }
            "system.seed" => {
                config.system.get_or_insert_with(Default::default).seed =
                    Some(parse_set_value(key, value_str, "integer")?);
            }
            "system.init-low" => {
                config.system.get_or_insert_with(Default::default).init_low =
                    Some(parse_set_value(key, value_str, "float")?);
            }
            "system.init-high" => {
                config.system.get_or_insert_with(Default::default).init_high =
                    Some(parse_set_value(key, value_str, "float")?);
            }
            "potential.epsilon" => {
                config.potential.get_or_insert_with(Default::default).epsilon =
                    Some(parse_set_value(key, value_str, "float")?);
            }
            "potential.sigma" => {
                config.potential.get_or_insert_with(Default::default).sigma =
                    Some(parse_set_value(key, value_str, "float")?);
            }
            "optimization.learning-rate" => {
                config
                    .optimization
                    .get_or_insert_with(Default::default)
                    .learning_rate = Some(parse_set_value(key, value_str, "float")?);
            }
            "optimization.num-iterations" => {
                config
                    .optimization
                    .get_or_insert_with(Default::default)
                    .num_iterations = Some(parse_set_value(key, value_str, "integer")?);
            }
            "optimization.report-interval" => {
                config
                    .optimization
                    .get_or_insert_with(Default::default)
                    .report_interval = Some(parse_set_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
