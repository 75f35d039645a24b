use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ljfold - Lennard-Jones energy minimization of point systems by fixed-step gradient descent.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel energy evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimize the total Lennard-Jones energy of a point system by gradient descent.
    Minimize(MinimizeArgs),
    /// Evaluate the total Lennard-Jones energy of a saved point set.
    Energy(EnergyArgs),
}

/// Potential parameter overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PotentialArgs {
    /// Load epsilon and sigma from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub potential_file: Option<PathBuf>,

    /// Override the well depth of the potential.
    #[arg(long, value_name = "FLOAT")]
    pub epsilon: Option<f64>,

    /// Override the zero-crossing distance of the potential.
    #[arg(long, value_name = "FLOAT")]
    pub sigma: Option<f64>,
}

/// Arguments for the `minimize` subcommand.
#[derive(Args, Debug)]
pub struct MinimizeArgs {
    // --- Core Arguments ---
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start from the points in a CSV file instead of a random draw.
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["num_points", "num_dimensions", "seed", "init_low", "init_high"]
    )]
    pub input: Option<PathBuf>,

    /// Write the minimized points to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- System Overrides ---
    /// Override the number of points.
    #[arg(short = 'n', long, value_name = "INT")]
    pub num_points: Option<usize>,

    /// Override the number of dimensions.
    #[arg(short = 'd', long, value_name = "INT")]
    pub num_dimensions: Option<usize>,

    /// Override the seed of the random initial draw.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the lower bound of the initial coordinate range.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub init_low: Option<f64>,

    /// Override the (exclusive) upper bound of the initial coordinate range.
    #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub init_high: Option<f64>,

    // --- Potential Overrides ---
    #[command(flatten)]
    pub potential: PotentialArgs,

    // --- Optimization Overrides ---
    /// Override the gradient-descent learning rate.
    #[arg(short = 'r', long, value_name = "FLOAT")]
    pub learning_rate: Option<f64>,

    /// Override the number of descent iterations.
    #[arg(short = 't', long = "iterations", value_name = "INT")]
    pub num_iterations: Option<usize>,

    /// Override how often (in iterations) the total energy is reported.
    #[arg(long, value_name = "INT")]
    pub report_interval: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S optimization.num-iterations=1000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to the CSV point set to evaluate.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub potential: PotentialArgs,
}
