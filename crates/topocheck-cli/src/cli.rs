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
    author,
    version,
    about = "topocheck - Validate the bonded topology of LAMMPS data files against allowed atom-type patterns.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every bond, angle, dihedral, and improper of a data file against an allow-list.
    Check(CheckArgs),
    /// Print the rules of an allow-list file, one interaction type per line.
    Rules(RulesArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the LAMMPS data file to check.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the allow-list file in TOML format.
    /// Overrides `allow-list` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub allow_list: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `check.unknown-types` from the config file.
    #[command(flatten)]
    pub unknown_types: UnknownTypesFlags,

    /// Do not draw progress bars on stderr.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S check.unknown-types=reject
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags for how interaction types without a rule are treated.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct UnknownTypesFlags {
    /// Fail on interaction types that have no allow-list rule.
    #[arg(long)]
    pub strict: bool,
    /// Accept interaction types that have no allow-list rule (the default).
    #[arg(long)]
    pub permissive: bool,
}

/// Arguments for the `rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Path to the allow-list file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub allow_list: PathBuf,
}
