//! Command-line interface module.
//!
//! This module defines the CLI structure using Clap, including
//! all commands, arguments, and options.
//!
//! # Commands
//!
//! - `generate`: Convert a `.env` file into Terraform artifacts
//! - `init`: Create an example configuration file
//! - `validate`: Validate a configuration file
//!
//! # Example Usage
//!
//! ```bash
//! # Interactive generation (prompts for anything not flagged)
//! envform generate
//!
//! # Fully non-interactive generation
//! envform generate --env-file ./.env --output terraform.tfvars --yes
//!
//! # Generate declarations with the placeholder description fallback
//! envform generate --variables --description-fallback placeholder
//!
//! # Skip the variables.tf file entirely
//! envform generate --no-variables --yes
//!
//! # Initialize configuration
//! envform init
//!
//! # Validate configuration
//! envform validate envform.yaml
//! ```

use crate::types::DescriptionFallback;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Envform - generate Terraform `.tfvars` and `variables.tf` files from `.env` files.
#[derive(Parser, Debug)]
#[command(
    name = "envform",
    author,
    version,
    about = "Generate Terraform .tfvars and variables.tf files from .env files",
    long_about = "Envform reads KEY=VALUE pairs from a .env-style file and emits a \
                  .tfvars value file plus an optional variables.tf declaration file, \
                  using trailing # comments as variable descriptions."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "ENVFORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a `.env` file into Terraform artifacts
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Create an example configuration file
    Init,

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for the generate command.
///
/// Every path flag pre-answers the corresponding interactive prompt;
/// `--yes` accepts the defaults for whatever remains unanswered.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path of the `.env` file to read
    #[arg(short, long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Destination path for the generated `.tfvars` file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Generate a `variables.tf` declaration file without asking
    #[arg(long, conflicts_with = "no_variables")]
    pub variables: bool,

    /// Skip the `variables.tf` declaration file without asking
    #[arg(long)]
    pub no_variables: bool,

    /// Destination path for the generated `variables.tf` file
    #[arg(long, value_name = "FILE", conflicts_with = "no_variables")]
    pub variables_output: Option<PathBuf>,

    /// Description emitted for variables without a trailing comment
    #[arg(long, value_name = "MODE", value_enum)]
    pub description_fallback: Option<DescriptionFallback>,

    /// Accept every default without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "FILE", default_value = "envform.yaml")]
    pub config: PathBuf,
}
