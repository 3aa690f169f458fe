//! Configuration module for envform.
//!
//! This module handles loading and validating configuration from:
//! - YAML configuration files (`envform.yaml`)
//! - CLI arguments (which override file values)
//!
//! # Configuration File Format
//!
//! ```yaml
//! # envform.yaml
//!
//! # Generation options
//! generate:
//!   description_fallback: empty   # or: placeholder
//!   env_file: ./.env
//!   tfvars_file: ./terraform.tfvars
//!   variables_file: ./variables.tf
//!
//! # Output options
//! output:
//!   colored: true
//! ```

use crate::error::{EnvformError, Result};
use crate::types::DescriptionFallback;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Fallback for variables without a trailing comment.
    pub description_fallback: DescriptionFallback,

    /// Default `.env` path offered by the wizard (and auto-detected when
    /// present).
    pub env_file: PathBuf,

    /// Default destination for the `.tfvars` value file.
    pub tfvars_file: PathBuf,

    /// Default destination for the `variables.tf` declaration file.
    pub variables_file: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            description_fallback: DescriptionFallback::default(),
            env_file: PathBuf::from("./.env"),
            tfvars_file: PathBuf::from("./terraform.tfvars"),
            variables_file: PathBuf::from("./variables.tf"),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Use colored status output.
    pub colored: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { colored: true }
    }
}

/// The main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation options.
    pub generate: GenerateOptions,

    /// Output options.
    pub output: OutputOptions,
}

/// Example configuration written by `envform init`.
const EXAMPLE_CONFIG: &str = r#"# envform configuration
#
# All values are optional; missing sections fall back to these defaults.

generate:
  # Description emitted for variables without a trailing comment:
  #   empty       -> description = ""
  #   placeholder -> description = "No description available"
  description_fallback: empty

  # Default paths offered by the interactive prompts.
  env_file: ./.env
  tfvars_file: ./terraform.tfvars
  variables_file: ./variables.tf

output:
  colored: true
"#;

impl Config {
    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`EnvformError::ConfigParse`] if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(EnvformError::from)
    }

    /// Example configuration file contents.
    #[must_use]
    pub fn example_yaml() -> &'static str {
        EXAMPLE_CONFIG
    }
}
