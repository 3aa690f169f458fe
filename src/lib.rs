//! # Envform
//!
//! Generate Terraform `.tfvars` and `variables.tf` files from `.env` files.
//!
//! Envform parses `KEY=VALUE # comment` lines into an immutable variable
//! set, then renders two independent Terraform artifacts from it: a
//! `.tfvars` value file and an optional `variables.tf` declaration file
//! whose descriptions come from the trailing comments.
//!
//! ## Features
//!
//! - **Permissive `.env` parsing**: blank lines, full-line comments and
//!   malformed lines are skipped, never errors
//! - **Deterministic output**: variables are emitted sorted by key, so
//!   repeated runs are byte-identical
//! - **Interactive wizard**: prompts for any path not given as a flag,
//!   with `.env` auto-detection and a fully non-interactive `--yes` mode
//! - **Configurable description fallback** for variables without comments
//!
//! ## Example
//!
//! ```rust,no_run
//! use envform::wizard::GeneratePlan;
//! use envform::{Config, Generator};
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let generator = Generator::new(Config::default());
//!     let outcome = generator.generate(&GeneratePlan {
//!         env_path: PathBuf::from(".env"),
//!         tfvars_path: PathBuf::from("terraform.tfvars"),
//!         variables_path: Some(PathBuf::from("variables.tf")),
//!     })?;
//!     println!("wrote {} variables", outcome.variables);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, missing_docs, rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod types;
pub mod wizard;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{EnvformError, Result};
pub use types::{DescriptionFallback, EnvEntry, EnvSet, GenerateOutcome};

use crate::emitter::{Emit, TfvarsEmitter, VariablesEmitter};
use crate::error::ResultExt;
use crate::wizard::GeneratePlan;
use std::path::Path;

/// Orchestrates one parse-and-emit run.
///
/// The `Generator` is the primary entry point for using envform as a
/// library: it reads the `.env` source, renders each requested artifact
/// and writes it to disk. Each file is fully written before the next step
/// begins; the first failure aborts the run.
///
/// # Example
///
/// ```rust,no_run
/// use envform::{Config, Generator};
/// use std::path::Path;
///
/// fn main() -> anyhow::Result<()> {
///     let generator = Generator::new(Config::default());
///     let vars = generator.load_env(Path::new(".env"))?;
///     println!("parsed {} variables", vars.len());
///     Ok(())
/// }
/// ```
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read and parse the `.env` source file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable. Malformed
    /// lines inside the file are skipped, not reported.
    pub fn load_env(&self, path: &Path) -> Result<EnvSet> {
        let vars = parser::parse_path(path)?;
        tracing::debug!(
            count = vars.len(),
            path = %path.display(),
            "parsed variables"
        );
        Ok(vars)
    }

    /// Execute a full generation run.
    ///
    /// Parses the source, then renders and writes the `.tfvars` file and,
    /// when the plan asks for it, the `variables.tf` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or a destination
    /// cannot be written. There are no retries and no partial-output
    /// recovery; the caller should treat any error as fatal.
    pub fn generate(&self, plan: &GeneratePlan) -> Result<GenerateOutcome> {
        let vars = self.load_env(&plan.env_path)?;

        let tfvars = TfvarsEmitter::new().render(&vars);
        std::fs::write(&plan.tfvars_path, tfvars).with_path(&plan.tfvars_path)?;
        tracing::info!(path = %plan.tfvars_path.display(), "tfvars file written");

        if let Some(variables_path) = &plan.variables_path {
            let declarations = VariablesEmitter::new(&self.config).render(&vars);
            std::fs::write(variables_path, declarations).with_path(variables_path)?;
            tracing::info!(path = %variables_path.display(), "variables file written");
        }

        Ok(GenerateOutcome {
            variables: vars.len(),
            tfvars_path: plan.tfvars_path.clone(),
            variables_path: plan.variables_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let config = Config::default();
        let _generator = Generator::new(config);
    }
}
