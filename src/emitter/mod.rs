//! Terraform artifact emitters.
//!
//! This module renders an [`EnvSet`] into the two output formats:
//! - `.tfvars`: one `KEY = "VALUE"` assignment per variable
//! - `variables.tf`: one `variable` declaration block per variable
//!
//! Both emitters iterate the set in key order, so repeated runs over the
//! same input produce byte-identical output. Rendering is infallible;
//! write failures surface in the [`Generator`](crate::Generator).
//!
//! # Example
//!
//! ```rust
//! use envform::emitter::{Emit, TfvarsEmitter};
//! use envform::parser::parse_str;
//!
//! let vars = parse_str("PORT=8080\n");
//! let rendered = TfvarsEmitter::new().render(&vars);
//! assert_eq!(rendered, "PORT = \"8080\"\n");
//! ```

mod tfvars;
mod variables;

pub use tfvars::TfvarsEmitter;
pub use variables::VariablesEmitter;

use crate::types::EnvSet;

/// Trait for artifact emitters.
pub trait Emit {
    /// Render the artifact text for the given variable set.
    fn render(&self, vars: &EnvSet) -> String;
}
