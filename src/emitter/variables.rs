//! `variables.tf` declaration file emitter.

use crate::config::Config;
use crate::emitter::Emit;
use crate::types::{DescriptionFallback, EnvSet};

/// Emits one `variable` declaration block per variable.
///
/// Every variable is declared with the fixed type `string`; no type
/// inference is attempted. The description comes from the entry's
/// trailing comment, falling back to the configured
/// [`DescriptionFallback`] when absent.
#[derive(Debug)]
pub struct VariablesEmitter {
    /// Fallback for entries without a description
    fallback: DescriptionFallback,
}

impl VariablesEmitter {
    /// Create a new `variables.tf` emitter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            fallback: config.generate.description_fallback,
        }
    }
}

impl Emit for VariablesEmitter {
    fn render(&self, vars: &EnvSet) -> String {
        let mut output = String::new();

        for entry in vars.iter() {
            let description = entry
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| self.fallback.text());

            output.push_str(&format!(
                "variable \"{}\" {{\n  description = \"{}\"\n  type        = string\n}}\n\n",
                entry.key, description
            ));
        }

        output
    }
}
