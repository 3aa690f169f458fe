//! `.tfvars` value file emitter.

use crate::emitter::Emit;
use crate::types::EnvSet;

/// Emits one `KEY = "VALUE"` assignment line per variable.
///
/// Values are wrapped in double quotes verbatim; embedded quotes are not
/// escaped. The output is write-only: reparsing it is not a supported
/// round-trip.
#[derive(Debug, Default)]
pub struct TfvarsEmitter;

impl TfvarsEmitter {
    /// Create a new `.tfvars` emitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Emit for TfvarsEmitter {
    fn render(&self, vars: &EnvSet) -> String {
        let mut output = String::new();

        for entry in vars.iter() {
            output.push_str(&format!("{} = \"{}\"\n", entry.key, entry.value));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_variable() {
        let vars = parse_str("PORT=8080\n");
        assert_eq!(TfvarsEmitter::new().render(&vars), "PORT = \"8080\"\n");
    }

    #[test]
    fn test_variables_are_emitted_in_key_order() {
        let vars = parse_str("STATIC=/app/assets\nPORT=8080\nDB_PATH=/app/data.db\n");
        assert_eq!(
            TfvarsEmitter::new().render(&vars),
            "DB_PATH = \"/app/data.db\"\nPORT = \"8080\"\nSTATIC = \"/app/assets\"\n"
        );
    }

    #[test]
    fn test_descriptions_do_not_leak_into_values() {
        let vars = parse_str("PORT=8080 # http listen port\n");
        assert_eq!(TfvarsEmitter::new().render(&vars), "PORT = \"8080\"\n");
    }

    #[test]
    fn test_empty_set_renders_empty_text() {
        let vars = parse_str("");
        assert_eq!(TfvarsEmitter::new().render(&vars), "");
    }
}
