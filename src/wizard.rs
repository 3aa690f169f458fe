//! Interactive generation wizard.
//!
//! Walks the prompt sequence (`.env` path, `.tfvars` destination,
//! `variables.tf` choice and destination) and produces an immutable
//! [`GeneratePlan`] for the generator to execute. Every question can be
//! pre-answered by a CLI flag, and `--yes` accepts all remaining defaults
//! without prompting.
//!
//! No step is reversible: the first prompt failure aborts the run.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::Prompter;
use colored::Colorize;
use std::path::PathBuf;

/// Resolved inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePlan {
    /// Path of the `.env` source file
    pub env_path: PathBuf,

    /// Destination of the `.tfvars` value file
    pub tfvars_path: PathBuf,

    /// Destination of the `variables.tf` declaration file, if requested
    pub variables_path: Option<PathBuf>,
}

/// Builds a [`GeneratePlan`] from CLI arguments, configuration defaults
/// and interactive answers, in that order of precedence.
pub struct Wizard<'a, P: Prompter> {
    config: &'a Config,
    prompter: &'a P,
}

impl<'a, P: Prompter> Wizard<'a, P> {
    /// Create a wizard over the given configuration and prompter.
    #[must_use]
    pub fn new(config: &'a Config, prompter: &'a P) -> Self {
        Self { config, prompter }
    }

    /// Run the prompt sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails (e.g. the terminal is closed).
    pub fn plan(&self, args: &GenerateArgs) -> Result<GeneratePlan> {
        let env_path = self.resolve_env_path(args)?;
        let tfvars_path = self.resolve_tfvars_path(args)?;
        let variables_path = self.resolve_variables_path(args)?;

        tracing::debug!(
            env = %env_path.display(),
            tfvars = %tfvars_path.display(),
            variables = ?variables_path,
            "generation plan resolved"
        );

        Ok(GeneratePlan {
            env_path,
            tfvars_path,
            variables_path,
        })
    }

    fn resolve_env_path(&self, args: &GenerateArgs) -> Result<PathBuf> {
        if let Some(path) = &args.env_file {
            return Ok(path.clone());
        }

        let default = &self.config.generate.env_file;
        if default.exists() {
            self.announce(&format!(
                "Found `{}` in the current directory.",
                default.display()
            ));
            return Ok(default.clone());
        }

        if args.yes {
            return Ok(default.clone());
        }

        let answer = self
            .prompter
            .input("Path to the `.env` file", &default.display().to_string())?;
        Ok(PathBuf::from(answer))
    }

    fn resolve_tfvars_path(&self, args: &GenerateArgs) -> Result<PathBuf> {
        if let Some(path) = &args.output {
            return Ok(path.clone());
        }

        let default = &self.config.generate.tfvars_file;
        if args.yes {
            return Ok(default.clone());
        }

        let answer = self.prompter.input(
            "Path to save the `.tfvars` file",
            &default.display().to_string(),
        )?;
        Ok(PathBuf::from(answer))
    }

    fn resolve_variables_path(&self, args: &GenerateArgs) -> Result<Option<PathBuf>> {
        let wanted = if args.no_variables {
            false
        } else if args.variables || args.variables_output.is_some() || args.yes {
            true
        } else {
            self.prompter
                .confirm("Generate a `variables.tf` file?", true)?
        };

        if !wanted {
            return Ok(None);
        }

        if let Some(path) = &args.variables_output {
            return Ok(Some(path.clone()));
        }

        let default = &self.config.generate.variables_file;
        if args.yes {
            return Ok(Some(default.clone()));
        }

        let answer = self.prompter.input(
            "Path to save the `variables.tf` file",
            &default.display().to_string(),
        )?;
        Ok(Some(PathBuf::from(answer)))
    }

    fn announce(&self, message: &str) {
        if self.config.output.colored {
            println!("{}", message.green());
        } else {
            println!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Prompter stub that replays scripted answers.
    struct ScriptedPrompter {
        inputs: RefCell<VecDeque<String>>,
        confirms: RefCell<VecDeque<bool>>,
    }

    impl ScriptedPrompter {
        fn new(inputs: &[&str], confirms: &[bool]) -> Self {
            Self {
                inputs: RefCell::new(inputs.iter().map(|s| (*s).to_string()).collect()),
                confirms: RefCell::new(confirms.iter().copied().collect()),
            }
        }

        fn exhausted(&self) -> bool {
            self.inputs.borrow().is_empty() && self.confirms.borrow().is_empty()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, _title: &str, _default: &str) -> Result<String> {
            Ok(self
                .inputs
                .borrow_mut()
                .pop_front()
                .expect("unexpected input prompt"))
        }

        fn confirm(&self, _title: &str, _default: bool) -> Result<bool> {
            Ok(self
                .confirms
                .borrow_mut()
                .pop_front()
                .expect("unexpected confirm prompt"))
        }
    }

    fn args() -> GenerateArgs {
        GenerateArgs {
            env_file: None,
            output: None,
            variables: false,
            no_variables: false,
            variables_output: None,
            description_fallback: None,
            yes: false,
        }
    }

    /// Configuration whose default `.env` path does not exist, so the
    /// env-path step always reaches the prompt.
    fn config_without_env() -> Config {
        let mut config = Config::default();
        config.generate.env_file = PathBuf::from("/nonexistent/envform-test/.env");
        config
    }

    #[test]
    fn test_flags_preempt_every_prompt() {
        let config = config_without_env();
        let prompter = ScriptedPrompter::new(&[], &[]);
        let wizard = Wizard::new(&config, &prompter);

        let mut args = args();
        args.env_file = Some(PathBuf::from("app.env"));
        args.output = Some(PathBuf::from("out.tfvars"));
        args.variables_output = Some(PathBuf::from("vars.tf"));

        let plan = wizard.plan(&args).unwrap();
        assert_eq!(plan.env_path, PathBuf::from("app.env"));
        assert_eq!(plan.tfvars_path, PathBuf::from("out.tfvars"));
        assert_eq!(plan.variables_path, Some(PathBuf::from("vars.tf")));
        assert!(prompter.exhausted());
    }

    #[test]
    fn test_yes_accepts_defaults_without_prompting() {
        let config = config_without_env();
        let prompter = ScriptedPrompter::new(&[], &[]);
        let wizard = Wizard::new(&config, &prompter);

        let mut args = args();
        args.yes = true;

        let plan = wizard.plan(&args).unwrap();
        assert_eq!(plan.env_path, config.generate.env_file);
        assert_eq!(plan.tfvars_path, config.generate.tfvars_file);
        assert_eq!(
            plan.variables_path,
            Some(config.generate.variables_file.clone())
        );
    }

    #[test]
    fn test_prompts_fill_missing_answers() {
        let config = config_without_env();
        let prompter =
            ScriptedPrompter::new(&["custom.env", "custom.tfvars", "custom-vars.tf"], &[true]);
        let wizard = Wizard::new(&config, &prompter);

        let plan = wizard.plan(&args()).unwrap();
        assert_eq!(plan.env_path, PathBuf::from("custom.env"));
        assert_eq!(plan.tfvars_path, PathBuf::from("custom.tfvars"));
        assert_eq!(plan.variables_path, Some(PathBuf::from("custom-vars.tf")));
        assert!(prompter.exhausted());
    }

    #[test]
    fn test_declining_variables_skips_path_prompt() {
        let config = config_without_env();
        let prompter = ScriptedPrompter::new(&["custom.env", "custom.tfvars"], &[false]);
        let wizard = Wizard::new(&config, &prompter);

        let plan = wizard.plan(&args()).unwrap();
        assert_eq!(plan.variables_path, None);
        assert!(prompter.exhausted());
    }

    #[test]
    fn test_no_variables_flag_skips_confirm() {
        let config = config_without_env();
        let prompter = ScriptedPrompter::new(&["custom.env", "custom.tfvars"], &[]);
        let wizard = Wizard::new(&config, &prompter);

        let mut args = args();
        args.no_variables = true;

        let plan = wizard.plan(&args).unwrap();
        assert_eq!(plan.variables_path, None);
        assert!(prompter.exhausted());
    }

    #[test]
    fn test_existing_default_env_is_auto_detected() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "PORT=8080\n").unwrap();

        let mut config = Config::default();
        config.generate.env_file = env_path.clone();

        let prompter = ScriptedPrompter::new(&["custom.tfvars"], &[false]);
        let wizard = Wizard::new(&config, &prompter);

        let plan = wizard.plan(&args()).unwrap();
        assert_eq!(plan.env_path, env_path);
        assert!(prompter.exhausted());
    }
}
