//! Envform CLI entry point.
//!
//! This binary provides the command-line interface for envform.

use clap::Parser;
use colored::Colorize;
use envform::cli::{Cli, Commands, GenerateArgs};
use envform::prompt::TermPrompter;
use envform::wizard::Wizard;
use envform::{Config, Generator};
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    // Run the appropriate command
    match run(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");

            // Print error with full chain
            eprintln!("Error: {e}");

            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut i = 0;
                while let Some(cause) = source {
                    eprintln!("  {i}: {cause}");
                    source = cause.source();
                    i += 1;
                }
            }

            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // First try to use RUST_LOG from environment, otherwise use verbose flag
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            // Filter string: envform at specified level, everything else at warn
            EnvFilter::new(format!("warn,envform={base_level}"))
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load configuration
    tracing::debug!("Loading configuration");
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Generate(args) => run_generate(config, &args),

        Commands::Init => {
            // Generate example configuration file
            let config_path = std::path::Path::new("envform.yaml");

            if config_path.exists() {
                anyhow::bail!(
                    "Configuration file already exists: {}",
                    config_path.display()
                );
            }

            std::fs::write(config_path, Config::example_yaml())?;
            println!("Created example configuration: envform.yaml");
            Ok(ExitCode::from(0))
        }

        Commands::Validate(args) => {
            // Validate configuration file
            let config_content = std::fs::read_to_string(&args.config)?;
            match Config::from_yaml(&config_content) {
                Ok(_) => {
                    println!("Configuration is valid: {}", args.config.display());
                    Ok(ExitCode::from(0))
                }
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    Ok(ExitCode::from(1))
                }
            }
        }
    }
}

fn run_generate(mut config: Config, args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    // CLI flag overrides the configured fallback
    if let Some(fallback) = args.description_fallback {
        config.generate.description_fallback = fallback;
    }

    let prompter = TermPrompter;
    let plan = Wizard::new(&config, &prompter).plan(args)?;

    let use_color = config.output.colored;
    let generator = Generator::new(config);
    let outcome = generator.generate(&plan)?;

    status(
        &format!(
            "Wrote {} variable{} to {}",
            outcome.variables,
            if outcome.variables == 1 { "" } else { "s" },
            outcome.tfvars_path.display()
        ),
        use_color,
    );
    if let Some(path) = &outcome.variables_path {
        status(
            &format!("Wrote variable declarations to {}", path.display()),
            use_color,
        );
    }
    status("Process completed successfully.", use_color);

    Ok(ExitCode::from(0))
}

fn status(message: &str, use_color: bool) {
    if use_color {
        println!("{}", message.green());
    } else {
        println!("{message}");
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    // Check for explicit config file
    if let Some(ref config_path) = cli.config {
        tracing::debug!(path = %config_path.display(), "Loading configuration from explicit path");
        let content = std::fs::read_to_string(config_path)?;
        return Ok(Config::from_yaml(&content)?);
    }

    // Look for default config files
    let default_paths = ["envform.yaml", "envform.yml", ".envform.yaml"];
    for path in &default_paths {
        if std::path::Path::new(path).exists() {
            tracing::debug!(path = %path, "Found configuration file");
            let content = std::fs::read_to_string(path)?;
            return Ok(Config::from_yaml(&content)?);
        }
    }

    tracing::debug!("No configuration file found, using default configuration");
    Ok(Config::default())
}
