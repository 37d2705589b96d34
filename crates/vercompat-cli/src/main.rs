//! Vercompat CLI - Command-line interface for release version compatibility
//!
//! This is the main entry point for the vercompat CLI application, providing
//! commands for parsing, resolving, comparing and wire-encoding release
//! versions.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration, then set up colors and logging from it
    let result = Config::load_with_file(cli.config.as_deref()).and_then(|config| {
        control::set_override(cli.use_color(config.output.color));

        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }

        run(cli, config)
    });

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Create output writer
    let format = cli.output_format(config.output.format);
    let mut output = OutputWriter::new(format, cli.use_color(config.output.color), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Banner => handlers::handle_banner(&mut output),
        Commands::Parse(args) => handlers::handle_parse(args, &mut output),
        Commands::Resolve(args) => handlers::handle_resolve(args, &mut output),
        Commands::Compat(args) => handlers::handle_compat(args, &mut output),
        Commands::List(args) => handlers::handle_list(args, &mut output),
        Commands::Encode(args) => handlers::handle_encode(args, &mut output),
        Commands::Decode(args) => handlers::handle_decode(args, &mut output),
        Commands::IndexCreated(args) => handlers::handle_index_created(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Build the logging configuration from config file, CLI flags and environment
fn logging_config(cli: &Cli, config: &Config) -> LoggingConfig {
    // Explicit -v flags win over the configured level
    let mut logging_config = if cli.verbosity_level() > 0 {
        LoggingConfig::from_verbosity(cli.verbosity_level())
    } else {
        config.logging.clone()
    };

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging_config
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    logging::init_logging(logging_config(cli, config))
}
