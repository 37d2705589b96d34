//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vercompat CLI - Inspect release versions and their compatibility
///
/// Parse and resolve release version identifiers, compute wire and index
/// compatibility floors, and encode versions for the wire.
#[derive(Parser, Debug)]
#[command(
    name = "vercompat",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VERCOMPAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version banner of this build
    Banner,

    /// Parse version strings and show their ids, companions and floors
    Parse(ParseArgs),

    /// Resolve raw version ids, declared or not
    Resolve(ResolveArgs),

    /// Check whether two versions may interoperate
    Compat(CompatArgs),

    /// List the declared versions
    List(ListArgs),

    /// Encode a version to its wire bytes (hex)
    Encode(EncodeArgs),

    /// Decode a version from its wire bytes (hex)
    Decode(DecodeArgs),

    /// Show the version an index was created with, from a settings file
    IndexCreated(IndexCreatedArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Version strings such as 6.0.0-beta1 or 7.0.2 (empty means current)
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Encoded version ids such as 6040299
    #[arg(value_name = "ID", required = true, allow_negative_numbers = true)]
    pub ids: Vec<i32>,
}

/// Arguments for the compat command
#[derive(Parser, Debug)]
pub struct CompatArgs {
    /// First version
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second version
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// Exit with an error when the versions are not compatible
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list versions of this major
    #[arg(short, long)]
    pub major: Option<u8>,

    /// Skip alphas, betas and release candidates
    #[arg(long)]
    pub releases: bool,
}

/// Arguments for the encode command
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Version string to encode
    #[arg(value_name = "VERSION")]
    pub input: String,
}

/// Arguments for the decode command
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Hex encoded wire bytes, optionally prefixed with 0x
    #[arg(value_name = "HEX")]
    pub hex: String,
}

/// Arguments for the index-created command
#[derive(Parser, Debug)]
pub struct IndexCreatedArgs {
    /// Path to the index settings file (JSON or YAML)
    #[arg(value_name = "SETTINGS_FILE")]
    pub settings_file: PathBuf,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self, configured: bool) -> bool {
        configured && !self.no_color && std::io::stdout().is_terminal()
    }

    /// The requested output format, falling back to the configured one
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        self.output.unwrap_or(configured)
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
