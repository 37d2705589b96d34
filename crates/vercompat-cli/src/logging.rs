//! Logging utilities for the vercompat CLI
//!
//! This module provides:
//! - Structured logging setup on stderr
//! - Multiple output formats (compact, full, JSON)
//! - Performance timing spans

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use tracing::{field, Span};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Include timestamps
    pub timestamps: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Include span close events
    pub span_events: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            timestamps: true,
            thread_ids: false,
            source_location: false,
            span_events: false,
        }
    }
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "full" => Some(LogFormat::Full),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
                config.span_events = true;
            }
        }

        config
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // RUST_LOG takes precedence
        if let Some(rust_log) = lookup("RUST_LOG") {
            self.level = rust_log;
        }

        // VERCOMPAT_LOG_FORMAT
        if let Some(format) = lookup("VERCOMPAT_LOG_FORMAT") {
            match LogFormat::from_name(&format) {
                Some(parsed) => self.format = parsed,
                None => eprintln!("Warning: invalid log format '{}', using default", format),
            }
        }

        // VERCOMPAT_LOG_CONSOLE
        if let Some(console) = lookup("VERCOMPAT_LOG_CONSOLE") {
            self.console = console.to_lowercase() == "true" || console == "1";
        }
    }
}

/// Initialize the global logging system.
///
/// Logs always go to stderr so that stdout stays parseable.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    if !config.console {
        return Ok(());
    }

    let env_filter = create_env_filter(&config)?;
    let span_events = if config.span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let ansi = std::io::stderr().is_terminal();

    // Use different subscriber based on format to avoid type conflicts
    let installed = match (config.format, config.timestamps) {
        (LogFormat::Compact, true) => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .compact()
                .finish(),
        ),
        (LogFormat::Compact, false) => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .without_time()
                .compact()
                .finish(),
        ),
        (LogFormat::Json, _) => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(false) // JSON should not have ANSI codes
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .json()
                .finish(),
        ),
        (LogFormat::Full, _) => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .finish(),
        ),
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging system initialized");

    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", config.level, e)))
}

/// Create a span for a timed operation
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::span::EnteredSpan;

    /// A timer that automatically logs duration when dropped.
    ///
    /// The operation span stays entered while the timer lives, so events
    /// emitted meanwhile are recorded inside it.
    pub struct Timer {
        start: Instant,
        span: EnteredSpan,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, None).entered(),
                operation: operation.to_string(),
            }
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, Some(details)).entered(),
                operation: operation.to_string(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed (auto-timed)"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_logging_config_from_verbosity() {
        let config = LoggingConfig::from_verbosity(0);
        assert_eq!(config.level, "warn");
        assert!(!config.source_location);

        let config = LoggingConfig::from_verbosity(2);
        assert_eq!(config.level, "debug");
        assert!(config.source_location);

        let config = LoggingConfig::from_verbosity(3);
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Full);
        assert!(config.thread_ids);
        assert!(config.span_events);
    }

    #[test]
    fn test_merge_with_vars() {
        let vars: HashMap<&str, &str> = [
            ("RUST_LOG", "vercompat_core=trace"),
            ("VERCOMPAT_LOG_FORMAT", "JSON"),
            ("VERCOMPAT_LOG_CONSOLE", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = LoggingConfig::default();
        config.merge_with_vars(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.level, "vercompat_core=trace");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.console);
    }

    #[test]
    fn test_invalid_format_keeps_default() {
        let mut config = LoggingConfig::default();
        config.merge_with_vars(|name| (name == "VERCOMPAT_LOG_FORMAT").then(|| "xml".to_string()));
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = LoggingConfig {
            level: "vercompat=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        assert!(create_env_filter(&config).is_err());
    }

    #[test]
    fn test_timer_drops_without_subscriber() {
        let timer = timing::Timer::with_details("parse", "6.0.0");
        drop(timer);
    }

    #[test]
    fn test_timer_enters_its_span() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::sink)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let timer = timing::Timer::new("encode");
            let current = Span::current();
            assert_eq!(current.metadata().map(|m| m.name()), Some("operation"));

            drop(timer);
            assert!(Span::current().metadata().is_none());
        });
    }
}
