//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for version details,
//! compatibility reports and wire encodings.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;
use vercompat_core::{
    BuildInfo, CompanionVersion, CompatibilityReport, CompatibilityResolver, Version,
};

/// Everything worth knowing about one version
#[derive(Debug, Clone, Serialize)]
pub struct VersionDetails {
    pub version: Version,
    pub id: i32,
    pub kind: String,
    pub declared: bool,
    pub companion: CompanionVersion,
    pub minimum_compatibility: Version,
    pub minimum_index_compatibility: Version,
}

impl VersionDetails {
    pub fn new(version: Version, resolver: &CompatibilityResolver<'_>) -> Self {
        Self {
            version,
            id: version.id(),
            kind: version.build_kind().to_string(),
            declared: resolver.registry().contains(version.id()),
            companion: version.companion(),
            minimum_compatibility: resolver.minimum_compatibility_version(&version),
            minimum_index_compatibility: resolver.minimum_index_compatibility_version(&version),
        }
    }
}

/// Wire form of a version
#[derive(Debug, Clone, Serialize)]
pub struct WireEncoding {
    pub version: Version,
    pub id: i32,
    pub companion: CompanionVersion,
    pub hex: String,
    pub length: usize,
}

/// The version an index was created with
#[derive(Debug, Clone, Serialize)]
pub struct IndexCreated {
    pub index_uuid: String,
    pub created: VersionDetails,
}

/// Build metadata plus the rendered banner
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub version: Version,
    pub companion: CompanionVersion,
    pub build: BuildInfo,
    pub banner: String,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format details of one or more versions, as a sequence in machine formats
    fn format_version_details(&self, details: &[VersionDetails]) -> Result<String>;

    /// Format a compatibility report with its verdict
    fn format_compatibility_report(&self, report: &CompatibilityReport) -> Result<String>;

    /// Format a wire encoding
    fn format_wire_encoding(&self, encoding: &WireEncoding) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_version_details(&self, details: &[VersionDetails]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_version_details_human(details)),
            // Always a sequence, however many versions were asked for
            _ => self.format(&details),
        }
    }

    fn format_compatibility_report(&self, report: &CompatibilityReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_compatibility_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_wire_encoding(&self, encoding: &WireEncoding) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_wire_encoding_human(encoding)),
            _ => self.format(encoding),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.emit(&formatted)
    }

    /// Write version details with specialized formatting
    pub fn version_details(&mut self, details: &[VersionDetails]) -> Result<()> {
        let formatted = self.format.format_version_details(details)?;
        self.emit(&formatted)
    }

    /// Write a compatibility report with specialized formatting
    pub fn compatibility_report(&mut self, report: &CompatibilityReport) -> Result<()> {
        let formatted = self.format.format_compatibility_report(report)?;
        self.emit(&formatted)?;
        if report.compatible {
            self.success("compatible")
        } else {
            self.warning("not compatible")
        }
    }

    /// Write a wire encoding with specialized formatting
    pub fn wire_encoding(&mut self, encoding: &WireEncoding) -> Result<()> {
        let formatted = self.format.format_wire_encoding(encoding)?;
        self.emit(&formatted)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let header_row = pad_row(headers.iter().copied(), &widths);
        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in &rows {
            self.writeln(&pad_row(row.iter().map(String::as_str), &widths))?;
        }

        Ok(())
    }

    /// Write formatted output terminated by exactly one newline
    fn emit(&mut self, formatted: &str) -> Result<()> {
        self.writeln(formatted.trim_end_matches('\n'))
    }
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(width) => format!("{:width$}", cell, width = width),
            None => cell.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" │ ")
        .trim_end()
        .to_string()
}

/// Format version details for human reading
fn format_version_details_human(details: &[VersionDetails]) -> String {
    let mut output = String::new();

    for (i, detail) in details.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", detail.version));
        output.push_str(&format!("  Id:                     {}\n", detail.id));
        output.push_str(&format!("  Kind:                   {}\n", detail.kind));
        output.push_str(&format!(
            "  Declared:               {}\n",
            if detail.declared { "yes" } else { "no" }
        ));
        output.push_str(&format!("  Companion:              {}\n", detail.companion));
        output.push_str(&format!(
            "  Wire compatible from:   {}\n",
            detail.minimum_compatibility
        ));
        output.push_str(&format!(
            "  Index compatible from:  {}\n",
            detail.minimum_index_compatibility
        ));
    }

    output
}

/// Format a compatibility report for human reading
fn format_compatibility_report_human(report: &CompatibilityReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} <-> {}\n", report.left, report.right));
    output.push_str(&format!(
        "  {}: wire floor {}, index floor {}\n",
        report.left, report.left_minimum_compatibility, report.left_minimum_index_compatibility
    ));
    output.push_str(&format!(
        "  {}: wire floor {}, index floor {}\n",
        report.right, report.right_minimum_compatibility, report.right_minimum_index_compatibility
    ));

    output
}

/// Format a wire encoding for human reading
fn format_wire_encoding_human(encoding: &WireEncoding) -> String {
    format!(
        "{} (id {}, companion {}): {} [{} byte(s)]",
        encoding.version, encoding.id, encoding.companion, encoding.hex, encoding.length
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cli::OutputFormat;
    use crate::output::OutputWriter;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// Writer that keeps everything written to it for inspection
    #[derive(Clone, Default)]
    pub struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }

        pub fn json(&self) -> serde_json::Value {
            serde_json::from_str(&self.contents()).unwrap()
        }
    }

    pub fn capture(format: OutputFormat) -> (OutputWriter, Captured) {
        let captured = Captured::default();
        let writer = OutputWriter::with_writer(format, false, false, Box::new(captured.clone()));
        (writer, captured)
    }
}
