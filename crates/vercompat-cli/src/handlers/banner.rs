//! Banner command handler

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{Banner, OutputWriter};
use vercompat_core::{banner, BuildInfo, CompanionVersion, CURRENT};

/// Handle the banner command
pub fn handle_banner(output: &mut OutputWriter) -> Result<()> {
    let build = BuildInfo::current();
    let line = banner(&build);

    if output.format() == OutputFormat::Human {
        return output.writeln(&line);
    }

    output.data(&Banner {
        version: CURRENT,
        companion: CompanionVersion::LATEST,
        build,
        banner: line,
    })
}
