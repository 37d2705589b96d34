//! Compat command handler

use crate::cli::CompatArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use tracing::{info, instrument};
use vercompat_core::{CompatibilityResolver, Version};

/// Handle the compat command
#[instrument(skip_all, fields(left = %args.left, right = %args.right))]
pub fn handle_compat(args: CompatArgs, output: &mut OutputWriter) -> Result<()> {
    let left = Version::parse(&args.left)?;
    let right = Version::parse(&args.right)?;

    let report = CompatibilityResolver::global().report(&left, &right);
    info!(compatible = report.compatible, "Compared versions");
    output.compatibility_report(&report)?;

    if args.check && !report.compatible {
        return Err(Error::Incompatible {
            left: left.to_string(),
            right: right.to_string(),
        });
    }
    Ok(())
}
