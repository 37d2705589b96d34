//! List command handler

use crate::cli::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::output::{OutputWriter, VersionDetails};
use vercompat_core::{CompatibilityResolver, Version, VersionRegistry};

/// Handle the list command
pub fn handle_list(args: ListArgs, output: &mut OutputWriter) -> Result<()> {
    let registry = VersionRegistry::global();
    let selected: Vec<Version> = registry
        .iter()
        .copied()
        .filter(|v| args.major.map_or(true, |major| v.major() == major))
        .filter(|v| !args.releases || v.is_release())
        .collect();
    tracing::debug!(total = registry.len(), selected = selected.len(), "Listing versions");

    if output.format() == OutputFormat::Human {
        let rows = selected
            .iter()
            .map(|v| {
                vec![
                    v.to_string(),
                    v.id().to_string(),
                    v.build_kind().to_string(),
                    v.companion().to_string(),
                ]
            })
            .collect();
        return output.table(&["Version", "Id", "Kind", "Companion"], rows);
    }

    let resolver = CompatibilityResolver::new(registry);
    let details: Vec<VersionDetails> = selected
        .into_iter()
        .map(|v| VersionDetails::new(v, &resolver))
        .collect();
    output.data(&details)
}
