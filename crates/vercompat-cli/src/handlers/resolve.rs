//! Parse and resolve command handlers

use crate::cli::{ParseArgs, ResolveArgs};
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, VersionDetails};
use tracing::{debug, instrument};
use vercompat_core::{CompatibilityResolver, Version, VersionRegistry};

/// Handle the parse command
#[instrument(skip_all, fields(count = args.versions.len()))]
pub fn handle_parse(args: ParseArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("parse_versions");
    let resolver = CompatibilityResolver::global();

    let details = args
        .versions
        .iter()
        .map(|input| -> Result<VersionDetails> {
            let version = Version::parse(input)?;
            debug!(input = %input, id = version.id(), "Parsed version");
            Ok(VersionDetails::new(version, &resolver))
        })
        .collect::<Result<Vec<_>>>()?;

    output.version_details(&details)
}

/// Handle the resolve command
#[instrument(skip_all, fields(count = args.ids.len()))]
pub fn handle_resolve(args: ResolveArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("resolve_ids");
    let registry = VersionRegistry::global();
    let resolver = CompatibilityResolver::new(registry);

    let details: Vec<VersionDetails> = args
        .ids
        .iter()
        .map(|&id| VersionDetails::new(registry.resolve(id), &resolver))
        .collect();

    output.version_details(&details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;
    use crate::output::test_support::capture;

    #[test]
    fn test_parse_reports_floors() {
        let (mut output, captured) = capture(OutputFormat::Json);
        let args = ParseArgs {
            versions: vec!["6.1.0".to_string()],
        };
        handle_parse(args, &mut output).unwrap();

        let parsed = captured.json();
        let value = &parsed[0];
        assert_eq!(value["id"], 6_010_099);
        assert_eq!(value["companion"], "7.1.0");
        assert_eq!(value["minimum_compatibility"], "5.6.0");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let (mut output, captured) = capture(OutputFormat::Json);
        let args = ParseArgs {
            versions: vec!["6.0.0".to_string(), "7.0.0-beta1".to_string()],
        };
        let err = handle_parse(args, &mut output).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
        assert!(err.to_string().contains("[7.0.0-beta1]"));
        assert!(captured.contents().is_empty());
    }

    #[test]
    fn test_resolve_undeclared_and_empty() {
        let (mut output, captured) = capture(OutputFormat::Json);
        let args = ResolveArgs {
            ids: vec![6_050_599, 0],
        };
        handle_resolve(args, &mut output).unwrap();

        let value = captured.json();
        assert_eq!(value[0]["version"], "6.5.5");
        assert_eq!(value[0]["declared"], false);
        assert_eq!(value[0]["companion"], "7.5.0");
        assert_eq!(value[1]["id"], 0);
        assert_eq!(value[1]["companion"], "8.0.0");
    }

    #[test]
    fn test_resolve_human() {
        let (mut output, captured) = capture(OutputFormat::Human);
        let args = ResolveArgs { ids: vec![7_000_099] };
        handle_resolve(args, &mut output).unwrap();
        let contents = captured.contents();
        assert!(contents.starts_with("7.0.0\n"));
        assert!(contents.contains("Wire compatible from:   6.7.0"));
    }
}
