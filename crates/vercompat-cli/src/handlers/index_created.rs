//! Index-created command handler

use super::utils::load_settings;
use crate::cli::IndexCreatedArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{IndexCreated, OutputWriter, VersionDetails};
use tracing::{info, instrument};
use vercompat_core::{index_created, CompatibilityResolver};

/// Handle the index-created command
#[instrument(skip_all, fields(file = %args.settings_file.display()))]
pub fn handle_index_created(args: IndexCreatedArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details(
        "index_created",
        &format!("file: {}", args.settings_file.display()),
    );

    let settings = load_settings(&args.settings_file)?;
    let created = index_created(&settings)?;
    info!(id = created.id(), "Resolved index creation version");

    let resolver = CompatibilityResolver::global();
    let view = IndexCreated {
        index_uuid: settings.index_uuid().to_string(),
        created: VersionDetails::new(created, &resolver),
    };

    match output.format() {
        crate::cli::OutputFormat::Human => {
            output.writeln(&format!("Index {}", view.index_uuid))?;
            output.version_details(std::slice::from_ref(&view.created))
        }
        _ => output.data(&view),
    }
}
