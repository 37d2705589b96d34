//! Vercompat Core - Release version identifiers and compatibility floors
//!
//! This crate models the release versions of a distributed search server,
//! each paired with the version of the embedded index library it shipped
//! with, and answers which versions may talk to each other and which
//! on-disk formats a release must still read.
//!
//! # Main Components
//!
//! - **Version**: Immutable value packed into a single 32-bit id
//! - **VersionRegistry**: Process-wide catalog of declared versions
//! - **Resolution**: Undeclared ids get a companion inferred from their neighbours
//! - **String Format**: Parse and render `MAJOR.MINOR.REVISION[-QUALIFIER]`
//! - **Compatibility**: Wire and index compatibility floors
//! - **Wire and Settings**: Variable-length wire encoding and index settings lookup
//!
//! # Example
//!
//! ```
//! use vercompat_core::{Version, V_6_7_0, V_7_0_0};
//!
//! let version = Version::parse("7.0.0").unwrap();
//! assert_eq!(version, V_7_0_0);
//! assert_eq!(version.minimum_compatibility_version(), V_6_7_0);
//! assert!(version.is_compatible(&V_6_7_0));
//! ```

pub mod build_info;
pub mod codec;
pub mod companion;
pub mod compatibility;
pub mod declared;
pub mod error;
pub mod format;
pub mod registry;
mod resolver;
pub mod settings;
pub mod version;
pub mod wire;

// Re-export main types for convenience
pub use build_info::{banner, BuildInfo, BuildType, Flavor};
pub use codec::BuildKind;
pub use companion::CompanionVersion;
pub use compatibility::{CompatibilityReport, CompatibilityResolver, FloorOverride, FloorRule};
pub use declared::*;
pub use error::{Error, Result};
pub use registry::VersionRegistry;
pub use settings::{index_created, IndexSettings, SETTING_INDEX_UUID, SETTING_VERSION_CREATED};
pub use version::Version;
pub use wire::{read_version, write_version};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
