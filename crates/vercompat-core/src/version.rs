//! Release version value
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use crate::codec::{self, BuildKind};
use crate::companion::CompanionVersion;
use crate::compatibility::CompatibilityResolver;
use crate::error::Result;
use crate::registry::VersionRegistry;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A release version together with its companion format version.
///
/// Identity and order are defined by [`Version::id`] alone: two values
/// with the same id are interchangeable.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    id: i32,
    major: u8,
    minor: u8,
    revision: u8,
    build: u8,
    companion: CompanionVersion,
}

impl Version {
    /// Build a version from a packed id and its companion.
    ///
    /// This does not consult the registry; use [`Version::from_id`] to
    /// resolve an arbitrary id.
    pub const fn declare(id: i32, companion: CompanionVersion) -> Self {
        let parts = codec::unpack(id);
        Self {
            id,
            major: parts.major,
            minor: parts.minor,
            revision: parts.revision,
            build: parts.build,
            companion,
        }
    }

    /// Resolve an id against the process-wide registry
    pub fn from_id(id: i32) -> Version {
        VersionRegistry::global().resolve(id)
    }

    /// Parse a version string against the process-wide registry.
    ///
    /// An empty string yields [`crate::CURRENT`].
    pub fn parse(input: &str) -> Result<Version> {
        VersionRegistry::global().parse(input)
    }

    pub const fn id(&self) -> i32 {
        self.id
    }

    pub const fn major(&self) -> u8 {
        self.major
    }

    pub const fn minor(&self) -> u8 {
        self.minor
    }

    pub const fn revision(&self) -> u8 {
        self.revision
    }

    pub const fn build(&self) -> u8 {
        self.build
    }

    pub const fn companion(&self) -> CompanionVersion {
        self.companion
    }

    /// What the build indicator means for this version
    pub const fn build_kind(&self) -> BuildKind {
        codec::classify(self.major, self.build)
    }

    pub fn after(&self, other: &Version) -> bool {
        other.id < self.id
    }

    pub fn on_or_after(&self, other: &Version) -> bool {
        other.id <= self.id
    }

    pub fn before(&self, other: &Version) -> bool {
        other.id > self.id
    }

    pub fn on_or_before(&self, other: &Version) -> bool {
        other.id >= self.id
    }

    /// Alpha builds only exist from 5.0 onwards
    pub fn is_alpha(&self) -> bool {
        matches!(self.build_kind(), BuildKind::Alpha(_))
    }

    pub fn is_beta(&self) -> bool {
        matches!(self.build_kind(), BuildKind::Beta(_))
    }

    pub fn is_rc(&self) -> bool {
        matches!(self.build_kind(), BuildKind::ReleaseCandidate(_))
    }

    pub fn is_release(&self) -> bool {
        self.build == codec::RELEASE_BUILD
    }

    /// Oldest version a node running this version can talk to
    pub fn minimum_compatibility_version(&self) -> Version {
        CompatibilityResolver::global().minimum_compatibility_version(self)
    }

    /// Oldest index format this version can still read
    pub fn minimum_index_compatibility_version(&self) -> Version {
        CompatibilityResolver::global().minimum_index_compatibility_version(self)
    }

    /// Whether nodes running this version and `other` may interoperate
    pub fn is_compatible(&self, other: &Version) -> bool {
        CompatibilityResolver::global().is_compatible(self, other)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl FromStr for Version {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
