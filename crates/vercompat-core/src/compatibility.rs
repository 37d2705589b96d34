//! Version compatibility floors
//!
//! Two floors are computed for every version: the oldest version a node can
//! talk to over the wire, and the oldest index format it can still read.
//! Historical exceptions live in override tables that are consulted before
//! the general rules.
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use crate::codec;
use crate::declared::V_6_0_0_BETA1;
use crate::registry::VersionRegistry;
use crate::version::Version;
use serde::Serialize;

/// How an override computes a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorRule {
    /// The floor is the version with this id, returned as is
    Fixed(i32),
    /// The floor is `min(v, <major>.0.0)` for this backward major
    TargetMajor(i32),
}

/// A floor rule that applies to every version of one major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorOverride {
    pub major: u8,
    pub rule: FloorRule,
}

/// Wire compatibility exceptions.
///
/// 6.x keeps talking to 5.6 even though no 5.x version is declared anymore.
pub const WIRE_FLOOR_OVERRIDES: &[FloorOverride] = &[FloorOverride {
    major: 6,
    rule: FloorRule::Fixed(codec::release_id(5, 6, 0)),
}];

/// Index compatibility exceptions.
///
/// Majors 3 and 4 were never released, so 5.x reads back to 2.x. 7.x reads
/// everything from the first 6.0 beta.
pub const INDEX_FLOOR_OVERRIDES: &[FloorOverride] = &[
    FloorOverride {
        major: 5,
        rule: FloorRule::TargetMajor(2),
    },
    FloorOverride {
        major: 7,
        rule: FloorRule::Fixed(V_6_0_0_BETA1.id()),
    },
];

/// First major whose wire floor is derived from the declared versions
const FIRST_SERIES_FLOOR_MAJOR: u8 = 7;

/// Computes compatibility floors against a registry
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityResolver<'a> {
    registry: &'a VersionRegistry,
    wire_overrides: &'a [FloorOverride],
    index_overrides: &'a [FloorOverride],
}

impl<'a> CompatibilityResolver<'a> {
    /// Create a resolver with the built-in override tables
    pub fn new(registry: &'a VersionRegistry) -> Self {
        Self::with_overrides(registry, WIRE_FLOOR_OVERRIDES, INDEX_FLOOR_OVERRIDES)
    }

    /// Create a resolver with custom override tables
    pub fn with_overrides(
        registry: &'a VersionRegistry,
        wire_overrides: &'a [FloorOverride],
        index_overrides: &'a [FloorOverride],
    ) -> Self {
        Self {
            registry,
            wire_overrides,
            index_overrides,
        }
    }

    /// Get the registry floors are resolved against
    pub fn registry(&self) -> &'a VersionRegistry {
        self.registry
    }

    /// Returns the minimum version a node needs to communicate with a node
    /// running `version`.
    ///
    /// From 7.0 onwards this is the earliest patch release of the most
    /// recent minor series of the previous major, not its latest patch.
    pub fn minimum_compatibility_version(&self, version: &Version) -> Version {
        if let Some(rule) = find_override(self.wire_overrides, version.major()) {
            return self.apply(version, rule);
        }
        if version.major() >= FIRST_SERIES_FLOOR_MAJOR {
            return self.previous_series_floor(version).unwrap_or(*version);
        }
        self.apply(version, FloorRule::TargetMajor(i32::from(version.major())))
    }

    /// Returns the oldest index format version `version` can still read.
    ///
    /// The same floor applies to other file formats written by a node, such
    /// as transaction logs and cluster state.
    pub fn minimum_index_compatibility_version(&self, version: &Version) -> Version {
        let rule = find_override(self.index_overrides, version.major())
            .unwrap_or(FloorRule::TargetMajor(i32::from(version.major()) - 1));
        self.apply(version, rule)
    }

    /// Whether nodes running `a` and `b` may interoperate
    pub fn is_compatible(&self, a: &Version, b: &Version) -> bool {
        let compatible = a.on_or_after(&self.minimum_compatibility_version(b))
            && b.on_or_after(&self.minimum_compatibility_version(a));
        debug_assert!(
            !compatible || a.major().abs_diff(b.major()) <= 1,
            "compatible versions {a} and {b} are more than one major apart"
        );
        compatible
    }

    /// Both floors of both versions plus the verdict
    pub fn report(&self, a: &Version, b: &Version) -> CompatibilityReport {
        CompatibilityReport {
            left: *a,
            right: *b,
            left_minimum_compatibility: self.minimum_compatibility_version(a),
            right_minimum_compatibility: self.minimum_compatibility_version(b),
            left_minimum_index_compatibility: self.minimum_index_compatibility_version(a),
            right_minimum_index_compatibility: self.minimum_index_compatibility_version(b),
            compatible: self.is_compatible(a, b),
        }
    }

    fn apply(&self, version: &Version, rule: FloorRule) -> Version {
        match rule {
            FloorRule::Fixed(id) => self.registry.resolve(id),
            FloorRule::TargetMajor(major) => {
                let floor = self.registry.resolve(codec::release_id(major, 0, 0));
                (*version).min(floor)
            }
        }
    }

    /// Walk the registry downwards and keep the last qualifying release of
    /// the newest minor series of the previous major.
    fn previous_series_floor(&self, version: &Version) -> Option<Version> {
        let previous_major = version.major() - 1;
        let mut floor: Option<Version> = None;
        for candidate in self.registry.iter().rev() {
            let qualifies = candidate.major() == previous_major
                && candidate.is_release()
                && version.after(candidate);
            if !qualifies {
                continue;
            }
            if let Some(held) = floor {
                if candidate.minor() < held.minor() {
                    break;
                }
            }
            floor = Some(*candidate);
        }
        floor
    }
}

impl CompatibilityResolver<'static> {
    /// Resolver bound to the process-wide registry
    pub fn global() -> Self {
        Self::new(VersionRegistry::global())
    }
}

fn find_override(overrides: &[FloorOverride], major: u8) -> Option<FloorRule> {
    overrides
        .iter()
        .find(|entry| entry.major == major)
        .map(|entry| entry.rule)
}

/// Outcome of comparing two versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub left: Version,
    pub right: Version,
    pub left_minimum_compatibility: Version,
    pub right_minimum_compatibility: Version,
    pub left_minimum_index_compatibility: Version,
    pub right_minimum_index_compatibility: Version,
    pub compatible: bool,
}
