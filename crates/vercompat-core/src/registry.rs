//! Registry of declared release versions
//!
//! The registry is an immutable, id-sorted catalog. The process-wide
//! instance is built from [`DECLARED_VERSIONS`] on first use and never
//! changes afterwards, so every lookup after that is a plain read.
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use crate::declared::DECLARED_VERSIONS;
use crate::error::{Error, Result};
use crate::version::Version;
use std::collections::HashMap;
use std::sync::OnceLock;

static GLOBAL_REGISTRY: OnceLock<VersionRegistry> = OnceLock::new();

/// Sorted, deduplicated catalog of declared versions
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    versions: Vec<Version>,
    positions: HashMap<i32, usize>,
}

impl VersionRegistry {
    /// Build a registry from a set of declarations.
    ///
    /// Identical declarations collapse into one. Two declarations sharing an
    /// id with different companion versions are rejected.
    pub fn new<I>(declared: I) -> Result<Self>
    where
        I: IntoIterator<Item = Version>,
    {
        let mut sorted: Vec<Version> = declared.into_iter().collect();
        sorted.sort();

        let mut versions: Vec<Version> = Vec::with_capacity(sorted.len());
        for version in sorted {
            match versions.last().copied() {
                Some(last) if last.id() == version.id() => {
                    if last.companion() != version.companion() {
                        return Err(Error::ConflictingDeclaration {
                            id: version.id(),
                            existing: last.companion().to_string(),
                            conflicting: version.companion().to_string(),
                        });
                    }
                }
                _ => versions.push(version),
            }
        }

        if versions.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let positions = versions
            .iter()
            .enumerate()
            .map(|(position, version)| (version.id(), position))
            .collect();

        Ok(Self {
            versions,
            positions,
        })
    }

    /// The process-wide registry built from the declaration table
    pub fn global() -> &'static VersionRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            let registry = VersionRegistry::new(DECLARED_VERSIONS.iter().copied())
                .unwrap_or_else(|e| panic!("invalid version declaration table: {e}"));
            tracing::debug!(
                versions = registry.len(),
                oldest = %registry.oldest(),
                latest = %registry.latest(),
                "Built version registry"
            );
            registry
        })
    }

    /// Exact lookup of a declared id
    pub fn lookup_exact(&self, id: i32) -> Option<Version> {
        self.positions.get(&id).map(|&position| self.versions[position])
    }

    /// Whether the id is declared
    pub fn contains(&self, id: i32) -> bool {
        self.positions.contains_key(&id)
    }

    /// All declared versions in ascending id order
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false: construction rejects empty declaration sets
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Declared version with the smallest id
    pub fn oldest(&self) -> Version {
        self.versions[0]
    }

    /// Declared version with the largest id
    pub fn latest(&self) -> Version {
        self.versions[self.versions.len() - 1]
    }

    /// Declared releases (no prereleases) of one major, ascending
    pub fn releases_of_major(&self, major: u8) -> impl Iterator<Item = Version> + '_ {
        self.versions
            .iter()
            .copied()
            .filter(move |v| v.major() == major && v.is_release())
    }
}

impl<'a> IntoIterator for &'a VersionRegistry {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
