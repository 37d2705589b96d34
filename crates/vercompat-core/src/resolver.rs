//! Resolution of arbitrary ids to full versions
//!
//! Declared ids resolve to their declaration. Any other id gets a
//! synthesized version whose companion is inferred from its neighbours in
//! the registry: patch releases never bump the companion format, so the
//! nearest declared predecessor is the best guess. Ids older than anything
//! declared fall back to one companion major below the oldest known one.

use crate::companion::CompanionVersion;
use crate::declared::{V_EMPTY, V_EMPTY_ID};
use crate::registry::VersionRegistry;
use crate::version::Version;

impl VersionRegistry {
    /// Resolve an id, declared or not, to a version
    pub fn resolve(&self, id: i32) -> Version {
        if id == V_EMPTY_ID {
            return V_EMPTY;
        }
        if let Some(declared) = self.lookup_exact(id) {
            return declared;
        }

        let companion = self.infer_companion(id);
        tracing::trace!(id, %companion, "Synthesized undeclared version");
        Version::declare(id, companion)
    }

    fn infer_companion(&self, id: i32) -> CompanionVersion {
        let versions = self.versions();
        let insertion = match versions.binary_search_by_key(&id, Version::id) {
            Ok(position) => {
                debug_assert!(
                    false,
                    "version id [{id}] is declared but was missed by the exact lookup"
                );
                tracing::error!(id, "Declared version missed by the exact lookup");
                return versions[position].companion();
            }
            Err(insertion) => insertion,
        };

        match insertion.checked_sub(1) {
            Some(predecessor) => versions[predecessor].companion(),
            None => self.oldest().companion().previous_major(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::*;
    use crate::declared::*;

    #[test]
    fn test_declared_ids_resolve_to_their_declaration() {
        let registry = VersionRegistry::global();
        for declared in DECLARED_VERSIONS {
            let resolved = registry.resolve(declared.id());
            assert_eq!(resolved, *declared);
            assert_eq!(resolved.companion(), declared.companion());
        }
    }

    #[test]
    fn test_empty_id_resolves_to_sentinel() {
        let resolved = VersionRegistry::global().resolve(0);
        assert_eq!(resolved, V_EMPTY);
        assert_eq!(resolved.companion(), CompanionVersion::LATEST);
    }

    #[test]
    fn test_unknown_patch_inherits_predecessor_companion() {
        let registry = VersionRegistry::global();
        assert_eq!(registry.resolve(6_010_599).companion(), LUCENE_7_1_0);
        assert_eq!(registry.resolve(6_070_499).companion(), LUCENE_7_7_0);
        assert_eq!(registry.resolve(7_000_399).companion(), LUCENE_8_0_0);
        // a prerelease slotted between two declarations takes the lower one
        assert_eq!(registry.resolve(6_000_053).companion(), LUCENE_7_0_1);
    }

    #[test]
    fn test_older_than_everything_steps_one_companion_major_down() {
        let registry = VersionRegistry::global();
        let old = registry.resolve(5_060_099);
        assert_eq!(old.id(), 5_060_099);
        assert_eq!(old.companion(), CompanionVersion::from_bits(6, 0, 0));
        assert_eq!(registry.resolve(2_000_099).companion(), CompanionVersion::from_bits(6, 0, 0));
    }

    #[test]
    fn test_custom_registry_fallback() {
        let registry = VersionRegistry::new([
            Version::declare(6_070_099, LUCENE_7_7_0),
            Version::declare(7_000_099, LUCENE_8_0_0),
        ])
        .unwrap();
        assert_eq!(registry.resolve(6_000_099).companion(), CompanionVersion::from_bits(6, 0, 0));
        assert_eq!(registry.resolve(6_080_099).companion(), LUCENE_7_7_0);
        assert_eq!(registry.resolve(8_000_099).companion(), LUCENE_8_0_0);
    }
}
