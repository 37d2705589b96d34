//! Index settings lookup
//!
//! Index settings are a flat string map. The version an index was created
//! with is stored under [`SETTING_VERSION_CREATED`] as an encoded id.

use crate::declared::V_EMPTY;
use crate::error::{Error, Result};
use crate::registry::VersionRegistry;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key holding the encoded id of the version an index was created with
pub const SETTING_VERSION_CREATED: &str = "index.version.created";
/// Key holding the index UUID
pub const SETTING_INDEX_UUID: &str = "index.uuid";
/// Placeholder reported when an index has no UUID
pub const INDEX_UUID_NA_VALUE: &str = "_na_";

/// Flat key/value settings of one index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexSettings {
    values: BTreeMap<String, String>,
}

impl IndexSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Read an encoded version id.
    ///
    /// An absent key reads as [`V_EMPTY`].
    pub fn version(&self, key: &str) -> Result<Version> {
        self.version_with(VersionRegistry::global(), key)
    }

    /// Like [`IndexSettings::version`], resolving against `registry`
    pub fn version_with(&self, registry: &VersionRegistry, key: &str) -> Result<Version> {
        match self.get(key) {
            None => Ok(V_EMPTY),
            Some(raw) => {
                let id: i32 = raw.trim().parse().map_err(|_| Error::InvalidSetting {
                    key: key.to_string(),
                    value: raw.to_string(),
                })?;
                Ok(registry.resolve(id))
            }
        }
    }

    /// UUID of the index, or [`INDEX_UUID_NA_VALUE`]
    pub fn index_uuid(&self) -> &str {
        self.get(SETTING_INDEX_UUID).unwrap_or(INDEX_UUID_NA_VALUE)
    }
}

impl FromIterator<(String, String)> for IndexSettings {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Return the version an index was created with.
///
/// Fails with [`Error::MissingVersion`] when the settings carry no
/// [`SETTING_VERSION_CREATED`] value.
pub fn index_created(settings: &IndexSettings) -> Result<Version> {
    let version = settings.version(SETTING_VERSION_CREATED)?;
    if version == V_EMPTY {
        return Err(Error::missing_version(
            SETTING_VERSION_CREATED,
            settings.index_uuid(),
        ));
    }
    Ok(version)
}
