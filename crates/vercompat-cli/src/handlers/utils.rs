//! Shared utilities for command handlers

use crate::error::{Error, ErrorContext, Result};
use std::fs;
use std::path::Path;
use vercompat_core::IndexSettings;

/// Load index settings from a JSON or YAML file
pub fn load_settings(path: &Path) -> Result<IndexSettings> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    let settings = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })?
    };

    Ok(settings)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}
