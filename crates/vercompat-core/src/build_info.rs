//! Build metadata and the process version banner
//!
//! Build metadata is baked in at compile time from the
//! `VERCOMPAT_BUILD_FLAVOR`, `VERCOMPAT_BUILD_TYPE`, `VERCOMPAT_BUILD_HASH`
//! and `VERCOMPAT_BUILD_DATE` environment variables.

use crate::companion::CompanionVersion;
use crate::declared::CURRENT;
use serde::Serialize;
use std::fmt;

const UNKNOWN: &str = "Unknown";
const SHORT_HASH_LEN: usize = 7;

/// Distribution flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Default,
    Oss,
    Unknown,
}

impl Flavor {
    pub fn display_name(&self) -> &'static str {
        match self {
            Flavor::Default => "default",
            Flavor::Oss => "oss",
            Flavor::Unknown => "unknown",
        }
    }

    /// Anything unrecognized maps to [`Flavor::Unknown`]
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "default" => Flavor::Default,
            "oss" => Flavor::Oss,
            _ => Flavor::Unknown,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Packaging the binary was shipped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Deb,
    Docker,
    Rpm,
    Tar,
    Zip,
    Unknown,
}

impl BuildType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildType::Deb => "deb",
            BuildType::Docker => "docker",
            BuildType::Rpm => "rpm",
            BuildType::Tar => "tar",
            BuildType::Zip => "zip",
            BuildType::Unknown => "unknown",
        }
    }

    /// Anything unrecognized maps to [`BuildType::Unknown`]
    pub fn from_display_name(name: &str) -> Self {
        match name {
            "deb" => BuildType::Deb,
            "docker" => BuildType::Docker,
            "rpm" => BuildType::Rpm,
            "tar" => BuildType::Tar,
            "zip" => BuildType::Zip,
            _ => BuildType::Unknown,
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Metadata describing how this binary was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub flavor: Flavor,
    pub build_type: BuildType,
    pub hash: String,
    pub date: String,
}

impl BuildInfo {
    /// Metadata of the running binary
    pub fn current() -> Self {
        Self {
            flavor: option_env!("VERCOMPAT_BUILD_FLAVOR")
                .map(Flavor::from_display_name)
                .unwrap_or(Flavor::Default),
            build_type: option_env!("VERCOMPAT_BUILD_TYPE")
                .map(BuildType::from_display_name)
                .unwrap_or(BuildType::Unknown),
            hash: option_env!("VERCOMPAT_BUILD_HASH")
                .unwrap_or(UNKNOWN)
                .to_string(),
            date: option_env!("VERCOMPAT_BUILD_DATE")
                .unwrap_or(UNKNOWN)
                .to_string(),
        }
    }

    /// First seven characters of the commit hash
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((end, _)) => &self.hash[..end],
            None => &self.hash,
        }
    }
}

/// One-line description of the running release
pub fn banner(info: &BuildInfo) -> String {
    format!(
        "Version: {}, Build: {}/{}/{}/{}, Companion: {}",
        CURRENT,
        info.flavor,
        info.build_type,
        info.short_hash(),
        info.date,
        CompanionVersion::LATEST
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(hash: &str) -> BuildInfo {
        BuildInfo {
            flavor: Flavor::Oss,
            build_type: BuildType::Tar,
            hash: hash.to_string(),
            date: "2019-05-15T20:16:49.085Z".to_string(),
        }
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner(&info("8f0ff2b8c3e4")),
            "Version: 7.0.2, Build: oss/tar/8f0ff2b/2019-05-15T20:16:49.085Z, Companion: 8.0.0"
        );
    }

    #[test]
    fn test_short_hash_of_short_input() {
        assert_eq!(info("abc").short_hash(), "abc");
        assert_eq!(info(UNKNOWN).short_hash(), UNKNOWN);
        assert_eq!(info("0123456").short_hash(), "0123456");
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(Flavor::from_display_name("oss"), Flavor::Oss);
        assert_eq!(Flavor::from_display_name("OSS"), Flavor::Unknown);
        assert_eq!(BuildType::from_display_name("docker"), BuildType::Docker);
        assert_eq!(BuildType::from_display_name("msi"), BuildType::Unknown);
    }

    #[test]
    fn test_current_is_well_formed() {
        let current = BuildInfo::current();
        assert!(!current.hash.is_empty());
        assert!(banner(&current).starts_with("Version: 7.0.2, Build: "));
    }
}
