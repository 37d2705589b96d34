//! Companion format version of the bundled index library
//!
//! Every release ships with one version of the embedded indexing library.
//! Its on-disk and wire format version travels with the release version; we
//! only store and order it.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format version of the embedded index library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanionVersion {
    major: u8,
    minor: u8,
    bugfix: u8,
}

impl CompanionVersion {
    /// Companion version bundled with the running release
    pub const LATEST: CompanionVersion = LUCENE_8_0_0;

    /// Build a companion version from its three components
    pub const fn from_bits(major: u8, minor: u8, bugfix: u8) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }

    pub const fn major(&self) -> u8 {
        self.major
    }

    pub const fn minor(&self) -> u8 {
        self.minor
    }

    pub const fn bugfix(&self) -> u8 {
        self.bugfix
    }

    /// The `major.0.0` companion one major before this one
    pub const fn previous_major(&self) -> Self {
        Self::from_bits(self.major.saturating_sub(1), 0, 0)
    }

    /// Const equality, usable in compile-time assertions
    pub const fn same_as(&self, other: &CompanionVersion) -> bool {
        self.major == other.major && self.minor == other.minor && self.bugfix == other.bugfix
    }

    /// Parse `major.minor.bugfix`
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split('.');
        let mut next = |name: &str| -> Result<u8> {
            let part = parts
                .next()
                .ok_or_else(|| Error::malformed(input, format!("missing {name} component")))?;
            part.parse()
                .map_err(|_| Error::malformed(input, format!("invalid {name} component: {part}")))
        };
        let major = next("major")?;
        let minor = next("minor")?;
        let bugfix = next("bugfix")?;
        if parts.next().is_some() {
            return Err(Error::malformed(input, "expected format major.minor.bugfix"));
        }
        Ok(Self::from_bits(major, minor, bugfix))
    }
}

pub const LUCENE_7_0_0: CompanionVersion = CompanionVersion::from_bits(7, 0, 0);
pub const LUCENE_7_0_1: CompanionVersion = CompanionVersion::from_bits(7, 0, 1);
pub const LUCENE_7_1_0: CompanionVersion = CompanionVersion::from_bits(7, 1, 0);
pub const LUCENE_7_2_1: CompanionVersion = CompanionVersion::from_bits(7, 2, 1);
pub const LUCENE_7_3_1: CompanionVersion = CompanionVersion::from_bits(7, 3, 1);
pub const LUCENE_7_4_0: CompanionVersion = CompanionVersion::from_bits(7, 4, 0);
pub const LUCENE_7_5_0: CompanionVersion = CompanionVersion::from_bits(7, 5, 0);
pub const LUCENE_7_6_0: CompanionVersion = CompanionVersion::from_bits(7, 6, 0);
pub const LUCENE_7_7_0: CompanionVersion = CompanionVersion::from_bits(7, 7, 0);
pub const LUCENE_8_0_0: CompanionVersion = CompanionVersion::from_bits(8, 0, 0);

impl fmt::Display for CompanionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

impl FromStr for CompanionVersion {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CompanionVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CompanionVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
