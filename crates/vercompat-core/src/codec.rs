//! Packed version id codec
//!
//! A version id is the decimal packing `XXYYZZAA`: two digits each for
//! major, minor and revision, followed by a two digit build indicator.
//! Build indicators below 25 are alphas (since 5.0), below 50 are betas,
//! below 99 are release candidates and 99 is the release itself. The packing
//! keeps prereleases ordered before their release, so plain integer
//! comparison of ids is the version order.
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use std::fmt;

/// Multiplier of the major field
pub const MAJOR_FACTOR: i32 = 1_000_000;
/// Multiplier of the minor field
pub const MINOR_FACTOR: i32 = 10_000;
/// Multiplier of the revision field
pub const REVISION_FACTOR: i32 = 100;
/// Largest value any packed field may hold
pub const MAX_FIELD: u8 = 99;

/// Build indicator of a release
pub const RELEASE_BUILD: u8 = 99;
/// First build indicator used by betas from 5.0 onwards
pub const BETA_OFFSET: u8 = 25;
/// First build indicator used by release candidates
pub const RC_OFFSET: u8 = 50;
/// First major that knows about alpha builds
pub const FIRST_ALPHA_MAJOR: u8 = 5;

/// The unpacked digit groups of an id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parts {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
    pub build: u8,
}

/// Pack the four fields into an id without range checks.
///
/// Callers must keep every field within `0..=99`; use [`pack`] for
/// untrusted input.
pub const fn pack_unchecked(major: u8, minor: u8, revision: u8, build: u8) -> i32 {
    major as i32 * MAJOR_FACTOR
        + minor as i32 * MINOR_FACTOR
        + revision as i32 * REVISION_FACTOR
        + build as i32
}

/// Pack the four fields into an id, rejecting fields above 99
pub fn pack(major: u8, minor: u8, revision: u8, build: u8) -> Result<i32> {
    for (name, value) in [
        ("major", major),
        ("minor", minor),
        ("revision", revision),
        ("build", build),
    ] {
        if value > MAX_FIELD {
            return Err(Error::malformed(
                format!("{major}.{minor}.{revision}/{build}"),
                format!("{name} must be between 0 and {MAX_FIELD} but was {value}"),
            ));
        }
    }
    Ok(pack_unchecked(major, minor, revision, build))
}

/// Split an id into its digit groups.
///
/// Each group is truncated to a byte the same way for every id, so even
/// out-of-range ids decode deterministically.
pub const fn unpack(id: i32) -> Parts {
    Parts {
        major: ((id / MAJOR_FACTOR) % 100) as u8,
        minor: ((id / MINOR_FACTOR) % 100) as u8,
        revision: ((id / REVISION_FACTOR) % 100) as u8,
        build: (id % 100) as u8,
    }
}

/// Id of the release `major.minor.revision`, computed in `i32` so that
/// callers may step below major 0
pub const fn release_id(major: i32, minor: i32, revision: i32) -> i32 {
    major * MAJOR_FACTOR + minor * MINOR_FACTOR + revision * REVISION_FACTOR + RELEASE_BUILD as i32
}

/// What a build indicator means for a given major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildKind {
    /// Alpha build with its number
    Alpha(u8),
    /// Beta build with its number
    Beta(u8),
    /// Release candidate with its number
    ReleaseCandidate(u8),
    /// Final release
    Release,
}

/// Classify a build indicator.
///
/// Majors before 5 have no alphas: every indicator below 50 is a beta and
/// its number is the indicator itself.
pub const fn classify(major: u8, build: u8) -> BuildKind {
    if major < FIRST_ALPHA_MAJOR {
        if build < RC_OFFSET {
            return BuildKind::Beta(build);
        }
    } else if build < BETA_OFFSET {
        return BuildKind::Alpha(build);
    } else if build < RC_OFFSET {
        return BuildKind::Beta(build - BETA_OFFSET);
    }
    if build == RELEASE_BUILD {
        BuildKind::Release
    } else {
        BuildKind::ReleaseCandidate(build - RC_OFFSET)
    }
}

/// Beta build offset for a major
pub const fn beta_offset(major: u8) -> u8 {
    if major < FIRST_ALPHA_MAJOR {
        0
    } else {
        BETA_OFFSET
    }
}

impl BuildKind {
    /// Short lowercase name used in logs and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            BuildKind::Alpha(_) => "alpha",
            BuildKind::Beta(_) => "beta",
            BuildKind::ReleaseCandidate(_) => "rc",
            BuildKind::Release => "release",
        }
    }
}

impl fmt::Display for BuildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildKind::Alpha(n) | BuildKind::Beta(n) | BuildKind::ReleaseCandidate(n) => {
                write!(f, "{}{}", self.name(), n)
            }
            BuildKind::Release => write!(f, "release"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let id = pack(6, 0, 0, 26).unwrap();
        assert_eq!(id, 6_000_026);
        assert_eq!(
            unpack(id),
            Parts {
                major: 6,
                minor: 0,
                revision: 0,
                build: 26
            }
        );
        assert_eq!(unpack(7_000_299).revision, 2);
        assert_eq!(unpack(6_070_399).minor, 7);
    }

    #[test]
    fn test_pack_rejects_out_of_range_fields() {
        assert!(pack(100, 0, 0, 99).is_err());
        assert!(pack(6, 0, 120, 99).is_err());
        assert!(pack(99, 99, 99, 99).is_ok());
    }

    #[test]
    fn test_packing_is_monotonic() {
        let a = pack_unchecked(6, 0, 0, 99);
        let b = pack_unchecked(6, 0, 1, 99);
        let c = pack_unchecked(6, 1, 0, 99);
        let d = pack_unchecked(7, 0, 0, 99);
        assert!(a < b && b < c && c < d);
        // prereleases sort before their release
        assert!(pack_unchecked(6, 0, 0, 1) < pack_unchecked(6, 0, 0, 26));
        assert!(pack_unchecked(6, 0, 0, 26) < pack_unchecked(6, 0, 0, 51));
        assert!(pack_unchecked(6, 0, 0, 51) < a);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(6, 1), BuildKind::Alpha(1));
        assert_eq!(classify(6, 26), BuildKind::Beta(1));
        assert_eq!(classify(6, 52), BuildKind::ReleaseCandidate(2));
        assert_eq!(classify(6, 99), BuildKind::Release);
        // no alphas before 5.0
        assert_eq!(classify(2, 1), BuildKind::Beta(1));
        assert_eq!(classify(1, 51), BuildKind::ReleaseCandidate(1));
        assert_eq!(classify(0, 99), BuildKind::Release);
    }

    #[test]
    fn test_release_id_below_zero() {
        assert_eq!(release_id(5, 6, 0), 5_060_099);
        assert_eq!(release_id(-1, 0, 0), -999_901);
    }
}
