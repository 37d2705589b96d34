//! Human-readable version strings
//!
//! Grammar: `MAJOR.MINOR.REVISION` with an optional `-QUALIFIER` (or the
//! legacy `.QUALIFIER`), where the qualifier is one of `alphaN`, `betaN`,
//! `BetaN`, `rcN` or `RCN`. Versions before 5.0 may carry a `-SNAPSHOT`
//! suffix, which is ignored. Qualifiers are only accepted up to 6.x.
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use crate::codec::{self, BuildKind};
use crate::declared::CURRENT;
use crate::error::{Error, Result};
use crate::registry::VersionRegistry;
use crate::version::Version;
use std::fmt;

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";
const LAST_SNAPSHOT_MAJOR: i32 = 4;
const LAST_QUALIFIER_MAJOR: i32 = 6;

/// Parse a version string into its packed id without resolving it
pub fn parse_id(input: &str) -> Result<i32> {
    let (version, snapshot) = match input.strip_suffix(SNAPSHOT_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (input, false),
    };

    let mut parts: Vec<&str> = version.split(['.', '-']).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    if parts.len() < 3 || parts.len() > 4 {
        return Err(Error::malformed(
            input,
            "the version needs to contain major, minor, and revision, and optionally the build",
        ));
    }

    let major = parse_number(input, parts[0])?;
    if major > LAST_SNAPSHOT_MAJOR && snapshot {
        return Err(Error::malformed(
            input,
            "snapshots are only supported until version 2.x",
        ));
    }
    if major > LAST_QUALIFIER_MAJOR && parts.len() == 4 {
        return Err(Error::malformed(
            input,
            "qualifiers are only supported until version 6.x",
        ));
    }
    let minor = parse_number(input, parts[1])?;
    let revision = parse_number(input, parts[2])?;

    let major = field(input, "major", major)?;
    let minor = field(input, "minor", minor)?;
    let revision = field(input, "revision", revision)?;

    let build = match parts.get(3) {
        Some(qualifier) => parse_qualifier(input, major, qualifier)?,
        None => codec::RELEASE_BUILD,
    };

    Ok(codec::pack_unchecked(major, minor, revision, build))
}

fn parse_number(input: &str, part: &str) -> Result<i32> {
    part.parse()
        .map_err(|_| Error::malformed(input, format!("[{part}] is not a number")))
}

fn field(input: &str, name: &str, value: i32) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= codec::MAX_FIELD)
        .ok_or_else(|| {
            Error::malformed(
                input,
                format!("{name} must be between 0 and {} but was {value}", codec::MAX_FIELD),
            )
        })
}

fn parse_qualifier(input: &str, major: u8, qualifier: &str) -> Result<u8> {
    let build = if let Some(number) = qualifier.strip_prefix("alpha") {
        if major < codec::FIRST_ALPHA_MAJOR {
            return Err(Error::malformed(
                input,
                format!("alpha builds require major >= {}", codec::FIRST_ALPHA_MAJOR),
            ));
        }
        let build = parse_number(input, number)?;
        if build >= i32::from(codec::BETA_OFFSET) {
            return Err(Error::malformed(
                input,
                format!("expected an alpha build but {build} >= {}", codec::BETA_OFFSET),
            ));
        }
        build
    } else if let Some(number) = qualifier
        .strip_prefix("Beta")
        .or_else(|| qualifier.strip_prefix("beta"))
    {
        let build = i32::from(codec::beta_offset(major)) + parse_number(input, number)?;
        if build >= i32::from(codec::RC_OFFSET) {
            return Err(Error::malformed(
                input,
                format!("expected a beta build but {build} >= {}", codec::RC_OFFSET),
            ));
        }
        build
    } else if let Some(number) = qualifier
        .strip_prefix("RC")
        .or_else(|| qualifier.strip_prefix("rc"))
    {
        let build = parse_number(input, number)? + i32::from(codec::RC_OFFSET);
        if build >= i32::from(codec::RELEASE_BUILD) {
            return Err(Error::malformed(
                input,
                format!(
                    "expected a release candidate build but {build} >= {}",
                    codec::RELEASE_BUILD
                ),
            ));
        }
        build
    } else {
        return Err(Error::malformed(
            input,
            format!("unknown qualifier [{qualifier}]"),
        ));
    };

    u8::try_from(build).map_err(|_| {
        Error::malformed(input, format!("build indicator {build} is out of range"))
    })
}

impl VersionRegistry {
    /// Parse a version string and resolve it against this registry.
    ///
    /// An empty string yields [`CURRENT`].
    pub fn parse(&self, input: &str) -> Result<Version> {
        if input.is_empty() {
            return Ok(CURRENT);
        }
        Ok(self.resolve(parse_id(input)?))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id() < 0 {
            return fmt_negative(self.id(), f);
        }
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.revision())?;
        let modern = self.major() >= 2;
        match self.build_kind() {
            BuildKind::Alpha(n) => write!(f, "-alpha{n}"),
            BuildKind::Beta(n) if modern => write!(f, "-beta{n}"),
            BuildKind::Beta(n) => write!(f, ".Beta{n}"),
            BuildKind::ReleaseCandidate(n) if modern => write!(f, "-rc{n}"),
            BuildKind::ReleaseCandidate(n) => write!(f, ".RC{n}"),
            BuildKind::Release => Ok(()),
        }
    }
}

/// Negative ids only come out of floor arithmetic below major 0. Their digit
/// groups keep their sign, and with every group at most zero the build always
/// reads as a legacy beta.
fn fmt_negative(id: i32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{}.{}.{}.Beta{}",
        (id / codec::MAJOR_FACTOR) % 100,
        (id / codec::MINOR_FACTOR) % 100,
        (id / codec::REVISION_FACTOR) % 100,
        id % 100
    )
}
