//! Error types for the vercompat core library
//!
//! Every failure in this crate is either bad caller input (a malformed
//! version string, a missing or garbled setting, truncated wire bytes) or a
//! problem with the declaration table itself. Nothing here is transient, so
//! nothing is retried.

use thiserror::Error;

/// Main error type for vercompat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string does not follow the version grammar
    #[error("unable to parse version [{input}]: {reason}")]
    MalformedVersion { input: String, reason: String },

    /// A settings collection has no version under the requested key
    #[error("[{key}] is not present in the index settings for index with UUID [{index_uuid}]")]
    MissingVersion { key: String, index_uuid: String },

    /// A settings value that should hold an encoded version id does not
    #[error("setting [{key}] does not hold an encoded version id: [{value}]")]
    InvalidSetting { key: String, value: String },

    /// Two declarations share an id but disagree on the companion version
    #[error("version id [{id}] declared twice with companions [{existing}] and [{conflicting}]")]
    ConflictingDeclaration {
        id: i32,
        existing: String,
        conflicting: String,
    },

    /// A registry needs at least one declared version to resolve against
    #[error("cannot build a version registry without any declared versions")]
    EmptyRegistry,

    /// The wire buffer ended in the middle of a value
    #[error("unexpected end of input while reading {what}")]
    Truncated { what: &'static str },

    /// A variable-length integer ran past its maximum width
    #[error("variable-length integer exceeds {max_bytes} bytes")]
    VarIntTooLong { max_bytes: usize },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a malformed-version error echoing the offending input
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-version configuration error
    pub fn missing_version(key: impl Into<String>, index_uuid: impl Into<String>) -> Self {
        Self::MissingVersion {
            key: key.into(),
            index_uuid: index_uuid.into(),
        }
    }

    /// True for errors caused by a caller-supplied string or setting
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedVersion { .. } | Self::InvalidSetting { .. }
        )
    }

    /// True for errors surfaced by the configuration lookup contract
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingVersion { .. } | Self::InvalidSetting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_echoes_input() {
        let err = Error::malformed("7.0.0-beta1", "qualifiers are only supported until version 6.x");
        assert_eq!(
            err.to_string(),
            "unable to parse version [7.0.0-beta1]: qualifiers are only supported until version 6.x"
        );
        assert!(err.is_input_error());
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_missing_version_display() {
        let err = Error::missing_version("index.version.created", "abc123");
        assert_eq!(
            err.to_string(),
            "[index.version.created] is not present in the index settings for index with UUID [abc123]"
        );
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_wire_errors_display() {
        assert_eq!(
            Error::VarIntTooLong { max_bytes: 5 }.to_string(),
            "variable-length integer exceeds 5 bytes"
        );
        assert_eq!(
            Error::Truncated { what: "vint" }.to_string(),
            "unexpected end of input while reading vint"
        );
    }
}
