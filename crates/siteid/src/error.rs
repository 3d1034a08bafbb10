use thiserror::Error;

/// A result type that defaults to [`ParseError`].
///
/// Generation itself never fails, so the only fallible public APIs are
/// parsing and the explicit strong-source attempt.
pub type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Why the strong UUID source did not produce an identifier.
///
/// Every variant is absorbed by [`crate::SiteIdGenerator::generate`], which
/// switches to the fallback form instead. The variants only surface through
/// [`crate::SiteIdGenerator::try_standard`], so that a calling layer can
/// decide whether to log the degradation.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SourceError {
    /// No strong source was injected into the generator.
    #[error("no strong source configured")]
    Absent,

    /// A source is present but cannot be invoked on this platform.
    #[error("strong source is present but unavailable")]
    Unavailable,

    /// The source was invoked and reported a failure.
    #[error("strong source failed: {reason}")]
    Failed {
        /// Human readable cause reported by the source.
        reason: String,
    },

    /// The source panicked while being invoked.
    #[error("strong source panicked")]
    Panicked,

    /// The source returned a value that is empty or contains whitespace.
    #[error("strong source returned an invalid identifier")]
    Invalid,
}

impl SourceError {
    /// Builds a [`SourceError::Failed`] from anything displayable.
    pub fn failed(reason: impl core::fmt::Display) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }
}

/// Errors produced when parsing a string as an identifier.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was empty.
    #[error("identifier is empty")]
    Empty,

    /// The input contained a whitespace character.
    #[error("identifier contains whitespace")]
    Whitespace,

    /// The input does not start with the `site-` prefix.
    #[error("fallback identifier must start with `site-`")]
    MissingPrefix,

    /// The input did not split into exactly three hyphen-delimited parts.
    #[error("expected 3 hyphen-delimited parts, found {found}")]
    WrongPartCount {
        /// Number of parts actually found.
        found: usize,
    },

    /// The fragment was the wrong length or held a non base-36 byte.
    #[error("invalid fragment: {fragment:?}")]
    InvalidFragment {
        /// The offending fragment text.
        fragment: String,
    },

    /// The timestamp was not a plain decimal `u64`.
    #[error("invalid timestamp: {timestamp:?}")]
    InvalidTimestamp {
        /// The offending timestamp text.
        timestamp: String,
    },
}
