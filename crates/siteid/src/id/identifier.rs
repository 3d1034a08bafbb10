use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{FallbackId, ParseError, Result};

/// Which path produced an [`Identifier`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentifierKind {
    /// Returned verbatim by the strong UUID source.
    Standard,
    /// Built locally as `site-<fragment>-<timestamp>`.
    Fallback,
}

impl IdentifierKind {
    /// Returns a lowercase label for logs and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque identifier for a newly created entity.
///
/// Always non-empty and free of whitespace. Callers normally only need the
/// string, via [`Identifier::as_str`] or [`Identifier::into_string`]; the
/// [`IdentifierKind`] records whether the strong source or the fallback
/// produced it.
///
/// Equality, ordering and hashing look at the text only. A strong source may
/// return a value that happens to look like a fallback identifier, and it
/// must still compare equal to itself after a parse round trip.
///
/// # Example
/// ```
/// use siteid::{Identifier, IdentifierKind};
///
/// let id: Identifier = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
/// assert_eq!(id.kind(), IdentifierKind::Standard);
///
/// let id: Identifier = "site-abc123xyz-1700000000000".parse().unwrap();
/// assert_eq!(id.kind(), IdentifierKind::Fallback);
/// assert_eq!(id.as_fallback().unwrap().timestamp(), 1_700_000_000_000);
/// ```
#[derive(Clone, Debug)]
pub struct Identifier {
    value: String,
    kind: IdentifierKind,
}

impl Identifier {
    /// Wraps a value returned by the strong source.
    ///
    /// The value must already have passed [`is_well_formed`].
    pub(crate) const fn standard(value: String) -> Self {
        Self {
            value,
            kind: IdentifierKind::Standard,
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns which path produced this identifier.
    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Returns `true` if this identifier uses the fallback form.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.kind, IdentifierKind::Fallback)
    }

    /// Decomposes a fallback identifier into its fragment and timestamp.
    ///
    /// Returns `None` for standard identifiers.
    #[must_use]
    pub fn as_fallback(&self) -> Option<FallbackId> {
        match self.kind {
            IdentifierKind::Fallback => self.value.parse().ok(),
            IdentifierKind::Standard => None,
        }
    }

    /// Consumes the identifier and returns the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

/// Returns `true` if `value` is non-empty and contains no whitespace.
pub(crate) fn is_well_formed(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

impl From<FallbackId> for Identifier {
    fn from(id: FallbackId) -> Self {
        Self {
            value: id.to_string(),
            kind: IdentifierKind::Fallback,
        }
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.value
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    /// Classifies an existing identifier string.
    ///
    /// Any non-empty, whitespace-free string is accepted, since that is all
    /// the generator promises about a strong source's value. Strings that
    /// parse as a [`FallbackId`] are classified as
    /// [`IdentifierKind::Fallback`]; everything else is
    /// [`IdentifierKind::Standard`].
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ParseError::Whitespace);
        }

        let kind = match s.parse::<FallbackId>() {
            Ok(_) => IdentifierKind::Fallback,
            Err(_) => IdentifierKind::Standard,
        };
        Ok(Self {
            value: s.to_owned(),
            kind,
        })
    }
}
