use core::{fmt, str::FromStr};

use crate::{Fragment, ParseError, RandSource, Result, TimeSource};

/// Fixed prefix of every fallback identifier.
pub const FALLBACK_PREFIX: &str = "site";

const SEPARATOR: char = '-';

/// The degraded identifier form, `site-<fragment>-<epoch-millis>`.
///
/// Uniqueness rests on the random [`Fragment`] combined with the wall-clock
/// timestamp. Two values built in the same millisecond only differ by their
/// fragments, so collisions are improbable rather than impossible.
///
/// # Example
/// ```
/// use siteid::{FallbackId, Fragment};
///
/// let id = FallbackId::from_components(Fragment::from_fraction(0.5), 1_700_000_000_000);
/// assert_eq!(id.to_string(), "site-i00000000-1700000000000");
///
/// let parsed: FallbackId = "site-i00000000-1700000000000".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FallbackId {
    fragment: Fragment,
    timestamp: u64,
}

impl FallbackId {
    /// Constructs a fallback identifier from its components.
    #[must_use]
    pub const fn from_components(fragment: Fragment, timestamp: u64) -> Self {
        Self {
            fragment,
            timestamp,
        }
    }

    /// Draws a fragment from `rng` and stamps it with `time`.
    ///
    /// The timestamp is read after the fragment, at the moment of
    /// construction.
    pub fn from_sources<T, R>(time: &T, rng: &R) -> Self
    where
        T: TimeSource<u64> + ?Sized,
        R: RandSource<f64> + ?Sized,
    {
        let fragment = Fragment::from_fraction(rng.rand());
        Self::from_components(fragment, time.current_millis())
    }

    /// Returns the random fragment.
    #[must_use]
    pub const fn fragment(&self) -> Fragment {
        self.fragment
    }

    /// Returns the embedded milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl fmt::Display for FallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{FALLBACK_PREFIX}{SEPARATOR}{}{SEPARATOR}{}",
            self.fragment, self.timestamp
        )
    }
}

impl FromStr for FallbackId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ParseError::Whitespace);
        }

        let rest = s
            .strip_prefix(FALLBACK_PREFIX)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .ok_or(ParseError::MissingPrefix)?;

        let mut parts = rest.split(SEPARATOR);
        let (Some(fragment), Some(timestamp), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::WrongPartCount {
                found: rest.split(SEPARATOR).count() + 1,
            });
        };

        let fragment = fragment.parse::<Fragment>()?;

        let invalid_timestamp = || ParseError::InvalidTimestamp {
            timestamp: timestamp.to_owned(),
        };
        if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_timestamp());
        }
        let timestamp = timestamp.parse::<u64>().map_err(|_| invalid_timestamp())?;

        Ok(Self::from_components(fragment, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime(u64);
    impl TimeSource<u64> for FixedTime {
        fn current_millis(&self) -> u64 {
            self.0
        }
    }

    struct FixedRand(f64);
    impl RandSource<f64> for FixedRand {
        fn rand(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn formats_with_prefix_fragment_and_timestamp() {
        let id = FallbackId::from_sources(&FixedTime(1_234_567_890_123), &FixedRand(0.75));
        assert_eq!(id.to_string(), "site-r00000000-1234567890123");
        assert_eq!(id.timestamp(), 1_234_567_890_123);
        assert_eq!(id.fragment().as_str(), "r00000000");
    }

    #[test]
    fn splits_into_three_parts() {
        let id = FallbackId::from_sources(&FixedTime(42), &FixedRand(0.314_159));
        let rendered = id.to_string();
        let parts: Vec<&str> = rendered.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "site");
        assert_eq!(parts[1].len(), 9);
        assert_eq!(parts[2], "42");
    }

    #[test]
    fn parses_its_own_output() {
        let id = FallbackId::from_sources(&FixedTime(1_700_000_000_000), &FixedRand(0.618));
        assert_eq!(id.to_string().parse::<FallbackId>(), Ok(id));
    }

    #[test]
    fn rejects_malformed_input() {
        let cases = [
            ("", ParseError::Empty),
            ("site-abcdefghi- 12", ParseError::Whitespace),
            ("item-abcdefghi-12", ParseError::MissingPrefix),
            ("siteabcdefghi-12", ParseError::MissingPrefix),
            ("site-abcdefghi", ParseError::WrongPartCount { found: 2 }),
            ("site-abc-def-12", ParseError::WrongPartCount { found: 4 }),
            (
                "site-abcdefgh-12",
                ParseError::InvalidFragment {
                    fragment: "abcdefgh".into(),
                },
            ),
            (
                "site-abcdefghi-",
                ParseError::InvalidTimestamp {
                    timestamp: String::new(),
                },
            ),
            (
                "site-abcdefghi-+12",
                ParseError::InvalidTimestamp {
                    timestamp: "+12".into(),
                },
            ),
            (
                "site-abcdefghi-99999999999999999999",
                ParseError::InvalidTimestamp {
                    timestamp: "99999999999999999999".into(),
                },
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<FallbackId>(), Err(expected), "{input:?}");
        }
    }
}
