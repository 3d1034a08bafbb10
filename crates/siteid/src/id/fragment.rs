use core::{fmt, str::FromStr};

use crate::{ParseError, Result};

/// Number of base-36 characters in a fallback fragment.
pub const FRAGMENT_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RADIX: f64 = 36.0;

/// The random part of a fallback identifier.
///
/// Always exactly [`FRAGMENT_LEN`] lowercase base-36 characters. Nine digits
/// carry roughly 46 bits of the source fraction, which keeps the fragment
/// compact while leaving same-millisecond collisions unlikely.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment([u8; FRAGMENT_LEN]);

impl Fragment {
    /// Encodes the leading base-36 digits of a fraction in `[0, 1)`.
    ///
    /// Each digit is the integer part of the running fraction multiplied by
    /// 36. Inputs outside `[0, 1)` are reduced modulo 1, and non-finite
    /// inputs encode as all zeros, so the result is always valid.
    ///
    /// # Example
    /// ```
    /// use siteid::Fragment;
    ///
    /// assert_eq!(Fragment::from_fraction(0.5).as_str(), "i00000000");
    /// assert_eq!(Fragment::from_fraction(0.0).as_str(), "000000000");
    /// ```
    #[must_use]
    pub fn from_fraction(value: f64) -> Self {
        let mut frac = if value.is_finite() {
            value.rem_euclid(1.0)
        } else {
            0.0
        };

        let mut buf = [b'0'; FRAGMENT_LEN];
        for slot in &mut buf {
            frac *= RADIX;
            let digit = frac.trunc();
            frac -= digit;
            // rem_euclid may round up to exactly 1.0 for tiny negatives
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (digit as usize).min(ALPHABET.len() - 1);
            *slot = ALPHABET[index];
        }
        Self(buf)
    }

    /// Returns the fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever built from ALPHABET, so always ASCII.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the raw ASCII bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FRAGMENT_LEN] {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fragment").field(&self.as_str()).finish()
    }
}

impl FromStr for Fragment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ParseError::InvalidFragment {
            fragment: s.to_owned(),
        };

        let bytes: [u8; FRAGMENT_LEN] = s.as_bytes().try_into().map_err(|_| invalid())?;
        if !bytes
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        {
            return Err(invalid());
        }
        Ok(Self(bytes))
    }
}
