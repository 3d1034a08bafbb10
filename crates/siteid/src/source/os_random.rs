use ::rand::{TryRngCore, rngs::OsRng};
use uuid::Builder;

use crate::{SourceError, UuidSource};

/// A [`UuidSource`] backed by the operating system's secure RNG.
///
/// Reads 16 bytes per call and stamps the RFC 4122 version 4 and variant
/// bits. The result is the canonical lowercase hyphenated form
/// (`8-4-4-4-12`). A failing OS RNG is reported as
/// [`SourceError::Failed`] rather than a panic.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandomUuid;

impl UuidSource for OsRandomUuid {
    fn random_uuid(&self) -> Result<String, SourceError> {
        let mut bytes = [0_u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(SourceError::failed)?;
        Ok(Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string())
    }
}
