use crate::{SourceError, UuidSource};

/// A source that exists but can never be invoked.
///
/// Models a platform that exposes the strong facility under the expected
/// name without it being usable. Every call returns
/// [`SourceError::Unavailable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct UnavailableSource;

impl UuidSource for UnavailableSource {
    fn random_uuid(&self) -> Result<String, SourceError> {
        Err(SourceError::Unavailable)
    }
}
