use crate::SourceError;

/// A strong source of canonical UUID strings.
///
/// The generator injects an `Option<impl UuidSource>` instead of querying the
/// platform, so tests can substitute a fixed, failing, or panicking source.
///
/// Any `Fn() -> Result<String, SourceError>` is a `UuidSource`.
///
/// # Example
/// ```
/// use siteid::{SourceError, UuidSource};
///
/// let fixed = || Ok::<_, SourceError>("123e4567-e89b-12d3-a456-426614174000".to_owned());
/// assert_eq!(
///     fixed.random_uuid().unwrap(),
///     "123e4567-e89b-12d3-a456-426614174000"
/// );
/// ```
pub trait UuidSource {
    /// Produces a new UUID string.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the source cannot produce a value. The
    /// generator treats every error as a signal to use the fallback form.
    fn random_uuid(&self) -> Result<String, SourceError>;
}

impl<F> UuidSource for F
where
    F: Fn() -> Result<String, SourceError>,
{
    fn random_uuid(&self) -> Result<String, SourceError> {
        self()
    }
}
