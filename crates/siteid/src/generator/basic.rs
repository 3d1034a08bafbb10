use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    FallbackId, Identifier, IdentifierGenerator, OsRandomUuid, RandSource, SourceError,
    ThreadRandom, TimeSource, UnavailableSource, UuidSource, WallClock, id::is_well_formed,
};

/// The generator used by [`crate::generate_identifier`]: OS-backed UUIDs,
/// the system wall clock, and the thread-local RNG.
pub type DefaultGenerator = SiteIdGenerator<OsRandomUuid, WallClock, ThreadRandom>;

/// Produces identifiers, preferring a strong UUID source and degrading to
/// [`FallbackId`] when that source is absent or misbehaves.
///
/// All collaborators are injected:
/// - `source`: an optional [`UuidSource`]. `None` means the facility does
///   not exist.
/// - `time`: a [`TimeSource`] in milliseconds since the Unix epoch.
/// - `rng`: a [`RandSource`] yielding fractions in `[0, 1)` for the fallback
///   fragment.
///
/// The decision is made on every call and never cached. The generator holds
/// no mutable state, so it is `Send + Sync` whenever its collaborators are.
///
/// ## Failure handling
/// A source that returns an error, panics, or returns an empty or
/// whitespace-containing value is treated as unavailable for that call. Panics
/// are only caught when the crate is built with `panic = "unwind"`. The
/// process panic hook still runs, so the default hook prints the source's
/// panic message to stderr. Applications that want silence install their own
/// hook with [`std::panic::set_hook`].
///
/// # Example
/// ```
/// use siteid::{IdentifierKind, OsRandomUuid, SiteIdGenerator, ThreadRandom, WallClock};
///
/// let generator = SiteIdGenerator::new(Some(OsRandomUuid), WallClock, ThreadRandom);
/// let id = generator.generate();
/// assert_eq!(id.kind(), IdentifierKind::Standard);
///
/// let generator = SiteIdGenerator::without_source(WallClock, ThreadRandom);
/// let id = generator.generate();
/// assert!(id.as_str().starts_with("site-"));
/// ```
#[derive(Clone, Debug)]
pub struct SiteIdGenerator<U, T, R>
where
    U: UuidSource,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    source: Option<U>,
    time: T,
    rng: R,
}

impl<U, T, R> SiteIdGenerator<U, T, R>
where
    U: UuidSource,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a new [`SiteIdGenerator`] from its collaborators.
    ///
    /// # Parameters
    /// - `source`: the strong UUID source, or `None` if there is none
    /// - `time`: a [`TimeSource`] used to stamp fallback identifiers
    /// - `rng`: a [`RandSource`] used to draw fallback fragments
    pub const fn new(source: Option<U>, time: T, rng: R) -> Self {
        Self { source, time, rng }
    }

    /// Returns the injected strong source, if any.
    pub const fn source(&self) -> Option<&U> {
        self.source.as_ref()
    }

    /// Generates a new identifier.
    ///
    /// Returns the strong source's value verbatim when it succeeds, and a
    /// freshly built fallback identifier otherwise. Never fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Identifier {
        self.try_standard()
            .unwrap_or_else(|_| Identifier::from(self.fallback()))
    }

    /// Generates a new identifier as a plain string.
    pub fn generate_id(&self) -> String {
        self.generate().into_string()
    }

    /// Attempts the strong source alone, invoking it at most once.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Absent`] if no source was injected
    /// - [`SourceError::Panicked`] if the source panicked
    /// - [`SourceError::Invalid`] if the value is empty or holds whitespace
    /// - any error the source itself returned
    pub fn try_standard(&self) -> Result<Identifier, SourceError> {
        let source = self.source.as_ref().ok_or(SourceError::Absent)?;
        let value = catch_unwind(AssertUnwindSafe(|| source.random_uuid()))
            .map_err(discard_panic)??;

        if !is_well_formed(&value) {
            return Err(SourceError::Invalid);
        }
        Ok(Identifier::standard(value))
    }

    /// Builds a fallback identifier from the injected clock and RNG.
    pub fn fallback(&self) -> FallbackId {
        FallbackId::from_sources(&self.time, &self.rng)
    }
}

/// Drops a caught panic payload without letting a panicking `Drop` escape.
fn discard_panic(payload: Box<dyn Any + Send>) -> SourceError {
    if let Err(nested) = catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        core::mem::forget(nested);
    }
    SourceError::Panicked
}

impl<T, R> SiteIdGenerator<UnavailableSource, T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a generator with no strong source, so every identifier takes
    /// the fallback form.
    pub const fn without_source(time: T, rng: R) -> Self {
        Self::new(None, time, rng)
    }
}

impl Default for DefaultGenerator {
    fn default() -> Self {
        Self::new(Some(OsRandomUuid), WallClock, ThreadRandom)
    }
}

impl<U, T, R> IdentifierGenerator for SiteIdGenerator<U, T, R>
where
    U: UuidSource,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    fn generate(&self) -> Identifier {
        self.generate()
    }

    fn generate_id(&self) -> String {
        self.generate_id()
    }
}
