//! Thread-local identifier generation.
//!
//! Each thread owns a [`DefaultGenerator`], so concurrent callers never
//! share state.
//!
//! # Example
//! ```rust
//! let id = siteid::generate_identifier();
//! assert!(!id.is_empty());
//! ```

use crate::{DefaultGenerator, Identifier, OsRandomUuid, SiteIdGenerator, ThreadRandom, WallClock};

thread_local! {
    static DEFAULT_GENERATOR: DefaultGenerator =
        const { SiteIdGenerator::new(Some(OsRandomUuid), WallClock, ThreadRandom) };
}

/// Returns a fresh unique identifier string.
///
/// Uses the OS secure RNG for a canonical UUID and falls back to
/// `site-<fragment>-<epoch-millis>` if that fails. Never panics and never
/// returns an empty string.
pub fn generate_identifier() -> String {
    DEFAULT_GENERATOR.with(SiteIdGenerator::generate_id)
}

/// Like [`generate_identifier`], but keeps the [`crate::IdentifierKind`].
pub fn new_identifier() -> Identifier {
    DEFAULT_GENERATOR.with(SiteIdGenerator::generate)
}
