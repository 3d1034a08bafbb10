use ::rand::{Rng, rng};

use crate::RandSource;

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call, so it is `Send`
/// and `Sync` even though `ThreadRng` is not.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<f64> for ThreadRandom {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn rand(&self) -> f64 {
        rng().random::<f64>()
    }
}
