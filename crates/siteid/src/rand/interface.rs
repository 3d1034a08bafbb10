/// A trait for random sources that return random values.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The random type `T` is generic. The fallback path draws `f64` values that
/// are expected to lie in `[0, 1)`.
///
/// # Example
/// ```
/// use siteid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<f64> for FixedRand {
///     fn rand(&self) -> f64 {
///         0.25
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 0.25);
/// ```
pub trait RandSource<T> {
    /// Returns a random value.
    fn rand(&self) -> T;
}
