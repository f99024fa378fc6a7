//! Seeded demo data.
//!
//! For reproducible runs, build the generator with [`create_rng`] and a
//! fixed seed. `SmallRng` is deterministic for a given seed on the same
//! platform.

use rand::Rng;

use crate::matrix::LEN;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use matrix_stats::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws `count` values uniformly from `[low, high)`.
///
/// Returns an empty vector if the range is empty or not finite.
pub fn uniform_values<R: Rng>(count: usize, low: f64, high: f64, rng: &mut R) -> Vec<f64> {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Vec::new();
    }
    (0..count).map(|_| rng.random_range(low..high)).collect()
}

/// A full flat sequence of uniform values in `[0, 10)` for the given seed.
pub fn demo_values(seed: u64) -> Vec<f64> {
    let mut rng = create_rng(seed);
    uniform_values(LEN, 0.0, 10.0, &mut rng)
}
