//! RNG helpers - uniform choice over fixed lists
//!
//! Randomness is always supplied by the caller as a `rand::Rng`, so a seeded
//! `StdRng` makes every burst reproducible in tests.

use rand::Rng;

/// Pick one element of a fixed list uniformly at random.
///
/// `N` must be non-zero; all callers pass the constant glyph/palette tables.
pub fn sample<T: Copy, R: Rng + ?Sized, const N: usize>(items: &[T; N], rng: &mut R) -> T {
    items[rng.random_range(0..N)]
}
