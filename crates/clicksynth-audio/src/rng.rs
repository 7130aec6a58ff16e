//! Deterministic RNG using PCG32.
//!
//! All randomness in the engine (noise bursts, click timing and pitch jitter)
//! flows through a single `Pcg32` owned by the caller, so a fixed seed always
//! reproduces the same output. There is no process-wide generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
///
/// # Arguments
/// * `seed` - A 32-bit seed value, usually a preset's seed
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws a uniform value in `[0, 1)`.
#[inline]
pub fn unit(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>()
}

/// Draws a uniform noise sample in `[-1, 1)`.
#[inline]
pub fn noise_sample(rng: &mut Pcg32) -> f64 {
    (unit(rng) - 0.5) * 2.0
}

/// Draws a jitter value uniformly in `[-range / 2, +range / 2]`.
///
/// A draw is consumed even when `range` is zero so that the stream position
/// does not depend on the configured ranges.
#[inline]
pub fn jitter(rng: &mut Pcg32, range: f64) -> f64 {
    (unit(rng) - 0.5) * range
}
