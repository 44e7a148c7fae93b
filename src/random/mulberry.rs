//! Mulberry32: a 32-bit state mixing generator.
//!
//! Small, fast and good enough for decorative placement. Not suitable for
//! anything that needs cryptographic quality.

use super::RandomSource;

/// Additive increment applied to the state on every step.
const INCREMENT: u32 = 0x6D2B_79F5;

/// Scale from a 32-bit integer to `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Advance a Mulberry32 state by one step.
///
/// Pure function: returns the drawn value in `[0, 1)` and the state to pass
/// to the next call. Values are exact multiples of 2^-32 and never reach 1.0.
#[inline]
pub fn next_random(state: u32) -> (f64, u32) {
    let next = state.wrapping_add(INCREMENT);
    let mut t = next;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = f64::from(t ^ (t >> 14)) / TWO_POW_32;
    (value, next)
}

/// Seeded Mulberry32 stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Mulberry32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        let (value, next) = next_random(self.state);
        self.state = next;
        value
    }
}
