//! Pseudo-random sources for graph generation.
//!
//! Generation draws every value through the [`RandomSource`] trait so the
//! same code path serves both the seeded, reproducible stream and the
//! unseeded ambient fallback.

mod ambient;
mod mulberry;

pub use ambient::AmbientRandom;
pub use mulberry::{Mulberry32, next_random};

/// A stream of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Pick the source for an optional seed.
///
/// `Some(seed)` yields a reproducible [`Mulberry32`] stream. `None` falls
/// back to [`AmbientRandom`], and output is then not reproducible.
pub fn source_for(seed: Option<u32>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(Mulberry32::new(seed)),
        None => Box::new(AmbientRandom::new()),
    }
}
