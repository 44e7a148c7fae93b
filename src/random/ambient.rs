//! Non-deterministic fallback used when no seed is supplied.
//!
//! Output is NOT reproducible: two graphs generated without a seed will
//! differ. Callers that need stable visuals across re-renders must pass a
//! seed.

use super::RandomSource;

/// Platform randomness: `Math.random()` in the browser, the thread-local
/// generator from `rand` elsewhere.
#[derive(Debug, Default)]
pub struct AmbientRandom {
    _private: (),
}

impl AmbientRandom {
    /// Create an ambient source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_arch = "wasm32")]
impl RandomSource for AmbientRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for AmbientRandom {
    fn next_f64(&mut self) -> f64 {
        use rand::Rng;
        rand::thread_rng().r#gen::<f64>()
    }
}
