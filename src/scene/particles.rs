//! Decorative particle fog behind the network.

use std::f64::consts::TAU;

use crate::graph::Position3;
use crate::random::RandomSource;

/// Radius of the innermost particle shell.
const INNER_RADIUS: f64 = 0.5;
/// Depth of the particle shell beyond the inner radius.
const SHELL_DEPTH: f64 = 4.0;
/// Z squash for a sense of perspective.
const Z_FLATTEN: f64 = 0.65;

/// Scatter `count` particles on random directions at radius [0.5, 4.5).
///
/// Directions are uniform on the sphere (polar angle via `acos`), and z is
/// flattened afterwards.
pub fn particle_field<R>(count: usize, rng: &mut R) -> Vec<Position3>
where
    R: RandomSource + ?Sized,
{
    (0..count)
        .map(|_| {
            let r = rng.next_f64() * SHELL_DEPTH + INNER_RADIUS;
            let theta = rng.next_f64() * TAU;
            let phi = (rng.next_f64() * 2.0 - 1.0).acos();
            Position3::new(
                (r * phi.sin() * theta.cos()) as f32,
                (r * phi.sin() * theta.sin()) as f32,
                (r * phi.cos() * Z_FLATTEN) as f32,
            )
        })
        .collect()
}
