//! Node placement inside the bounding sphere.
//!
//! Each node draws a random direction, normalizes it and scales it by a
//! uniform fraction of the radius. Drawing the scale uniformly (instead of
//! its cube root) concentrates points toward the centre; the visual relies
//! on that look, so it is kept. A fraction of nodes is then rescaled by a
//! random factor to suggest clusters.

use super::GeneratorConfig;
use crate::graph::Position3;
use crate::random::RandomSource;

/// Place `count` nodes, consuming draws from `rng` in node order.
pub(crate) fn place_nodes<R>(count: usize, config: &GeneratorConfig, rng: &mut R) -> Vec<Position3>
where
    R: RandomSource + ?Sized,
{
    (0..count).map(|_| place_node(config, rng)).collect()
}

/// Draw order per node: x, y, z, scale, cluster roll, then the cluster
/// factor only when the roll hits. Changing it changes every seeded graph.
fn place_node<R>(config: &GeneratorConfig, rng: &mut R) -> Position3
where
    R: RandomSource + ?Sized,
{
    let x = rng.next_f64() * 2.0 - 1.0;
    let y = rng.next_f64() * 2.0 - 1.0;
    let z = rng.next_f64() * 2.0 - 1.0;
    let scale = rng.next_f64() * config.radius;

    let length = (x * x + y * y + z * z).sqrt();
    let (mut x, mut y, mut z) = if length > 0.0 {
        (x / length * scale, y / length * scale, z / length * scale)
    } else {
        (0.0, 0.0, 0.0)
    };

    if rng.next_f64() < config.cluster_probability {
        let factor = config.cluster_scale_min + rng.next_f64() * config.cluster_scale_span;
        x *= factor;
        y *= factor;
        z *= factor;
    }

    Position3::new(x as f32, y as f32, z as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Mulberry32;

    /// Replays a fixed list of draws.
    struct Scripted(std::vec::IntoIter<f64>);

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.next().expect("script exhausted")
        }
    }

    fn scripted(values: &[f64]) -> Scripted {
        Scripted(values.to_vec().into_iter())
    }

    #[test]
    fn test_scale_along_direction() {
        // Direction (1, 0.5, 0.5) -> x axis after normalization is 1/sqrt(1.5).
        let mut rng = scripted(&[1.0, 0.75, 0.75, 0.5, 0.9]);
        let config = GeneratorConfig::default();
        let p = place_node(&config, &mut rng);

        assert!((p.length() - 1.1).abs() < 1e-6, "length {}", p.length());
        assert!((p.y - p.z).abs() < 1e-7);
        assert!(p.x > p.y);
    }

    #[test]
    fn test_cluster_rescale_consumes_extra_draw() {
        let config = GeneratorConfig::default();
        // Roll 0.1 < 0.25 hits; factor = 0.6 + 0.5 * 0.6 = 0.9.
        let mut rng = scripted(&[1.0, 0.5, 0.5, 1.0 / 2.2, 0.1, 0.5, 0.123]);
        let p = place_node(&config, &mut rng);
        assert!((p.x - 0.9).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
        assert_eq!(rng.next_f64(), 0.123, "exactly six draws consumed");
    }

    #[test]
    fn test_zero_direction_stays_at_origin() {
        let config = GeneratorConfig::default();
        let mut rng = scripted(&[0.5, 0.5, 0.5, 0.99, 0.9]);
        assert_eq!(place_node(&config, &mut rng), Position3::ORIGIN);
    }

    #[test]
    fn test_within_extent() {
        let config = GeneratorConfig::default();
        let mut rng = Mulberry32::new(31);
        let limit = config.max_extent() as f32 + 1e-5;
        for p in place_nodes(2000, &config, &mut rng) {
            assert!(p.length() <= limit, "{p:?} outside {limit}");
        }
    }

    #[test]
    fn test_without_clusters_stays_in_radius() {
        let mut rng = Mulberry32::new(8);
        let plain = place_nodes(500, &GeneratorConfig::without_clusters(), &mut rng);
        let limit = 2.2f32 + 1e-5;
        assert!(plain.iter().all(|p| p.length() <= limit));
    }
}
