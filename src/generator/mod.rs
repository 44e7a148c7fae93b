//! Deterministic network-graph generation.
//!
//! Given a node count, a connection probability and an optional seed, the
//! generator places nodes inside a sphere, connects random pairs and then
//! repairs isolated nodes by linking them to their nearest neighbor.
//!
//! With a seed, the output is a pure function of the arguments and config:
//! re-rendering with the same seed never makes the scene "pop". Without a
//! seed the ambient platform randomness is used and results differ per call.

mod config;
mod edges;
mod placement;

pub use config::{GeneratorConfig, MAX_EXTENT};

use crate::error::{Error, Result};
use crate::graph::NetworkGraph;
use crate::random::{self, RandomSource};

/// The network-graph generator.
#[derive(Debug, Clone, Default)]
pub struct GraphGenerator {
    config: GeneratorConfig,
}

impl GraphGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a graph, seeded or not.
    ///
    /// # Arguments
    ///
    /// * `node_count` - Number of nodes, at least 1
    /// * `connection_probability` - Chance that any given pair is connected, in [0, 1]
    /// * `seed` - Seed for a reproducible graph; `None` uses ambient randomness
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` when an argument or the config is out of range.
    pub fn generate(
        &self,
        node_count: usize,
        connection_probability: f64,
        seed: Option<u32>,
    ) -> Result<NetworkGraph> {
        let mut rng = random::source_for(seed);
        self.generate_with(node_count, connection_probability, &mut rng)
    }

    /// Generate a graph drawing from a caller-supplied source.
    pub fn generate_with<R>(
        &self,
        node_count: usize,
        connection_probability: f64,
        rng: &mut R,
    ) -> Result<NetworkGraph>
    where
        R: RandomSource + ?Sized,
    {
        validate_arguments(node_count, connection_probability)?;
        self.config.validate()?;

        let nodes = placement::place_nodes(node_count, &self.config, rng);
        let mut edges = edges::candidate_edges(node_count, connection_probability, rng);
        let candidate_count = edges.len();
        let repaired = edges::repair_isolated(&nodes, &mut edges);

        log::debug!(
            "generated network: {node_count} nodes, {candidate_count} candidate edges, {repaired} repair edges"
        );

        Ok(NetworkGraph::from_parts(nodes, edges, candidate_count))
    }
}

/// Generate a graph with the default configuration.
///
/// See [`GraphGenerator::generate`].
pub fn generate_graph(
    node_count: usize,
    connection_probability: f64,
    seed: Option<u32>,
) -> Result<NetworkGraph> {
    GraphGenerator::with_defaults().generate(node_count, connection_probability, seed)
}

fn validate_arguments(node_count: usize, connection_probability: f64) -> Result<()> {
    if node_count == 0 {
        return Err(Error::invalid("node_count", "must be greater than zero"));
    }
    if u32::try_from(node_count).is_err() {
        return Err(Error::invalid(
            "node_count",
            format!("{node_count} does not fit a 32-bit node index"),
        ));
    }
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&connection_probability) {
        return Err(Error::invalid(
            "connection_probability",
            format!("{connection_probability} is outside [0, 1]"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, NodeId, Position3};

    fn edge(a: u32, b: u32) -> Edge {
        Edge::between(NodeId(a), NodeId(b)).unwrap()
    }

    fn assert_close(actual: Position3, expected: [f32; 3]) {
        let [x, y, z] = expected;
        assert!(
            actual.distance(Position3::new(x, y, z)) < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_single_node() {
        for p in [0.0, 0.5, 1.0] {
            let graph = generate_graph(1, p, Some(17)).unwrap();
            assert_eq!(graph.node_count(), 1);
            assert_eq!(graph.edge_count(), 0);
        }
    }

    #[test]
    fn test_five_nodes_no_candidates_seed_42() {
        let graph = generate_graph(5, 0.0, Some(42)).unwrap();

        assert!(graph.candidate_edges().is_empty());
        assert_eq!(graph.edges(), &[edge(0, 1), edge(2, 4), edge(2, 3)]);
        assert!(graph.degrees().iter().all(|&d| d >= 1));

        assert_close(graph.nodes()[0], [0.368_471_32, -0.188_454_39, 1.284_557]);
        assert_close(
            graph.nodes()[4],
            [-0.280_403_05, -0.139_491_02, -0.262_300_52],
        );

        assert_eq!(graph, generate_graph(5, 0.0, Some(42)).unwrap());
    }

    #[test]
    fn test_two_nodes_repair_dedup() {
        // Both nodes are isolated and each other's nearest: one edge, not two.
        let graph = generate_graph(2, 0.0, Some(9)).unwrap();
        assert_eq!(graph.edges(), &[edge(0, 1)]);
        assert_eq!(graph.repair_edges().len(), 1);
    }

    #[test]
    fn test_welcome_screen_defaults() {
        // The welcome screen's defaults: 12 nodes at p = 0.3.
        let graph = generate_graph(12, 0.3, Some(1)).unwrap();
        assert_eq!(graph.edge_count(), 27);
        assert!(graph.repair_edges().is_empty());
        assert_eq!(graph.edges()[0], edge(0, 1));
        assert_eq!(graph.edges()[26], edge(10, 11));
    }

    #[test]
    fn test_complete_graph() {
        let graph = generate_graph(10, 1.0, Some(3)).unwrap();
        assert_eq!(graph.edge_count(), 45);
        assert!(graph.repair_edges().is_empty());
        assert_eq!(graph.component_count(), 1);
    }

    #[test]
    fn test_expected_edge_count() {
        let expected = 0.3 * 50.0 * 49.0 / 2.0;
        for (seed, count) in [(0, 352), (1, 339), (2, 375), (3, 371), (4, 368), (7, 356)] {
            let graph = generate_graph(50, 0.3, Some(seed)).unwrap();
            assert_eq!(graph.candidate_edges().len(), count, "seed {seed}");
            let ratio = count as f64 / expected;
            assert!((0.85..1.15).contains(&ratio), "seed {seed}: ratio {ratio}");
        }
    }

    #[test]
    fn test_config_changes_placement_only() {
        let tight = GraphGenerator::new(GeneratorConfig {
            radius: 1.0,
            ..GeneratorConfig::without_clusters()
        });
        let graph = tight.generate(40, 0.2, Some(5)).unwrap();
        assert!(graph.nodes().iter().all(|p| p.length() <= 1.0 + 1e-6));
        assert!(graph.degrees().iter().all(|&d| d >= 1));
    }

    #[test]
    fn test_unseeded_still_valid() {
        let graph = generate_graph(20, 0.1, None).unwrap();
        assert_eq!(graph.node_count(), 20);
        assert!(graph.degrees().iter().all(|&d| d >= 1));
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            generate_graph(0, 0.5, Some(1)),
            generate_graph(5, -0.1, Some(1)),
            generate_graph(5, 1.01, Some(1)),
            generate_graph(5, f64::NAN, Some(1)),
        ];
        for result in cases {
            assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        }
    }

    #[test]
    fn test_oversized_radius_is_rejected_before_placement() {
        let generator = GraphGenerator::new(GeneratorConfig {
            radius: 1.0e40,
            ..Default::default()
        });
        let Error::InvalidArgument { argument, .. } =
            generator.generate(20, 0.0, Some(1)).unwrap_err();
        assert_eq!(argument, "radius");
    }

    #[test]
    fn test_large_radius_still_repairs() {
        let generator = GraphGenerator::new(GeneratorConfig {
            radius: 1.0e17,
            ..Default::default()
        });
        let graph = generator.generate(20, 0.0, Some(1)).unwrap();
        assert!(graph.nodes().iter().all(|p| p.length().is_finite()));
        assert!(graph.degrees().iter().all(|&d| d >= 1));
    }

    #[test]
    fn test_invalid_config() {
        let generator = GraphGenerator::new(GeneratorConfig {
            radius: f64::INFINITY,
            ..Default::default()
        });
        let err = generator.generate(5, 0.5, Some(1)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                argument: "radius",
                reason: "inf must be finite and non-negative".into(),
            }
        );
    }
}
