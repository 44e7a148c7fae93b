//! Edge generation and connectivity repair.
//!
//! # Algorithm Overview
//!
//! 1. **Candidates:** every unordered pair (i, j), i < j, draws one value
//!    and is connected when it falls below the connection probability.
//!    Expected count is p * n * (n - 1) / 2.
//! 2. **Repair:** degrees are taken from the candidate set alone. Each
//!    degree-0 node, in index order, is linked to its nearest other node.
//!    Repair edges that duplicate an existing edge are dropped.
//!
//! Repair guarantees minimum degree 1, not a single connected component.

use std::collections::HashSet;

use crate::graph::{Edge, NodeId, Position3};
use crate::random::RandomSource;
use crate::spatial::SpatialIndex;

/// Run the random connection pass.
pub(crate) fn candidate_edges<R>(node_count: usize, probability: f64, rng: &mut R) -> Vec<Edge>
where
    R: RandomSource + ?Sized,
{
    let mut edges = Vec::new();
    for i in 0..node_count as u32 {
        for j in (i + 1)..node_count as u32 {
            if rng.next_f64() < probability {
                edges.push(Edge {
                    a: NodeId(i),
                    b: NodeId(j),
                });
            }
        }
    }
    edges
}

/// Link every node left isolated by `edges` to its nearest neighbor.
///
/// Appends to `edges` and returns the number of edges added.
pub(crate) fn repair_isolated(positions: &[Position3], edges: &mut Vec<Edge>) -> usize {
    if positions.len() <= 1 {
        return 0;
    }

    let mut degrees = vec![0u32; positions.len()];
    for edge in edges.iter() {
        degrees[edge.a.index()] += 1;
        degrees[edge.b.index()] += 1;
    }

    let isolated: Vec<NodeId> = degrees
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(i, _)| NodeId(i as u32))
        .collect();
    if isolated.is_empty() {
        return 0;
    }

    let spatial = SpatialIndex::from_positions(positions);
    let mut seen: HashSet<Edge> = edges.iter().copied().collect();
    let before = edges.len();

    for id in isolated {
        let Some(nearest) = spatial.nearest_excluding(positions[id.index()], id) else {
            continue;
        };
        let Some(edge) = Edge::between(id, nearest) else {
            continue;
        };
        if seen.insert(edge) {
            log::trace!("repair: {id} had no edges, linked to nearest {nearest}");
            edges.push(edge);
        }
    }

    edges.len() - before
}
