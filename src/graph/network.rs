//! NetworkGraph - the immutable result of a generation call.
//!
//! Positions are stored in node order; edges in generation order (candidate
//! edges first, then repair edges). All accessors take `&self`: a render
//! loop can hold one graph across frames without ever changing it.

use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use serde::Serialize;

use super::edge::Edge;
use super::node::{NodeId, Position3};

/// A generated network: node positions and an undirected edge set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGraph {
    /// Node positions, indexed by NodeId.
    nodes: Vec<Position3>,

    /// Deduplicated edges; `edges[..candidate_count]` came from the random pass.
    edges: Vec<Edge>,

    /// Number of leading edges produced by the random connection pass.
    candidate_count: usize,
}

impl NetworkGraph {
    pub(crate) fn from_parts(
        nodes: Vec<Position3>,
        edges: Vec<Edge>,
        candidate_count: usize,
    ) -> Self {
        debug_assert!(candidate_count <= edges.len());
        debug_assert!(edges.iter().all(|e| e.b.index() < nodes.len()));
        Self {
            nodes,
            edges,
            candidate_count,
        }
    }

    // =========================================================================
    // Node Access
    // =========================================================================

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node positions in generation order.
    pub fn nodes(&self) -> &[Position3] {
        &self.nodes
    }

    /// Get a node's position.
    pub fn position(&self, id: NodeId) -> Option<Position3> {
        self.nodes.get(id.index()).copied()
    }

    /// Positions flattened as [x0, y0, z0, x1, y1, z1, ...] for GPU upload.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.nodes.iter().flat_map(|p| p.to_array()).collect()
    }

    // =========================================================================
    // Edge Access
    // =========================================================================

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges: candidate edges followed by repair edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges produced by the random connection pass.
    pub fn candidate_edges(&self) -> &[Edge] {
        &self.edges[..self.candidate_count]
    }

    /// Edges added by connectivity repair.
    pub fn repair_edges(&self) -> &[Edge] {
        &self.edges[self.candidate_count..]
    }

    /// Edges flattened as [a0, b0, a1, b1, ...].
    pub fn edges_flat(&self) -> Vec<u32> {
        self.edges.iter().flat_map(|e| [e.a.0, e.b.0]).collect()
    }

    /// Degree of every node.
    pub fn degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0u32; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.a.index()] += 1;
            degrees[edge.b.index()] += 1;
        }
        degrees
    }

    /// Neighbors of a node, in edge order.
    pub fn neighbors(&self, id: NodeId) -> Vec<u32> {
        self.edges
            .iter()
            .filter_map(|e| e.other(id))
            .map(|n| n.0)
            .collect()
    }

    /// Get the adjacency in CSR format.
    ///
    /// Returns [offsets..., targets...] where offsets has node_count + 1
    /// elements. Each undirected edge is listed from both endpoints.
    pub fn edges_csr(&self) -> Vec<u32> {
        let node_count = self.nodes.len();

        let mut offsets = vec![0u32; node_count + 1];
        for edge in &self.edges {
            offsets[edge.a.index() + 1] += 1;
            offsets[edge.b.index() + 1] += 1;
        }

        // Prefix sum
        for i in 1..=node_count {
            offsets[i] += offsets[i - 1];
        }

        let mut targets = vec![0u32; self.edges.len() * 2];
        let mut cursor = offsets[..node_count].to_vec();
        for edge in &self.edges {
            for (from, to) in [(edge.a, edge.b), (edge.b, edge.a)] {
                let slot = &mut cursor[from.index()];
                targets[*slot as usize] = to.0;
                *slot += 1;
            }
        }

        let mut result = Vec::with_capacity(offsets.len() + targets.len());
        result.extend(offsets);
        result.extend(targets);
        result
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Axis-aligned bounding box as (min, max), or None for an empty graph.
    pub fn bounds(&self) -> Option<(Position3, Position3)> {
        let first = *self.nodes.first()?;
        Some(self.nodes.iter().fold((first, first), |(min, max), p| {
            (
                Position3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Position3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }

    /// Build a petgraph view of the network.
    ///
    /// Node indices in the returned graph match NodeId.
    pub fn to_petgraph(&self) -> UnGraph<Position3, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self.nodes.iter().map(|&p| graph.add_node(p)).collect();
        for edge in &self.edges {
            graph.add_edge(indices[edge.a.index()], indices[edge.b.index()], ());
        }
        graph
    }

    /// Number of connected components.
    ///
    /// Repair guarantees no isolated nodes, not a single component, so this
    /// can be greater than one.
    pub fn component_count(&self) -> usize {
        connected_components(&self.to_petgraph())
    }
}
