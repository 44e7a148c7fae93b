//! R-tree based spatial index using the rstar crate.
//!
//! Provides O(log n) spatial queries for:
//! - Nearest neighbor (optionally excluding the query node itself)
//! - Point-in-radius

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::graph::{NodeId, Position3};

/// A point in the spatial index with associated node ID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePoint {
    /// The node identifier.
    pub id: NodeId,
    /// Position in scene space.
    pub position: [f32; 3],
}

impl NodePoint {
    /// Create a new NodePoint.
    pub fn new(id: NodeId, position: Position3) -> Self {
        Self {
            id,
            position: position.to_array(),
        }
    }
}

impl RTreeObject for NodePoint {
    type Envelope = AABB<[f32; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for NodePoint {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        Position3::from(self.position).distance_squared(Position3::from(*point))
    }
}

/// Spatial index for graph nodes.
///
/// Uses an R*-tree bulk loaded from the node buffer. The index is built once
/// per graph; generated graphs never move.
pub struct SpatialIndex {
    tree: RTree<NodePoint>,
}

impl SpatialIndex {
    /// Bulk load an index from positions in NodeId order.
    pub fn from_positions(positions: &[Position3]) -> Self {
        let points: Vec<_> = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| NodePoint::new(NodeId(i as u32), p))
            .collect();

        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Find the nearest node to a point.
    pub fn nearest(&self, point: Position3) -> Option<NodeId> {
        self.tree.nearest_neighbor(&point.to_array()).map(|p| p.id)
    }

    /// Find the nearest node to a point, ignoring `exclude`.
    ///
    /// Among nodes at exactly the same distance the lowest NodeId wins, so
    /// the answer matches a linear scan in index order with a strict `<`.
    pub fn nearest_excluding(&self, point: Position3, exclude: NodeId) -> Option<NodeId> {
        let mut best: Option<(f32, NodeId)> = None;

        for (candidate, distance_2) in self
            .tree
            .nearest_neighbor_iter_with_distance_2(&point.to_array())
        {
            if candidate.id == exclude {
                continue;
            }
            match best {
                None => best = Some((distance_2, candidate.id)),
                Some((best_distance_2, _)) if distance_2 > best_distance_2 => break,
                Some((_, best_id)) if candidate.id < best_id => {
                    best = Some((distance_2, candidate.id));
                }
                Some(_) => {}
            }
        }

        best.map(|(_, id)| id)
    }

    /// Find all nodes within a radius of a point.
    pub fn in_radius(&self, point: Position3, radius: f32) -> Vec<NodeId> {
        self.tree
            .locate_within_distance(point.to_array(), radius * radius)
            .map(|p| p.id)
            .collect()
    }
}
