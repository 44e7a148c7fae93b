//! Edge cylinder transforms.
//!
//! The renderer draws each edge as a cylinder built along +Y. To place it,
//! it needs the segment midpoint, its length and radius, and the rotation
//! taking +Y onto the edge direction.

use crate::graph::{NetworkGraph, Position3};

use super::SceneConfig;

/// Floats per segment in [`edge_segments_flat`].
pub const EDGE_SEGMENT_STRIDE: usize = 9;

/// Placement of one edge cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub midpoint: Position3,
    /// Cylinder height, never below `SceneConfig::min_edge_length`.
    pub length: f32,
    /// Cylinder radius.
    pub radius: f32,
    /// Unit quaternion (x, y, z, w) rotating +Y onto the edge direction.
    pub rotation: [f32; 4],
}

impl EdgeSegment {
    /// Build the segment from `start` to `end`.
    pub fn between(start: Position3, end: Position3, config: &SceneConfig) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let dz = end.z - start.z;
        let length = (dx * dx + dy * dy + dz * dz).sqrt();

        let rotation = if length > 0.0 {
            rotation_from_up([dx / length, dy / length, dz / length])
        } else {
            [0.0, 0.0, 0.0, 1.0]
        };

        Self {
            midpoint: Position3::new(
                (start.x + end.x) * 0.5,
                (start.y + end.y) * 0.5,
                (start.z + end.z) * 0.5,
            ),
            length: length.max(config.min_edge_length),
            radius: config.edge_thickness,
            rotation,
        }
    }
}

/// Shortest-arc quaternion from +Y to the unit vector `to`.
fn rotation_from_up(to: [f32; 3]) -> [f32; 4] {
    // from = (0, 1, 0): dot = to.y, cross = (to.z, 0, -to.x)
    let w = to[1] + 1.0;
    let q = if w < f32::EPSILON {
        // Pointing straight down: any half-turn about a horizontal axis works.
        [0.0, 0.0, 1.0, 0.0]
    } else {
        [to[2], 0.0, -to[0], w]
    };

    let norm = q.iter().map(|c| c * c).sum::<f32>().sqrt();
    q.map(|c| c / norm)
}

/// Cylinder transforms for every edge, in edge order.
pub fn edge_segments(graph: &NetworkGraph, config: &SceneConfig) -> Vec<EdgeSegment> {
    let nodes = graph.nodes();
    graph
        .edges()
        .iter()
        .map(|e| EdgeSegment::between(nodes[e.a.index()], nodes[e.b.index()], config))
        .collect()
}

/// Segments flattened as [mx, my, mz, length, radius, qx, qy, qz, qw, ...].
pub fn edge_segments_flat(graph: &NetworkGraph, config: &SceneConfig) -> Vec<f32> {
    let segments = edge_segments(graph, config);
    let mut buffer = Vec::with_capacity(segments.len() * EDGE_SEGMENT_STRIDE);
    for segment in segments {
        buffer.extend(segment.midpoint.to_array());
        buffer.push(segment.length);
        buffer.push(segment.radius);
        buffer.extend(segment.rotation);
    }
    buffer
}
