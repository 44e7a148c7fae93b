//! Undirected edge between two distinct nodes.

use std::fmt;

use serde::Serialize;

use super::node::NodeId;

/// Unordered pair of node indices, stored with `a < b`.
///
/// No weight and no direction. Normalizing on construction means `(i, j)`
/// and `(j, i)` compare equal, which is what edge deduplication relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Create an edge between two distinct nodes.
    ///
    /// Returns `None` for a self-loop.
    pub fn between(u: NodeId, v: NodeId) -> Option<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Some(Self { a: u, b: v }),
            std::cmp::Ordering::Greater => Some(Self { a: v, b: u }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    #[inline]
    pub fn other(self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.a.0, self.b.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalized() {
        let e = Edge::between(NodeId(5), NodeId(2)).unwrap();
        assert_eq!(e.a, NodeId(2));
        assert_eq!(e.b, NodeId(5));
        assert_eq!(e, Edge::between(NodeId(2), NodeId(5)).unwrap());
        assert_eq!(format!("{}", e), "Edge(2, 5)");
    }

    #[test]
    fn test_self_loop_rejected() {
        assert!(Edge::between(NodeId(3), NodeId(3)).is_none());
    }

    #[test]
    fn test_other_endpoint() {
        let e = Edge::between(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(e.other(NodeId(0)), Some(NodeId(1)));
        assert_eq!(e.other(NodeId(1)), Some(NodeId(0)));
        assert_eq!(e.other(NodeId(2)), None);
    }
}
