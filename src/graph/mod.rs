//! Graph data structures.
//!
//! A generated network is an immutable value: ordered node positions plus
//! an undirected edge list. Derived views (degrees, CSR adjacency, bounds,
//! connected components) are computed on demand and never mutate it.

mod edge;
mod network;
mod node;

pub use edge::Edge;
pub use network::NetworkGraph;
pub use node::{NodeId, Position3};
