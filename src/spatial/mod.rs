//! Spatial indexing for nearest-neighbor lookup.
//!
//! This module provides an R-tree based spatial index over node positions,
//! used by connectivity repair and by pointer picking in the renderer.

mod rtree;

pub use rtree::SpatialIndex;
