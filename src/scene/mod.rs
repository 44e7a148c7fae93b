//! Time-derived presentation state for the welcome-screen renderer.
//!
//! The renderer draws a `NetworkGraph` unchanged. Everything that moves
//! (node pulse, glow, scene rotation, orbiting lights, particle drift) is
//! recomputed here from a wall-clock time, so a frame is a pure function of
//! `(graph, config, t)` and never writes back into the graph.

mod animation;
mod config;
mod geometry;
mod particles;

pub use animation::{FRAME_HEADER_LEN, FrameState, SceneAnimator};
pub use config::SceneConfig;
pub use geometry::{EDGE_SEGMENT_STRIDE, EdgeSegment, edge_segments, edge_segments_flat};
pub use particles::particle_field;
