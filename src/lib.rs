//! Salla Network - WASM Module
//!
//! This module generates the 3D "blockchain network" shown on the Salla
//! Token Network welcome screen. It is compiled to WebAssembly and exposes
//! a JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `random`: Mulberry32 seeded stream plus an ambient fallback
//! - `generator`: Node placement, random edges and connectivity repair
//! - `graph`: The immutable generated network and its derived views
//! - `spatial`: R-tree spatial index for nearest-neighbor lookup
//! - `scene`: Time-derived presentation state (pulse, rotation, lights, edge cylinders)

use js_sys::Float32Array;
use log::Level;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod generator;
pub mod graph;
pub mod random;
pub mod scene;
pub mod spatial;

pub use error::{Error, Result};
pub use generator::{GeneratorConfig, GraphGenerator, generate_graph};
pub use graph::{Edge, NetworkGraph, NodeId, Position3};

use random::Mulberry32;
use scene::{SceneAnimator, SceneConfig};
use spatial::SpatialIndex;

/// Initialize logging and the panic hook for the WASM target.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Debug);
    log::info!("salla-network-wasm initialized");
}

/// Generate a network with the default configuration.
///
/// Throws if `nodeCount` is not a positive whole number or
/// `connectionProbability` is outside [0, 1]. Without `seed` the graph
/// differs on every call.
#[wasm_bindgen(js_name = generateGraph)]
pub fn generate_graph_js(
    node_count: f64,
    connection_probability: f64,
    seed: Option<u32>,
) -> std::result::Result<SallaNetworkWasm, JsError> {
    SallaNetworkWasm::new(node_count, connection_probability, seed)
}

/// A generated network held on the WASM side.
///
/// The graph is fixed for the lifetime of the handle; frames are derived
/// from it without mutation. Generate a new handle when the seed or node
/// count changes.
#[wasm_bindgen]
pub struct SallaNetworkWasm {
    graph: NetworkGraph,
    spatial: SpatialIndex,
    animator: SceneAnimator,
}

impl SallaNetworkWasm {
    fn from_graph(graph: NetworkGraph, scene: SceneConfig) -> Self {
        let spatial = SpatialIndex::from_positions(graph.nodes());
        Self {
            graph,
            spatial,
            animator: SceneAnimator::new(scene),
        }
    }

    /// The generated graph.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }
}

#[wasm_bindgen]
impl SallaNetworkWasm {
    /// Generate a network with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(
        node_count: f64,
        connection_probability: f64,
        seed: Option<u32>,
    ) -> std::result::Result<SallaNetworkWasm, JsError> {
        let node_count = count_from_js("node_count", node_count, 1)?;
        let graph = generate_graph(node_count, connection_probability, seed)?;
        Ok(Self::from_graph(graph, SceneConfig::default()))
    }

    /// Generate a network with explicit configuration.
    ///
    /// `generator` and `scene` are plain objects; missing fields (or
    /// `undefined`) take the defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        generator: JsValue,
        scene: JsValue,
        node_count: f64,
        connection_probability: f64,
        seed: Option<u32>,
    ) -> std::result::Result<SallaNetworkWasm, JsError> {
        let node_count = count_from_js("node_count", node_count, 1)?;
        let generator = GraphGenerator::new(from_js_or_default(generator)?);
        let scene: SceneConfig = from_js_or_default(scene)?;
        let graph = generator.generate(node_count, connection_probability, seed)?;
        Ok(Self::from_graph(graph, scene))
    }

    // =========================================================================
    // Graph Queries
    // =========================================================================

    /// Get the number of nodes in the graph.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.graph.node_count() as u32
    }

    /// Get the number of edges in the graph.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> u32 {
        self.graph.edge_count() as u32
    }

    /// Number of edges from the random pass (the rest came from repair).
    #[wasm_bindgen(js_name = candidateEdgeCount)]
    pub fn candidate_edge_count(&self) -> u32 {
        self.graph.candidate_edges().len() as u32
    }

    /// Number of connected components.
    #[wasm_bindgen(js_name = componentCount)]
    pub fn component_count(&self) -> u32 {
        self.graph.component_count() as u32
    }

    /// Positions as a Float32Array [x0, y0, z0, x1, y1, z1, ...].
    pub fn positions(&self) -> Float32Array {
        Float32Array::from(&self.graph.positions_flat()[..])
    }

    /// Edges as a Uint32Array [a0, b0, a1, b1, ...].
    pub fn edges(&self) -> Vec<u32> {
        self.graph.edges_flat()
    }

    /// Degree of every node.
    pub fn degrees(&self) -> Vec<u32> {
        self.graph.degrees()
    }

    /// Get the adjacency in CSR format.
    ///
    /// Returns [offsets..., targets...] where offsets has nodeCount + 1 elements.
    #[wasm_bindgen(js_name = edgesCsr)]
    pub fn edges_csr(&self) -> Vec<u32> {
        self.graph.edges_csr()
    }

    /// Get neighbors of a node.
    pub fn neighbors(&self, node_id: u32) -> Vec<u32> {
        self.graph.neighbors(NodeId(node_id))
    }

    /// Bounding box as [min_x, min_y, min_z, max_x, max_y, max_z].
    pub fn bounds(&self) -> Option<Vec<f32>> {
        self.graph.bounds().map(|(min, max)| {
            let mut out = min.to_array().to_vec();
            out.extend(max.to_array());
            out
        })
    }

    /// The whole graph as `{ nodes: [{x, y, z}], edges: [{a, b}], candidateCount }`.
    #[wasm_bindgen(js_name = toJs)]
    pub fn to_js(&self) -> std::result::Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.graph).map_err(|e| JsError::new(&e.to_string()))
    }

    // =========================================================================
    // Spatial Queries
    // =========================================================================

    /// Find the nearest node to a point (e.g. an unprojected pointer ray hit).
    #[wasm_bindgen(js_name = findNearestNode)]
    pub fn find_nearest_node(&self, x: f32, y: f32, z: f32) -> Option<u32> {
        self.spatial.nearest(Position3::new(x, y, z)).map(|id| id.0)
    }

    /// Find all nodes within a radius of a point.
    #[wasm_bindgen(js_name = findNodesWithin)]
    pub fn find_nodes_within(&self, x: f32, y: f32, z: f32, radius: f32) -> Vec<u32> {
        self.spatial
            .in_radius(Position3::new(x, y, z), radius)
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Edge cylinder transforms, 9 floats per edge:
    /// [mx, my, mz, length, radius, qx, qy, qz, qw, ...].
    #[wasm_bindgen(js_name = edgeSegments)]
    pub fn edge_segments(&self) -> Float32Array {
        let flat = scene::edge_segments_flat(&self.graph, self.animator.config());
        Float32Array::from(&flat[..])
    }

    /// Frame state at `time_seconds`.
    ///
    /// Layout: [rot_x, rot_y, particle_rot, light1 xyz, light2 xyz,
    /// scale0, glow0, scale1, glow1, ...].
    pub fn frame(&self, time_seconds: f64) -> Float32Array {
        let frame = self.animator.frame(&self.graph, time_seconds);
        Float32Array::from(&frame.to_buffer()[..])
    }

    /// Frame state at the page clock (`performance.now()`).
    #[wasm_bindgen(js_name = frameNow)]
    pub fn frame_now(&self) -> Float32Array {
        self.frame(page_clock_seconds())
    }

    /// Background particle positions [x0, y0, z0, ...].
    ///
    /// `count` defaults to the scene config's particle count and must be a
    /// non-negative whole number. Unseeded fields differ per call.
    #[wasm_bindgen(js_name = particleField)]
    pub fn particle_field(
        &self,
        count: Option<f64>,
        seed: Option<u32>,
    ) -> std::result::Result<Float32Array, JsError> {
        let count = match count {
            Some(count) => count_from_js("count", count, 0)?,
            None => self.animator.config().particle_count,
        };
        let particles = match seed {
            Some(seed) => scene::particle_field(count, &mut Mulberry32::new(seed)),
            None => scene::particle_field(count, &mut random::AmbientRandom::new()),
        };
        let flat: Vec<f32> = particles.iter().flat_map(|p| p.to_array()).collect();
        Ok(Float32Array::from(&flat[..]))
    }
}

/// Convert a JS number into a count.
///
/// JS callers can pass any number; only whole numbers in `[min, u32::MAX]`
/// are accepted. NaN and infinities are rejected too.
fn count_from_js(argument: &'static str, value: f64, min: u32) -> Result<usize> {
    if value.fract() != 0.0 || value < f64::from(min) || value > f64::from(u32::MAX) {
        return Err(Error::invalid(
            argument,
            format!("{value} is not a whole number in [{min}, {}]", u32::MAX),
        ));
    }
    Ok(value as usize)
}

/// Deserialize a config object, treating `undefined`/`null` as the default.
fn from_js_or_default<T>(value: JsValue) -> std::result::Result<T, JsError>
where
    T: Default + serde::de::DeserializeOwned,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Seconds since page load, or 0 outside a window context.
fn page_clock_seconds() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}
