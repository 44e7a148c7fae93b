//! Browser tests for the JS-facing API. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use salla_network_wasm::scene::{EDGE_SEGMENT_STRIDE, FRAME_HEADER_LEN};
use salla_network_wasm::{SallaNetworkWasm, generate_graph_js};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn generate(node_count: f64, probability: f64, seed: Option<u32>) -> SallaNetworkWasm {
    generate_graph_js(node_count, probability, seed)
        .map_err(JsValue::from)
        .unwrap()
}

#[wasm_bindgen_test]
fn generate_graph_buffers() {
    let handle = generate(12.0, 0.3, Some(1));
    assert_eq!(handle.node_count(), 12);
    assert_eq!(handle.positions().length(), 36);
    assert_eq!(handle.edges().len(), handle.edge_count() as usize * 2);
    assert!(handle.degrees().iter().all(|&d| d >= 1));
}

#[wasm_bindgen_test]
fn seeded_graphs_match() {
    let a = generate(20.0, 0.2, Some(42));
    let b = generate(20.0, 0.2, Some(42));
    assert_eq!(a.positions().to_vec(), b.positions().to_vec());
    assert_eq!(a.edges(), b.edges());
}

#[wasm_bindgen_test]
fn unseeded_uses_math_random() {
    let handle = generate(10.0, 0.1, None);
    assert!(handle.degrees().iter().all(|&d| d >= 1));
}

#[wasm_bindgen_test]
fn invalid_arguments_throw() {
    assert!(generate_graph_js(0.0, 0.5, Some(1)).is_err());
    assert!(generate_graph_js(5.0, 1.5, Some(1)).is_err());
}

#[wasm_bindgen_test]
fn node_count_must_be_a_positive_whole_number() {
    for node_count in [-1.0, 2.5, f64::NAN, f64::INFINITY] {
        assert!(generate_graph_js(node_count, 0.5, Some(1)).is_err());
        assert!(SallaNetworkWasm::new(node_count, 0.5, Some(1)).is_err());
        let configured = SallaNetworkWasm::with_config(
            JsValue::UNDEFINED,
            JsValue::UNDEFINED,
            node_count,
            0.5,
            None,
        );
        assert!(configured.is_err());
    }
}

#[wasm_bindgen_test]
fn particle_count_must_be_a_whole_number() {
    let handle = generate(4.0, 0.5, Some(1));
    assert!(handle.particle_field(Some(-1.0), Some(2)).is_err());
    assert!(handle.particle_field(Some(1.5), Some(2)).is_err());
    let empty = handle
        .particle_field(Some(0.0), Some(2))
        .map_err(JsValue::from)
        .unwrap();
    assert_eq!(empty.length(), 0);
}

#[wasm_bindgen_test]
fn config_objects_deserialize() {
    let generator = serde_wasm_bindgen::to_value(&salla_network_wasm::GeneratorConfig {
        radius: 1.0,
        ..Default::default()
    })
    .unwrap();
    let handle = SallaNetworkWasm::with_config(generator, JsValue::UNDEFINED, 25.0, 0.2, Some(3))
        .map_err(JsValue::from)
        .unwrap();
    let bounds = handle.bounds().unwrap();
    assert!(bounds.iter().all(|v| v.abs() <= 1.2 + 1e-5));
}

#[wasm_bindgen_test]
fn presentation_buffers() {
    let handle = generate(8.0, 0.4, Some(5));
    assert_eq!(
        handle.edge_segments().length() as usize,
        handle.edge_count() as usize * EDGE_SEGMENT_STRIDE
    );
    assert_eq!(handle.frame(1.5).length() as usize, FRAME_HEADER_LEN + 16);
    assert_eq!(handle.frame_now().length() as usize, FRAME_HEADER_LEN + 16);
    let particles = handle
        .particle_field(Some(40.0), Some(2))
        .map_err(JsValue::from)
        .unwrap();
    assert_eq!(particles.length(), 120);
    assert!(handle.to_js().is_ok());
}
