//! Scene configuration.

use serde::{Deserialize, Serialize};

/// Presentation constants for the welcome-screen network.
///
/// Rates are per second of wall-clock time. Missing fields fall back to the
/// defaults when deserialized from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    /// Node pulse amplitude around scale 1.0 (default: 0.08).
    pub pulse_amplitude: f32,
    /// Angular speed of the pulse and glow, rad/s (default: 2.0).
    pub pulse_speed: f32,
    /// Resting glow-shell scale (default: 1.6).
    pub glow_base: f32,
    /// Glow-shell pulse amplitude (default: 0.12).
    pub glow_amplitude: f32,
    /// Scene rotation about X, rad/s (default: 0.054).
    pub rotation_rate_x: f32,
    /// Scene rotation about Y, rad/s (default: 0.102).
    pub rotation_rate_y: f32,
    /// Particle field rotation about Y, rad/s (default: 0.03).
    pub particle_rotation_rate: f32,
    /// Number of background particles (default: 160).
    pub particle_count: usize,
    /// Edge cylinder radius (default: 0.025).
    pub edge_thickness: f32,
    /// Shortest edge length handed to the renderer (default: 1e-4).
    pub min_edge_length: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            pulse_amplitude: 0.08,
            pulse_speed: 2.0,
            glow_base: 1.6,
            glow_amplitude: 0.12,
            // 0.0009 and 0.0017 rad per frame at 60 fps
            rotation_rate_x: 0.054,
            rotation_rate_y: 0.102,
            particle_rotation_rate: 0.03,
            particle_count: 160,
            edge_thickness: 0.025,
            min_edge_length: 1e-4,
        }
    }
}
