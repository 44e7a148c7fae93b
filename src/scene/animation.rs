//! Per-frame animation state.

use std::f32::consts::TAU;

use crate::graph::{NetworkGraph, Position3};

use super::SceneConfig;

/// Number of leading floats in [`FrameState::to_buffer`] before the
/// per-node scales.
pub const FRAME_HEADER_LEN: usize = 9;

/// Everything that changes between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Scene rotation about X, radians in [0, 2π).
    pub rotation_x: f32,
    /// Scene rotation about Y, radians in [0, 2π).
    pub rotation_y: f32,
    /// Particle field rotation about Y, radians in [0, 2π).
    pub particle_rotation: f32,
    /// Positions of the two orbiting highlight lights.
    pub lights: [Position3; 2],
    /// Core sphere scale per node.
    pub node_scales: Vec<f32>,
    /// Glow shell scale per node.
    pub glow_scales: Vec<f32>,
}

impl FrameState {
    /// Flatten for upload:
    /// [rot_x, rot_y, particle_rot, l1x, l1y, l1z, l2x, l2y, l2z,
    ///  scale0, glow0, scale1, glow1, ...].
    pub fn to_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(FRAME_HEADER_LEN + self.node_scales.len() * 2);
        buffer.extend([self.rotation_x, self.rotation_y, self.particle_rotation]);
        for light in &self.lights {
            buffer.extend(light.to_array());
        }
        for (scale, glow) in self.node_scales.iter().zip(&self.glow_scales) {
            buffer.push(*scale);
            buffer.push(*glow);
        }
        buffer
    }
}

/// Computes frames from wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SceneAnimator {
    config: SceneConfig,
}

impl SceneAnimator {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Scale of node `index`'s core sphere at time `t` (seconds).
    ///
    /// The node index doubles as phase offset so neighbours don't pulse in sync.
    pub fn node_pulse(&self, t: f64, index: usize) -> f32 {
        1.0 + self.config.pulse_amplitude * self.pulse_wave(t, index)
    }

    /// Scale of node `index`'s glow shell at time `t` (seconds).
    pub fn node_glow(&self, t: f64, index: usize) -> f32 {
        self.config.glow_base + self.config.glow_amplitude * self.pulse_wave(t, index)
    }

    fn pulse_wave(&self, t: f64, index: usize) -> f32 {
        (t * f64::from(self.config.pulse_speed) + index as f64).sin() as f32
    }

    /// Compute the full frame for `graph` at time `t` (seconds).
    pub fn frame(&self, graph: &NetworkGraph, t: f64) -> FrameState {
        let n = graph.node_count();
        FrameState {
            rotation_x: wrap_angle(t, self.config.rotation_rate_x),
            rotation_y: wrap_angle(t, self.config.rotation_rate_y),
            particle_rotation: wrap_angle(t, self.config.particle_rotation_rate),
            lights: highlight_lights(t),
            node_scales: (0..n).map(|i| self.node_pulse(t, i)).collect(),
            glow_scales: (0..n).map(|i| self.node_glow(t, i)).collect(),
        }
    }
}

/// Angle after `t` seconds at `rate` rad/s, reduced in f64 so long-running
/// pages keep full f32 precision.
fn wrap_angle(t: f64, rate: f32) -> f32 {
    (t * f64::from(rate)).rem_euclid(f64::from(TAU)) as f32
}

/// The two lights orbiting the scene centre on Lissajous paths.
fn highlight_lights(t: f64) -> [Position3; 2] {
    let at = |x: f64, y: f64, z: f64| Position3::new(x as f32, y as f32, z as f32);
    [
        at(
            (t * 0.9).cos() * 3.2,
            (t * 0.6).sin() * 1.6,
            (t * 0.9).sin() * 2.1,
        ),
        at(
            (-t * 0.6).cos() * 2.6,
            (-t * 0.4).sin() * 2.0,
            (-t * 0.8).cos() * 1.8,
        ),
    ]
}
