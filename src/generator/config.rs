//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted [`GeneratorConfig::max_extent`].
///
/// Positions are stored as `f32` and the spatial index works on squared
/// distances between them, which must stay finite.
pub const MAX_EXTENT: f64 = 1.0e18;

/// Tunable placement constants.
///
/// The defaults reproduce the welcome-screen network: a sphere of radius
/// 2.2 where roughly a quarter of the nodes get pulled into clusters.
/// Missing fields fall back to the defaults when deserialized from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Radius of the bounding sphere (default: 2.2).
    pub radius: f64,
    /// Chance that a node gets the cluster rescale (default: 0.25).
    pub cluster_probability: f64,
    /// Lower end of the cluster rescale factor (default: 0.6).
    pub cluster_scale_min: f64,
    /// Width of the cluster rescale range (default: 0.6).
    /// The factor is drawn from [min, min + span).
    pub cluster_scale_span: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            radius: 2.2,
            cluster_probability: 0.25,
            cluster_scale_min: 0.6,
            cluster_scale_span: 0.6,
        }
    }
}

impl GeneratorConfig {
    /// Config with clustering turned off.
    pub fn without_clusters() -> Self {
        Self {
            cluster_probability: 0.0,
            ..Default::default()
        }
    }

    /// Largest distance from the origin a generated node can have.
    pub fn max_extent(&self) -> f64 {
        self.radius * (self.cluster_scale_min + self.cluster_scale_span).max(1.0)
    }

    /// Reject values that would produce non-finite or meaningless positions.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::invalid(
                "radius",
                format!("{} must be finite and non-negative", self.radius),
            ));
        }
        if !(0.0..=1.0).contains(&self.cluster_probability) {
            return Err(Error::invalid(
                "cluster_probability",
                format!("{} is outside [0, 1]", self.cluster_probability),
            ));
        }
        for (argument, value) in [
            ("cluster_scale_min", self.cluster_scale_min),
            ("cluster_scale_span", self.cluster_scale_span),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(
                    argument,
                    format!("{value} must be finite and non-negative"),
                ));
            }
        }
        // Also catches radius * scale overflowing to infinity.
        let extent = self.max_extent();
        if extent > MAX_EXTENT {
            return Err(Error::invalid(
                "radius",
                format!("extent {extent} exceeds {MAX_EXTENT}"),
            ));
        }
        Ok(())
    }
}
