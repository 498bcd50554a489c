use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Spatial-frequency and shape controls for the displacement glitch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlitchParameters {
    /// How often a glitch block fires
    pub frequency: f32,

    /// Glitch block grid as (columns, rows)
    pub grid: [f32; 2],

    /// Thickness of the horizontal artifact band
    pub artifact_thickness: f32,

    /// Edge falloff of the artifact band
    pub artifact_smoothness: f32,

    /// Vertical position of the artifact band in UV space
    pub artifact_vertical_axis: f32,
}

impl GlitchParameters {
    pub const DEFAULT: Self = Self {
        frequency: 0.0025,
        grid: [20.0, 10.0],
        artifact_thickness: 0.02,
        artifact_smoothness: 10.0,
        artifact_vertical_axis: 0.5,
    };

    pub(crate) fn validate(&self, section: &str) -> std::result::Result<(), ParameterError> {
        super::ensure_all_finite(
            section,
            &[
                ("frequency", self.frequency),
                ("grid.x", self.grid[0]),
                ("grid.y", self.grid[1]),
                ("artifact_thickness", self.artifact_thickness),
                ("artifact_smoothness", self.artifact_smoothness),
                ("artifact_vertical_axis", self.artifact_vertical_axis),
            ],
        )
    }
}

impl Default for GlitchParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
