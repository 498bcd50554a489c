use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Tone controls applied after distortion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorCorrectionParameters {
    /// Additive offset; negative darkens
    pub brightness: f32,

    /// Contrast multiplier around mid-grey
    pub contrast: f32,

    /// Saturation multiplier (0.0 = greyscale)
    pub saturation: f32,
}

impl ColorCorrectionParameters {
    pub const DEFAULT: Self = Self {
        brightness: -0.1,
        contrast: 1.15,
        saturation: 0.75,
    };

    pub(crate) fn validate(&self, section: &str) -> std::result::Result<(), ParameterError> {
        super::ensure_all_finite(
            section,
            &[
                ("brightness", self.brightness),
                ("contrast", self.contrast),
                ("saturation", self.saturation),
            ],
        )
    }
}

impl Default for ColorCorrectionParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
