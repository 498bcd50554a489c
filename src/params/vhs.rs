use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, Result};

use super::{
    ensure_finite, ColorCorrectionParameters, GlitchParameters, VerticalDistortionParameters,
    VerticalScanLineParameters,
};

// Section and field names as they appear in config files and error keys
pub const GLITCH: &str = "glitch_parameters";
pub const SCAN_LINE: &str = "scan_line_parameters";
pub const COLOR_CORRECTION: &str = "color_correction_parameters";
pub const VERTICAL_DISTORTION: &str = "vertical_distortion_parameters";
pub const UV_DISTORTION_LB: &str = "random_uv_distortion_strength_lb";
pub const UV_DISTORTION_UB: &str = "random_uv_distortion_strength_ub";
pub const GRAIN_STRENGTH: &str = "grain_strength";
pub const COLORS_PER_CHANNEL: &str = "colors_per_channel";
pub const BLUR_SIGMA: &str = "blur_sigma";

/// Complete parameter set for the VHS effect
///
/// Owns one of each nested parameter group by value. The consumer copies it
/// per frame and may override individual fields before binding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VhsParameters {
    pub glitch_parameters: GlitchParameters,
    pub scan_line_parameters: VerticalScanLineParameters,
    pub color_correction_parameters: ColorCorrectionParameters,
    pub vertical_distortion_parameters: VerticalDistortionParameters,

    /// Lower bound of the per-frame random UV jitter
    pub random_uv_distortion_strength_lb: f32,

    /// Upper bound of the per-frame random UV jitter
    pub random_uv_distortion_strength_ub: f32,

    /// Film grain amplitude
    pub grain_strength: f32,

    /// Posterization levels per colour channel (integer-valued)
    pub colors_per_channel: f32,

    /// Gaussian blur standard deviation in pixels
    pub blur_sigma: f32,
}

impl VhsParameters {
    pub const DEFAULT: Self = Self {
        glitch_parameters: GlitchParameters::DEFAULT,
        scan_line_parameters: VerticalScanLineParameters::DEFAULT,
        color_correction_parameters: ColorCorrectionParameters::DEFAULT,
        vertical_distortion_parameters: VerticalDistortionParameters::DEFAULT,
        random_uv_distortion_strength_lb: 0.001,
        random_uv_distortion_strength_ub: 0.002,
        grain_strength: 0.1,
        colors_per_channel: 32.0,
        blur_sigma: 1.1,
    };

    /// Check the invariants a consumer relies on
    ///
    /// All fields must be finite, the UV jitter bounds ordered, the
    /// posterization level a positive whole number and the blur sigma
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        self.glitch_parameters.validate(GLITCH)?;
        self.scan_line_parameters.validate(SCAN_LINE)?;
        self.color_correction_parameters.validate(COLOR_CORRECTION)?;
        self.vertical_distortion_parameters.validate(VERTICAL_DISTORTION)?;

        self.check_uv_distortion_range()?;
        ensure_finite(GRAIN_STRENGTH, self.grain_strength)?;

        let colors = self.colors_per_channel;
        if !colors.is_finite() || colors < 1.0 || colors.fract() != 0.0 {
            return Err(ParameterError::InvalidValue {
                key: COLORS_PER_CHANNEL.to_string(),
                value: colors.to_string(),
            }
            .into());
        }

        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(ParameterError::InvalidValue {
                key: BLUR_SIGMA.to_string(),
                value: self.blur_sigma.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Bounds of the random UV distortion strength
    pub fn uv_distortion_range(&self) -> RangeInclusive<f32> {
        self.random_uv_distortion_strength_lb..=self.random_uv_distortion_strength_ub
    }

    /// Draw one UV distortion strength uniformly from `[lb, ub]`
    pub fn sample_uv_distortion_strength<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f32> {
        self.check_uv_distortion_range()?;

        let lb = self.random_uv_distortion_strength_lb;
        if lb == self.random_uv_distortion_strength_ub {
            return Ok(lb);
        }

        Ok(rng.gen_range(self.uv_distortion_range()))
    }

    /// Both bounds finite, ordered, and with a width that can be sampled
    fn check_uv_distortion_range(&self) -> std::result::Result<(), ParameterError> {
        let lb = self.random_uv_distortion_strength_lb;
        let ub = self.random_uv_distortion_strength_ub;

        ensure_finite(UV_DISTORTION_LB, lb)?;
        ensure_finite(UV_DISTORTION_UB, ub)?;

        // Inclusive sampling scales the width by 1 / (1 - EPSILON)
        let scale = (ub - lb) / (1.0 - f32::EPSILON);
        if lb > ub || !scale.is_finite() {
            return Err(ParameterError::InvalidRange {
                lower_key: UV_DISTORTION_LB.to_string(),
                lower: lb,
                upper_key: UV_DISTORTION_UB.to_string(),
                upper: ub,
            });
        }

        Ok(())
    }
}

impl Default for VhsParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
