use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Banded vertical warp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerticalDistortionParameters {
    /// Number of horizontal bands the frame is split into
    pub number_of_horizontal_segments: f32,

    /// How fast the band offsets change over time
    pub frequency: f32,

    /// Maximum vertical UV offset of a band
    pub strength: f32,
}

impl VerticalDistortionParameters {
    pub const DEFAULT: Self = Self {
        number_of_horizontal_segments: 25.0,
        frequency: 0.03,
        strength: 0.0015,
    };

    pub(crate) fn validate(&self, section: &str) -> std::result::Result<(), ParameterError> {
        super::ensure_all_finite(
            section,
            &[
                ("number_of_horizontal_segments", self.number_of_horizontal_segments),
                ("frequency", self.frequency),
                ("strength", self.strength),
            ],
        )
    }
}

impl Default for VerticalDistortionParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let distortion = VerticalDistortionParameters::default();

        assert_eq!(distortion.number_of_horizontal_segments, 25.0);
        assert_eq!(distortion.frequency, 0.03);
        assert_eq!(distortion.strength, 0.0015);
    }

    #[test]
    fn test_non_finite_field_rejected() {
        let mut distortion = VerticalDistortionParameters::default();
        assert!(distortion.validate("vertical_distortion_parameters").is_ok());

        distortion.number_of_horizontal_segments = f32::NAN;
        match distortion.validate("vertical_distortion_parameters") {
            Err(ParameterError::InvalidValue { key, .. }) => {
                assert_eq!(key, "vertical_distortion_parameters.number_of_horizontal_segments")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
