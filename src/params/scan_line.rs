use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Moving horizontal scan-line artifact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerticalScanLineParameters {
    /// Roll speed in screen heights per second
    pub speed: f32,

    /// Number of lines rolling over the frame at once
    pub frequency: f32,

    /// Line height in UV space
    pub thickness: f32,

    /// UV displacement applied inside the line
    pub strength: f32,
}

impl VerticalScanLineParameters {
    pub const DEFAULT: Self = Self {
        speed: 0.25,
        frequency: 2.0,
        thickness: 0.01,
        strength: 0.00125,
    };

    pub(crate) fn validate(&self, section: &str) -> std::result::Result<(), ParameterError> {
        super::ensure_all_finite(
            section,
            &[
                ("speed", self.speed),
                ("frequency", self.frequency),
                ("thickness", self.thickness),
                ("strength", self.strength),
            ],
        )
    }
}

impl Default for VerticalScanLineParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let scan_line = VerticalScanLineParameters::default();

        assert_eq!(scan_line.speed, 0.25);
        assert_eq!(scan_line.frequency, 2.0);
        assert_eq!(scan_line.thickness, 0.01);
        assert_eq!(scan_line.strength, 0.00125);
    }

    #[test]
    fn test_non_finite_field_rejected() {
        let mut scan_line = VerticalScanLineParameters::default();
        assert!(scan_line.validate("scan_line_parameters").is_ok());

        scan_line.thickness = f32::INFINITY;
        match scan_line.validate("scan_line_parameters") {
            Err(ParameterError::InvalidValue { key, .. }) => {
                assert_eq!(key, "scan_line_parameters.thickness")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
