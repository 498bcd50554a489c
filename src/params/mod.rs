//! # VHS Effect Parameters
//!
//! Plain value types describing every tunable knob of the VHS look: glitch
//! displacement, the rolling scan line, colour correction, banded vertical
//! distortion and the scalar grain / posterization / blur controls.
//!
//! Each type carries a `DEFAULT` constant and a matching [`Default`] impl, so
//! a consumer can start from the stock look and override single fields:
//!
//! ```rust
//! use vhs_params::params::VhsParameters;
//!
//! let mut params = VhsParameters::default();
//! params.grain_strength = 0.25;
//! assert!(params.validate().is_ok());
//! ```

pub mod color_correction;
pub mod glitch;
pub mod scan_line;
pub mod vertical_distortion;
pub mod vhs;

pub use color_correction::ColorCorrectionParameters;
pub use glitch::GlitchParameters;
pub use scan_line::VerticalScanLineParameters;
pub use vertical_distortion::VerticalDistortionParameters;
pub use vhs::VhsParameters;

use crate::error::ParameterError;

/// Reject NaN and infinities, which a shader would silently propagate.
pub(crate) fn ensure_finite(key: &str, value: f32) -> std::result::Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Run [`ensure_finite`] over a list of `(field, value)` pairs under `section`.
pub(crate) fn ensure_all_finite(
    section: &str,
    fields: &[(&str, f32)],
) -> std::result::Result<(), ParameterError> {
    for (name, value) in fields {
        ensure_finite(&format!("{}.{}", section, name), *value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("a", 0.0).is_ok());
        assert!(ensure_finite("a", -12.5).is_ok());
        assert!(ensure_finite("a", f32::NAN).is_err());
        assert!(ensure_finite("a", f32::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_all_finite_reports_dotted_key() {
        let err = ensure_all_finite("glitch_parameters", &[("frequency", 1.0), ("grid.y", f32::NEG_INFINITY)])
            .unwrap_err();

        match err {
            ParameterError::InvalidValue { key, .. } => assert_eq!(key, "glitch_parameters.grid.y"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
