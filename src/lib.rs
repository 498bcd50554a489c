//! # VHS-Params
//!
//! Tunable parameter set for a VHS-look video degradation effect: glitch
//! displacement, a rolling scan line, colour correction, banded vertical
//! distortion, random UV jitter, grain, posterization and blur.
//!
//! The crate owns the data model only. A rendering pipeline consumes the
//! values, typically by packing them into a GPU constant buffer once per
//! frame.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vhs_params::{config::Config, uniform::VhsUniform};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = Config::from_file("vhs.toml")?;
//! config.apply_override("grain_strength", "0.2")?;
//! config.validate()?;
//!
//! let uniform = VhsUniform::from(&config.parameters);
//! let bytes: &[u8] = uniform.as_bytes();
//! assert_eq!(bytes.len(), VhsUniform::SIZE);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`params`] - Parameter value types and their defaults
//! - [`uniform`] - GPU constant-buffer packing
//! - [`config`] - TOML configuration and dotted-path overrides
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod params;
pub mod uniform;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, VhsError},
    params::{
        ColorCorrectionParameters, GlitchParameters, VerticalDistortionParameters,
        VerticalScanLineParameters, VhsParameters,
    },
    uniform::VhsUniform,
};
