//! # GPU Constant-Buffer Layout
//!
//! Packs a [`VhsParameters`] value into the byte layout a Metal compute
//! kernel expects for the matching C struct. `vector_float2` is 8-byte
//! aligned there, so the glitch group carries explicit padding around
//! `grid` and the whole buffer is rounded up to a multiple of 8.
//!
//! Every type here is `#[repr(C)]` and [`Pod`], so the packed value can be
//! handed to any upload API through [`bytemuck::bytes_of`].

use bytemuck::{Pod, Zeroable};

use crate::params::{
    ColorCorrectionParameters, GlitchParameters, VerticalDistortionParameters,
    VerticalScanLineParameters, VhsParameters,
};

/// Glitch group, 32 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GlitchUniform {
    pub frequency: f32,
    pub _pad0: f32,
    pub grid: [f32; 2],
    pub artifact_thickness: f32,
    pub artifact_smoothness: f32,
    pub artifact_vertical_axis: f32,
    pub _pad1: f32,
}

/// Scan-line group, 16 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VerticalScanLineUniform {
    pub speed: f32,
    pub frequency: f32,
    pub thickness: f32,
    pub strength: f32,
}

/// Colour-correction group, 12 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorCorrectionUniform {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

/// Vertical-distortion group, 12 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VerticalDistortionUniform {
    pub number_of_horizontal_segments: f32,
    pub frequency: f32,
    pub strength: f32,
}

/// Complete constant buffer, 96 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VhsUniform {
    pub glitch_parameters: GlitchUniform,
    pub scan_line_parameters: VerticalScanLineUniform,
    pub color_correction_parameters: ColorCorrectionUniform,
    pub vertical_distortion_parameters: VerticalDistortionUniform,
    pub random_uv_distortion_strength_lb: f32,
    pub random_uv_distortion_strength_ub: f32,
    pub grain_strength: f32,
    pub colors_per_channel: f32,
    pub blur_sigma: f32,
    pub _pad0: f32,
}

const _: () = assert!(std::mem::size_of::<GlitchUniform>() == 32);
const _: () = assert!(std::mem::size_of::<VerticalScanLineUniform>() == 16);
const _: () = assert!(std::mem::size_of::<ColorCorrectionUniform>() == 12);
const _: () = assert!(std::mem::size_of::<VerticalDistortionUniform>() == 12);
const _: () = assert!(std::mem::size_of::<VhsUniform>() == VhsUniform::SIZE);

impl VhsUniform {
    /// Size of the packed buffer in bytes
    pub const SIZE: usize = 96;

    /// View the packed buffer as raw bytes in host endianness
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Offset-prefixed hex dump, 16 bytes per line
    pub fn hex_dump(&self) -> String {
        let mut out = String::new();
        for (line, chunk) in self.as_bytes().chunks(16).enumerate() {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            out.push_str(&format!("{:04x}: {}\n", line * 16, hex.join(" ")));
        }
        out
    }
}

impl From<&GlitchParameters> for GlitchUniform {
    fn from(params: &GlitchParameters) -> Self {
        Self {
            frequency: params.frequency,
            _pad0: 0.0,
            grid: params.grid,
            artifact_thickness: params.artifact_thickness,
            artifact_smoothness: params.artifact_smoothness,
            artifact_vertical_axis: params.artifact_vertical_axis,
            _pad1: 0.0,
        }
    }
}

impl From<&VerticalScanLineParameters> for VerticalScanLineUniform {
    fn from(params: &VerticalScanLineParameters) -> Self {
        Self {
            speed: params.speed,
            frequency: params.frequency,
            thickness: params.thickness,
            strength: params.strength,
        }
    }
}

impl From<&ColorCorrectionParameters> for ColorCorrectionUniform {
    fn from(params: &ColorCorrectionParameters) -> Self {
        Self {
            brightness: params.brightness,
            contrast: params.contrast,
            saturation: params.saturation,
        }
    }
}

impl From<&VerticalDistortionParameters> for VerticalDistortionUniform {
    fn from(params: &VerticalDistortionParameters) -> Self {
        Self {
            number_of_horizontal_segments: params.number_of_horizontal_segments,
            frequency: params.frequency,
            strength: params.strength,
        }
    }
}

impl From<&VhsParameters> for VhsUniform {
    fn from(params: &VhsParameters) -> Self {
        Self {
            glitch_parameters: (&params.glitch_parameters).into(),
            scan_line_parameters: (&params.scan_line_parameters).into(),
            color_correction_parameters: (&params.color_correction_parameters).into(),
            vertical_distortion_parameters: (&params.vertical_distortion_parameters).into(),
            random_uv_distortion_strength_lb: params.random_uv_distortion_strength_lb,
            random_uv_distortion_strength_ub: params.random_uv_distortion_strength_ub,
            grain_strength: params.grain_strength,
            colors_per_channel: params.colors_per_channel,
            blur_sigma: params.blur_sigma,
            _pad0: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_ne_bytes(raw)
    }

    #[test]
    fn test_glitch_offsets() {
        assert_eq!(offset_of!(GlitchUniform, frequency), 0);
        assert_eq!(offset_of!(GlitchUniform, grid), 8);
        assert_eq!(offset_of!(GlitchUniform, artifact_thickness), 16);
        assert_eq!(offset_of!(GlitchUniform, artifact_smoothness), 20);
        assert_eq!(offset_of!(GlitchUniform, artifact_vertical_axis), 24);
    }

    #[test]
    fn test_root_offsets() {
        assert_eq!(offset_of!(VhsUniform, glitch_parameters), 0);
        assert_eq!(offset_of!(VhsUniform, scan_line_parameters), 32);
        assert_eq!(offset_of!(VhsUniform, color_correction_parameters), 48);
        assert_eq!(offset_of!(VhsUniform, vertical_distortion_parameters), 60);
        assert_eq!(offset_of!(VhsUniform, random_uv_distortion_strength_lb), 72);
        assert_eq!(offset_of!(VhsUniform, random_uv_distortion_strength_ub), 76);
        assert_eq!(offset_of!(VhsUniform, grain_strength), 80);
        assert_eq!(offset_of!(VhsUniform, colors_per_channel), 84);
        assert_eq!(offset_of!(VhsUniform, blur_sigma), 88);
    }

    #[test]
    fn test_default_bytes() {
        let uniform = VhsUniform::from(&VhsParameters::default());
        let bytes = uniform.as_bytes();

        assert_eq!(bytes.len(), VhsUniform::SIZE);
        assert_eq!(read_f32(bytes, 0), 0.0025);
        assert_eq!(read_f32(bytes, 8), 20.0);
        assert_eq!(read_f32(bytes, 12), 10.0);
        assert_eq!(read_f32(bytes, 32), 0.25);
        assert_eq!(read_f32(bytes, 48), -0.1);
        assert_eq!(read_f32(bytes, 60), 25.0);
        assert_eq!(read_f32(bytes, 72), 0.001);
        assert_eq!(read_f32(bytes, 76), 0.002);
        assert_eq!(read_f32(bytes, 84), 32.0);
        assert_eq!(read_f32(bytes, 88), 1.1);
    }

    #[test]
    fn test_hex_dump_layout() {
        let uniform = VhsUniform::from(&VhsParameters::default());
        let dump = uniform.hex_dump();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("0000: "));
        assert!(lines[1].starts_with("0010: "));
        assert!(lines[5].starts_with("0050: "));
        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 17, "{}", line);
        }

        // frequency padding sits in bytes 4..8
        let first: Vec<&str> = lines[0].split_whitespace().skip(1).collect();
        assert_eq!(&first[4..8], &["00", "00", "00", "00"]);
    }

    #[test]
    fn test_padding_is_zeroed() {
        let uniform = VhsUniform::from(&VhsParameters::default());
        let bytes = uniform.as_bytes();

        for offset in [4usize, 28, 92] {
            assert_eq!(&bytes[offset..offset + 4], &[0, 0, 0, 0], "padding at {}", offset);
        }
    }

    #[test]
    fn test_overridden_field_is_packed() {
        let mut params = VhsParameters::default();
        params.color_correction_parameters.saturation = 0.0;
        params.scan_line_parameters.strength = 0.5;

        let uniform = VhsUniform::from(&params);
        assert_eq!(uniform.color_correction_parameters.saturation, 0.0);
        assert_eq!(read_f32(uniform.as_bytes(), 44), 0.5);
        assert_eq!(read_f32(uniform.as_bytes(), 56), 0.0);
    }
}
