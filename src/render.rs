//! Rendering of the source image under one transform: scale, then
//! brightness/contrast filtering, then grayscale extraction.
//!
//! The scan runner talks to rendering through [`SurfaceProvider`] so tests
//! can inject failing or synthetic surfaces; [`RasterSurface`] is the default
//! implementation over the `image` crate.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::models::{PixelBuffer, SourceImage, Transform};

/// Rendering failures. Per-transform and recoverable: the scan runner skips
/// the transform and continues with the next one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The scaled dimensions floored to zero; no surface can be created.
    #[error("cannot create a {width}x{height} rendering surface")]
    EmptySurface {
        /// Floored target width.
        width: u32,
        /// Floored target height.
        height: u32,
    },
    /// Pixel data could not be extracted from the surface.
    #[error("pixel extraction failed: {0}")]
    Extraction(String),
}

/// Rendering-surface capability: rasterize a source image under a transform
/// into a grayscale pixel buffer.
///
/// Implementations must treat a 100%/100% brightness/contrast filter as a
/// no-op, and must not retain working buffers across calls.
pub trait SurfaceProvider {
    /// Render `source` scaled by `transform.scale` (floor-rounded) with the
    /// transform's brightness and contrast applied.
    fn render(&self, source: &SourceImage, transform: &Transform) -> Result<PixelBuffer, RenderError>;
}

/// Floor-rounded target dimensions for a source under a scale factor.
pub fn scaled_dimensions(source: &SourceImage, scale: f32) -> (u32, u32) {
    let w = (source.width() as f32 * scale).floor() as u32;
    let h = (source.height() as f32 * scale).floor() as u32;
    (w, h)
}

/// Default rendering surface backed by the `image` crate.
///
/// Allocates one working surface per call, sized to the scaled dimensions,
/// and releases it after grayscale extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterSurface;

impl RasterSurface {
    /// Create the default surface provider.
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceProvider for RasterSurface {
    fn render(&self, source: &SourceImage, transform: &Transform) -> Result<PixelBuffer, RenderError> {
        let (width, height) = scaled_dimensions(source, transform.scale);
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySurface { width, height });
        }

        let surface = RgbaImage::from_raw(
            source.width(),
            source.height(),
            source.as_rgba().to_vec(),
        )
        .ok_or_else(|| RenderError::Extraction("source buffer has wrong length".into()))?;

        let mut surface = if width == source.width() && height == source.height() {
            surface
        } else {
            imageops::resize(&surface, width, height, FilterType::Triangle)
        };

        if !is_noop_filter(transform) {
            apply_brightness_contrast(
                &mut surface,
                transform.brightness_percent(),
                transform.contrast_percent(),
            );
        }

        debug!(
            width,
            height,
            brightness = transform.brightness_percent(),
            contrast = transform.contrast_percent(),
            "rendered transform"
        );

        PixelBuffer::from_rgba(width, height, surface.as_raw())
            .ok_or_else(|| RenderError::Extraction("surface returned truncated pixel data".into()))
    }
}

fn is_noop_filter(transform: &Transform) -> bool {
    transform.brightness_percent() == 100 && transform.contrast_percent() == 100
}

/// Apply brightness then midpoint-anchored contrast, the standard surface
/// filter semantics: `v' = (v * b - 128) * c + 128` with multipliers
/// `b = brightness_percent / 100` and `c = contrast_percent / 100`.
/// Alpha is left untouched.
fn apply_brightness_contrast(surface: &mut RgbaImage, brightness_percent: i32, contrast_percent: u32) {
    let b = brightness_percent as f32 / 100.0;
    let c = contrast_percent as f32 / 100.0;
    let row_len = surface.width() as usize * 4;

    let pixels: &mut [u8] = surface;
    pixels.par_chunks_mut(row_len).for_each(|row| {
        for px in row.chunks_exact_mut(4) {
            for v in px.iter_mut().take(3) {
                let filtered = (f32::from(*v) * b - 128.0) * c + 128.0;
                *v = filtered.clamp(0.0, 255.0) as u8;
            }
        }
    });
}
