//! qrseek - image-based QR detection with an ordered transform retry strategy
//!
//! Given a static image, qrseek attempts QR decoding under a fixed, ordered
//! schedule of image transforms (scale, brightness, contrast) until one
//! succeeds or all are exhausted. First match wins; there is no scoring
//! across transforms, and a render failure on one transform never aborts
//! the search.
//!
//! The rendering surface and the QR decode capability are trait seams
//! ([`SurfaceProvider`], [`DecodeProvider`]) passed in explicitly; defaults
//! over the `image` and `rqrr` crates are provided.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Decode attempt: the QR decode capability and its default `rqrr` adapter
pub mod decode;
/// Core data structures (Transform, SourceImage, PixelBuffer, ScanOutcome)
pub mod models;
/// Classification of decoded payloads (PDF-link predicate)
pub mod payload;
/// Image rendering under one transform (scale + brightness/contrast filter)
pub mod render;
/// The strategy runner iterating transforms until first success
pub mod scan;
/// Ordered transform schedules
pub mod schedule;

pub use decode::{DecodeOptions, DecodeProvider, Decoded, RqrrDecoder};
pub use models::{PixelBuffer, ScanOutcome, ScanTelemetry, SourceImage, Transform};
pub use render::{RasterSurface, RenderError, SurfaceProvider};
pub use scan::{CancelToken, Scanner};
pub use schedule::{ScheduleError, TransformSchedule};

/// Scan one image with the default providers and the default schedule.
///
/// # Example
/// ```
/// use qrseek::{ScanOutcome, SourceImage};
///
/// let source = SourceImage::from_rgba(8, 8, vec![255u8; 8 * 8 * 4]).unwrap();
/// assert_eq!(qrseek::scan_image(&source), ScanOutcome::Exhausted);
/// ```
pub fn scan_image(source: &SourceImage) -> ScanOutcome {
    default_scanner().scan(source)
}

/// A scanner wired with [`RasterSurface`], [`RqrrDecoder`], and the default
/// transform schedule.
pub fn default_scanner() -> Scanner<RasterSurface, RqrrDecoder> {
    Scanner::new(
        RasterSurface::new(),
        RqrrDecoder::new(),
        TransformSchedule::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_exhausts_default_schedule() {
        let source = SourceImage::from_rgba(16, 16, vec![128u8; 16 * 16 * 4]).unwrap();
        let (outcome, telemetry) = default_scanner().scan_with_telemetry(&source);
        assert_eq!(outcome, ScanOutcome::Exhausted);
        assert_eq!(telemetry.attempts, TransformSchedule::default().len());
    }
}
