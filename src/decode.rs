//! Single QR decode attempt over rendered pixel data.
//!
//! One external call per transform; retry diversity comes from varying the
//! rendered input, never from repeating calls here.

use tracing::trace;

use crate::models::PixelBuffer;

/// Options for one decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Attempt both polarities (normal and inverted). Providers without
    /// native inversion support emulate it by decoding an inverted copy.
    pub try_both_polarities: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            try_both_polarities: true,
        }
    }
}

/// A successfully decoded QR payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded text content.
    pub payload: String,
}

/// QR decode capability: extract a payload from a grayscale pixel buffer,
/// or report that no code was found (`None` — an expected outcome, not an
/// error).
pub trait DecodeProvider {
    /// Attempt to decode a QR code from `pixels`.
    fn decode(&self, pixels: &PixelBuffer, options: &DecodeOptions) -> Option<Decoded>;
}

/// Default decode provider backed by the `rqrr` crate.
///
/// `rqrr` only reads dark-on-light codes, so the inverted polarity is
/// handled by decoding a flipped copy of the buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    /// Create the default decoder.
    pub fn new() -> Self {
        Self
    }

    fn decode_one_polarity(pixels: &PixelBuffer) -> Option<Decoded> {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            pixels.width() as usize,
            pixels.height() as usize,
            |x, y| pixels.get(x as u32, y as u32),
        );
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_, payload)) => return Some(Decoded { payload }),
                Err(err) => trace!(%err, "grid detected but decode failed"),
            }
        }
        None
    }
}

impl DecodeProvider for RqrrDecoder {
    fn decode(&self, pixels: &PixelBuffer, options: &DecodeOptions) -> Option<Decoded> {
        if let Some(decoded) = Self::decode_one_polarity(pixels) {
            return Some(decoded);
        }
        if options.try_both_polarities {
            return Self::decode_one_polarity(&pixels.inverted());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_buffer_finds_nothing() {
        let pixels = PixelBuffer::new(32, 32, vec![128; 32 * 32]).unwrap();
        let decoder = RqrrDecoder::new();
        assert!(decoder.decode(&pixels, &DecodeOptions::default()).is_none());
    }

    #[test]
    fn polarity_flag_defaults_on() {
        assert!(DecodeOptions::default().try_both_polarities);
    }
}
