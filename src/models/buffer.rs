/// Grayscale conversion coefficients: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

/// Source raster for one scan invocation: width, height, and tightly packed
/// RGBA bytes (4 per pixel). Never mutated by the scan; the renderer reads it
/// into transient working buffers.
#[derive(Debug, Clone)]
pub struct SourceImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SourceImage {
    /// Create a source image from tightly packed RGBA bytes.
    ///
    /// Returns `None` if the buffer length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Create a source image from tightly packed RGB bytes (alpha filled in).
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Option<Self> {
        if rgb.len() != width as usize * height as usize * 3 {
            return None;
        }
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in rgb.chunks_exact(3) {
            data.extend_from_slice(px);
            data.push(255);
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Create a source image from a decoded `image` crate image.
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }
}

/// Rendered pixel data handed to the decode provider: one grayscale byte per
/// pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a grayscale buffer.
    ///
    /// Returns `None` if the buffer length does not match `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Convert an RGBA buffer to grayscale using the integer luma formula.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        let data = rgba
            .chunks_exact(4)
            .map(|px| {
                ((COEF_R * u32::from(px[0]) + COEF_G * u32::from(px[1]) + COEF_B * u32::from(px[2]))
                    >> 8) as u8
            })
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Luma byte at (x, y). Out-of-bounds reads return 0.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Raw grayscale bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Polarity-inverted copy (light modules become dark and vice versa).
    /// Used by decode providers that only handle dark-on-light codes.
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| 255 - v).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_rejects_mismatched_length() {
        assert!(SourceImage::from_rgba(2, 2, vec![0u8; 15]).is_none());
        assert!(SourceImage::from_rgba(2, 2, vec![0u8; 16]).is_some());
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        let src = SourceImage::from_rgb(1, 1, &[10, 20, 30]).unwrap();
        assert_eq!(src.as_rgba(), &[10, 20, 30, 255]);
    }

    #[test]
    fn grayscale_matches_integer_luma() {
        let buf = PixelBuffer::from_rgba(1, 1, &[255, 255, 255, 255]).unwrap();
        // (76 + 150 + 29) * 255 >> 8 == 254
        assert_eq!(buf.get(0, 0), 254);
    }

    #[test]
    fn inversion_flips_extremes() {
        let buf = PixelBuffer::new(2, 1, vec![0, 255]).unwrap();
        let inv = buf.inverted();
        assert_eq!(inv.as_bytes(), &[255, 0]);
    }

    #[test]
    fn out_of_bounds_get_is_zero() {
        let buf = PixelBuffer::new(1, 1, vec![7]).unwrap();
        assert_eq!(buf.get(1, 0), 0);
        assert_eq!(buf.get(0, 1), 0);
    }
}
