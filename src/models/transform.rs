/// One (scale, brightness, contrast) parameter triple applied to the source
/// image before a decode attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Scale factor applied to both dimensions (must be positive).
    pub scale: f32,
    /// Brightness delta in percentage points, clamped to [-100, 100].
    /// 0 leaves brightness unchanged.
    pub brightness: i16,
    /// Contrast as a percentage (must be positive). 100 leaves contrast
    /// unchanged.
    pub contrast: u16,
}

impl Transform {
    /// The identity transform: scale 1.0, no brightness or contrast change.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            brightness: 0,
            contrast: 100,
        }
    }

    /// Create a transform, clamping brightness into [-100, 100].
    pub fn new(scale: f32, brightness: i16, contrast: u16) -> Self {
        Self {
            scale,
            brightness: brightness.clamp(-100, 100),
            contrast,
        }
    }

    /// Scale-only variant of the identity transform.
    pub fn scaled(scale: f32) -> Self {
        Self::new(scale, 0, 100)
    }

    /// Brightness-only variant of the identity transform.
    pub fn brightened(delta: i16) -> Self {
        Self::new(1.0, delta, 100)
    }

    /// Contrast-only variant of the identity transform.
    pub fn contrasted(percent: u16) -> Self {
        Self::new(1.0, 0, percent)
    }

    /// Brightness multiplier numerator as a percentage: `100 + brightness`.
    pub fn brightness_percent(&self) -> i32 {
        100 + i32::from(self.brightness)
    }

    /// Contrast multiplier numerator as a percentage.
    pub fn contrast_percent(&self) -> u32 {
        u32::from(self.contrast)
    }

    /// Whether this transform changes the image at all.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.brightness == 0 && self.contrast == 100
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_percentages_are_noop() {
        let t = Transform::identity();
        assert_eq!(t.brightness_percent(), 100);
        assert_eq!(t.contrast_percent(), 100);
        assert!(t.is_identity());
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(Transform::new(1.0, 250, 100).brightness, 100);
        assert_eq!(Transform::new(1.0, -250, 100).brightness, -100);
    }

    #[test]
    fn variants_keep_other_axes_neutral() {
        assert!(Transform::scaled(2.0).brightness == 0);
        assert_eq!(Transform::brightened(30).contrast, 100);
        assert_eq!(Transform::contrasted(150).scale, 1.0);
    }
}
