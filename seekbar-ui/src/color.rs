//! RGBA colors for seek bar paints.

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    // --- Common Colors ---
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Platform light gray, `0xFFCCCCCC`. Default bar and connecting line color.
    pub const LIGHT_GRAY: Color = Color::new(0.8, 0.8, 0.8, 1.0);
    /// Holo blue light, `0xFF33B5E5`. Default thumb color.
    pub const HOLO_BLUE: Color = Color::new(0.2, 0.709_803_9, 0.898_039_2, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new `Color` from a packed `0xAARRGGBB` value, the layout
    /// platform color resources use.
    ///
    /// ```
    /// use seekbar_ui::Color;
    ///
    /// let c = Color::from_argb_u32(0xFF33B5E5);
    /// assert_eq!(c.to_argb_u32(), 0xFF33B5E5);
    /// ```
    #[inline]
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Packs the color back into `0xAARRGGBB`.
    pub fn to_argb_u32(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([
            channel(self.a),
            channel(self.r),
            channel(self.g),
            channel(self.b),
        ])
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_pack_to_platform_values() {
        assert_eq!(Color::LIGHT_GRAY.to_argb_u32(), 0xFFCCCCCC);
        assert_eq!(Color::HOLO_BLUE.to_argb_u32(), 0xFF33B5E5);
        assert_eq!(Color::WHITE.to_argb_u32(), 0xFFFFFFFF);
    }

    #[test]
    fn test_from_argb_reads_alpha_first() {
        let c = Color::from_argb_u32(0x80FF0000);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }
}
