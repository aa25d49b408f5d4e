//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for sizes that should look the same on
//! screens of different pixel density: tick heights, thumb radii and the
//! minimum touch target of a seek bar are all specified in dp.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. Hosts call [`set_scale_factor`]
//! once they know the display density; until then one dp is one pixel.
//!
//! ## Usage
//!
//! ```
//! use seekbar_ui::Dp;
//!
//! let tick_height = Dp(24.0);
//! let pixels = tick_height.to_pixels_f32();
//! let back = Dp::from_pixels_f32(pixels);
//! assert_eq!(back, tick_height);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::debug;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The scale factor is how many physical pixels correspond to one dp:
/// - `1.0`: 1 dp = 1 pixel (standard density)
/// - `2.0`: 1 dp = 2 pixels (high density)
/// - `0.75`: 1 dp = 0.75 pixels (low density)
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor used by every dp conversion.
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(scale_factor: f64) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        debug!(scale_factor, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
    debug!(scale_factor, "scale factor updated");
}

/// Returns the current global scale factor, `1.0` when none was set.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` value that is converted to physical pixels using
/// the global [`SCALE_FACTOR`] whenever geometry needs pixel-precise values.
///
/// ```
/// use seekbar_ui::Dp;
///
/// let base = Dp(16.0);
/// let double = Dp(base.0 * 2.0);
/// assert!(double > base);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` instance with the specified value.
    ///
    /// ```
    /// use seekbar_ui::Dp;
    ///
    /// const TICK_HEIGHT: Dp = Dp::new(24.0);
    /// assert_eq!(TICK_HEIGHT.0, 24.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f32`.
    ///
    /// Geometry in the seek bar works in `f32`, so this is the conversion
    /// most callers want.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` value from physical pixels specified as an `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp((value as f64) / scale_factor())
    }

    /// Converts to whole pixels the way platform dimension helpers do:
    /// `(dp * scale + 0.5)` truncated.
    ///
    /// ```
    /// use seekbar_ui::Dp;
    ///
    /// assert_eq!(Dp(1.5).to_pixels_rounded(), 2);
    /// ```
    pub fn to_pixels_rounded(&self) -> i32 {
        (self.to_pixels_f32() + 0.5) as i32
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp::new(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_defaults_to_unit_scale() {
        // Scale factor is process-wide; only rely on the unset default here.
        if SCALE_FACTOR.get().is_none() {
            assert_eq!(Dp(24.0).to_pixels_f32(), 24.0);
            assert_eq!(Dp::from_pixels_f32(12.0), Dp(12.0));
        }
    }

    #[test]
    fn test_dp_rounding_matches_platform_helper() {
        if SCALE_FACTOR.get().is_none() {
            assert_eq!(Dp(1.4).to_pixels_rounded(), 1);
            assert_eq!(Dp(1.5).to_pixels_rounded(), 2);
            assert_eq!(Dp(5.0).to_pixels_rounded(), 5);
        }
    }

    #[test]
    fn test_dp_conversions() {
        let dp: Dp = 16.0f64.into();
        assert_eq!(dp, Dp::new(16.0));
        let dp: Dp = 8.0f32.into();
        assert_eq!(dp.0, 8.0);
    }
}
