//! Physical pixel positions and sizes.
//!
//! Pointer coordinates and thumb positions are continuous, so unlike a
//! layout engine that works in whole pixels these types carry `f32` values.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the control
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! ```
//! use seekbar_ui::px::{PxPosition, PxSize};
//!
//! let size = PxSize::new(320.0, 100.0);
//! assert!(!size.is_empty());
//! assert_eq!(PxPosition::ZERO, PxPosition::new(0.0, 0.0));
//! ```

/// A position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl PxSize {
    /// An empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_empty() {
        assert!(PxSize::ZERO.is_empty());
        assert!(PxSize::new(100.0, 0.0).is_empty());
        assert!(!PxSize::new(1.0, 1.0).is_empty());
    }
}
