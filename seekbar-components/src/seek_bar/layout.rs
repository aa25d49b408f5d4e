use seekbar_ui::PxSize;

use crate::{style::SeekBarStyle, track::Track};

/// Width used when the host leaves it unconstrained, in pixels.
pub const DEFAULT_WIDTH: f32 = 500.0;
/// Preferred height, in pixels. Seek bars are as short as allowed.
pub const DEFAULT_HEIGHT: f32 = 100.0;

/// Constraint the host places on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    Exactly(f32),
    AtMost(f32),
    Unspecified,
}

/// Resolves the size a seek bar wants under the given constraints.
///
/// Width grows to whatever is offered; height stays at [`DEFAULT_HEIGHT`]
/// unless the host insists on another value or allows less.
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> PxSize {
    let width = match width {
        MeasureSpec::Exactly(width) | MeasureSpec::AtMost(width) => width,
        MeasureSpec::Unspecified => DEFAULT_WIDTH,
    };
    let height = match height {
        MeasureSpec::Exactly(height) => height,
        MeasureSpec::AtMost(height) => DEFAULT_HEIGHT.min(height),
        MeasureSpec::Unspecified => DEFAULT_HEIGHT,
    };
    PxSize::new(width, height)
}

/// Where the track sits inside the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TrackGeometry {
    pub margin: f32,
    pub length: f32,
    pub center_y: f32,
}

impl TrackGeometry {
    /// Insets the track by the thumb's half-width on both sides. Returns
    /// `None` while the control is too narrow to hold a track.
    pub fn new(size: PxSize, thumb_half_width: f32) -> Option<Self> {
        let length = size.width - 2.0 * thumb_half_width;
        if !length.is_finite() || length <= 0.0 {
            return None;
        }
        Some(Self {
            margin: thumb_half_width,
            length,
            center_y: size.height / 2.0,
        })
    }

    pub fn build_track(&self, style: &SeekBarStyle) -> Track {
        Track::new(
            self.margin,
            self.center_y,
            self.length,
            style.tick_count,
            style.tick_height,
            style.bar_weight,
            style.bar_color,
        )
        .with_tick_mark(style.tick_mark)
    }
}
