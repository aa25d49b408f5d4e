//! Style configuration shared by both seek bar variants.

use derive_setters::Setters;
use seekbar_ui::{Color, Dp, ImageRef};

use crate::{thumb::ThumbAppearance, track::TickMark};

/// Tick count used when none (or an invalid one) is configured.
pub const DEFAULT_TICK_COUNT: usize = 3;
/// Default height of a tick mark.
pub const DEFAULT_TICK_HEIGHT: Dp = Dp(24.0);
/// Default weight of the bar line and tick lines, in pixels.
pub const DEFAULT_BAR_WEIGHT: f32 = 2.0;
/// Default weight of the connecting line, in pixels.
pub const DEFAULT_CONNECTING_LINE_WEIGHT: f32 = 4.0;
/// Default thumb label text size.
pub const DEFAULT_LABEL_SIZE: Dp = Dp(14.0);

/// Recognized style options for a seek bar.
///
/// # Examples
///
/// ```
/// use seekbar_components::{SeekBarStyle, TickMark};
/// use seekbar_ui::{Color, Dp};
///
/// let style = SeekBarStyle::default()
///     .tick_count(5)
///     .tick_mark(TickMark::Dot)
///     .thumb_radius(Dp(12.0))
///     .thumb_color_pressed(Color::WHITE);
/// assert_eq!(style.tick_count, 5);
/// assert_eq!(style.thumb_radius, Some(Dp(12.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SeekBarStyle {
    /// Number of ticks, including both ends. Must be at least 2.
    pub tick_count: usize,
    /// Height of each tick mark.
    pub tick_height: Dp,
    /// How tick marks are drawn.
    pub tick_mark: TickMark,
    /// Weight of the bar and tick lines, in pixels.
    pub bar_weight: f32,
    /// Color of the bar and tick marks.
    pub bar_color: Color,
    /// Weight of the line between the thumbs, in pixels.
    pub connecting_line_weight: f32,
    /// Color of the line between the thumbs.
    pub connecting_line_color: Color,
    /// Draw thumbs as circles of this radius. `None` draws the thumb images.
    #[setters(strip_option)]
    pub thumb_radius: Option<Dp>,
    /// Circle color when not pressed. `None` uses [`Color::HOLO_BLUE`].
    #[setters(strip_option)]
    pub thumb_color_normal: Option<Color>,
    /// Circle color while pressed. `None` uses [`Color::HOLO_BLUE`].
    #[setters(strip_option)]
    pub thumb_color_pressed: Option<Color>,
    /// Thumb image when not pressed.
    #[setters(strip_option)]
    pub thumb_image_normal: Option<ImageRef>,
    /// Thumb image while pressed.
    #[setters(strip_option)]
    pub thumb_image_pressed: Option<ImageRef>,
    /// Size of the text drawn on a labelled thumb.
    pub label_size: Dp,
    /// Color of the text drawn on a labelled thumb.
    pub label_color: Color,
}

impl SeekBarStyle {
    /// Resolves the thumb-related fields into what [`crate::Thumb`] needs.
    pub fn thumb_appearance(&self) -> ThumbAppearance {
        ThumbAppearance {
            radius: self.thumb_radius,
            color_normal: self.thumb_color_normal.unwrap_or(Color::HOLO_BLUE),
            color_pressed: self.thumb_color_pressed.unwrap_or(Color::HOLO_BLUE),
            image_normal: self.thumb_image_normal,
            image_pressed: self.thumb_image_pressed,
        }
    }
}

impl Default for SeekBarStyle {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            tick_height: DEFAULT_TICK_HEIGHT,
            tick_mark: TickMark::Line,
            bar_weight: DEFAULT_BAR_WEIGHT,
            bar_color: Color::LIGHT_GRAY,
            connecting_line_weight: DEFAULT_CONNECTING_LINE_WEIGHT,
            connecting_line_color: Color::LIGHT_GRAY,
            thumb_radius: None,
            thumb_color_normal: None,
            thumb_color_pressed: None,
            thumb_image_normal: None,
            thumb_image_pressed: None,
            label_size: DEFAULT_LABEL_SIZE,
            label_color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_thumb_colors_resolve_to_holo_blue() {
        let appearance = SeekBarStyle::default().thumb_appearance();
        assert_eq!(appearance.color_normal, Color::HOLO_BLUE);
        assert_eq!(appearance.color_pressed, Color::HOLO_BLUE);
        assert_eq!(appearance.radius, None);
    }

    #[test]
    fn setters_override_defaults() {
        let image = ImageRef::new(3, 24, 24);
        let style = SeekBarStyle::default()
            .bar_weight(3.0)
            .thumb_color_normal(Color::BLACK)
            .thumb_image_normal(image);
        let appearance = style.thumb_appearance();
        assert_eq!(style.bar_weight, 3.0);
        assert_eq!(appearance.color_normal, Color::BLACK);
        assert_eq!(appearance.image_normal, Some(image));
    }
}
