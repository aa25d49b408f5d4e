//! The draggable handle.

use seekbar_ui::{Color, Dp, DrawSurface, ImageRef, PxPosition};

/// Radius used for circle thumbs when neither a radius nor an image is set.
pub const DEFAULT_THUMB_RADIUS: Dp = Dp(14.0);

/// Smallest half-extent of the touch target, whatever the thumb looks like.
pub const MINIMUM_TARGET_RADIUS: Dp = Dp(24.0);

/// The touch target is at least this many half-widths in each direction.
const TARGET_HALF_WIDTHS: f32 = 2.0;

/// Everything a thumb needs to know about how it looks.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbAppearance {
    /// Circle radius; `None` selects the image visual.
    pub radius: Option<Dp>,
    /// Circle color when not pressed.
    pub color_normal: Color,
    /// Circle color while pressed.
    pub color_pressed: Color,
    /// Image when not pressed.
    pub image_normal: Option<ImageRef>,
    /// Image while pressed; falls back to `image_normal`.
    pub image_pressed: Option<ImageRef>,
}

/// Text drawn centred on a thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbLabel {
    pub text: String,
    pub size: Dp,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
enum ThumbVisual {
    Circle {
        radius: f32,
        normal: Color,
        pressed: Color,
    },
    Image {
        normal: ImageRef,
        pressed: ImageRef,
    },
}

/// A draggable point on the track.
///
/// The thumb has no identity of its own: the owning control decides which
/// slot (left or right) it fills and may swap two thumbs while dragging.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    x: f32,
    y: f32,
    pressed: bool,
    visual: ThumbVisual,
    half_width: f32,
    target_radius: f32,
    label: Option<ThumbLabel>,
}

impl Thumb {
    /// Creates an unpressed thumb at x = 0 on the line `center_y`.
    ///
    /// Without a radius the thumb is drawn from its images; without a radius
    /// or an image it falls back to a circle of [`DEFAULT_THUMB_RADIUS`].
    pub fn new(center_y: f32, appearance: &ThumbAppearance) -> Self {
        let visual = match (appearance.radius, appearance.image_normal) {
            (None, Some(normal)) => ThumbVisual::Image {
                normal,
                pressed: appearance.image_pressed.unwrap_or(normal),
            },
            (radius, _) => ThumbVisual::Circle {
                radius: radius.unwrap_or(DEFAULT_THUMB_RADIUS).to_pixels_f32().max(0.0),
                normal: appearance.color_normal,
                pressed: appearance.color_pressed,
            },
        };
        let half_width = match &visual {
            ThumbVisual::Circle { radius, .. } => *radius,
            ThumbVisual::Image { normal, .. } => normal.half_width(),
        };
        let target_radius =
            (half_width * TARGET_HALF_WIDTHS).max(MINIMUM_TARGET_RADIUS.to_pixels_f32());

        Self {
            x: 0.0,
            y: center_y,
            pressed: false,
            visual,
            half_width,
            target_radius,
            label: None,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Half of the visible width. Controls inset the track by this much so the
    /// thumb never draws outside the view.
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Half-extent of the square hit-test area around the thumb centre.
    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Returns `true` if `(x, y)` is close enough to start dragging this thumb.
    pub fn is_in_target_zone(&self, x: f32, y: f32) -> bool {
        (x - self.x).abs() <= self.target_radius && (y - self.y).abs() <= self.target_radius
    }

    pub fn label(&self) -> Option<&ThumbLabel> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: Option<ThumbLabel>) {
        self.label = label;
    }

    /// Draws the thumb for its current pressed state, then its label.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        match &self.visual {
            ThumbVisual::Circle {
                radius,
                normal,
                pressed,
            } => {
                let color = if self.pressed { *pressed } else { *normal };
                surface.fill_circle(PxPosition::new(self.x, self.y), *radius, color);
            }
            ThumbVisual::Image { normal, pressed } => {
                let image = if self.pressed { *pressed } else { *normal };
                surface.draw_image(
                    image,
                    PxPosition::new(self.x - image.half_width(), self.y - image.half_height()),
                );
            }
        }

        if let Some(label) = &self.label {
            surface.draw_text(
                &label.text,
                PxPosition::new(self.x, self.y),
                label.size.to_pixels_f32(),
                label.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use seekbar_ui::{DrawCommand, RecordingSurface};

    use super::*;

    fn circle(radius: f64) -> ThumbAppearance {
        ThumbAppearance {
            radius: Some(Dp(radius)),
            color_normal: Color::HOLO_BLUE,
            color_pressed: Color::WHITE,
            image_normal: None,
            image_pressed: None,
        }
    }

    #[test]
    fn circle_thumb_half_width_is_radius() {
        let thumb = Thumb::new(50.0, &circle(10.0));
        assert_eq!(thumb.half_width(), 10.0);
        assert_eq!(thumb.y(), 50.0);
        assert!(!thumb.is_pressed());
    }

    #[test]
    fn image_thumb_uses_image_size() {
        let appearance = ThumbAppearance {
            radius: None,
            image_normal: Some(ImageRef::new(1, 30, 40)),
            ..circle(0.0)
        };
        let thumb = Thumb::new(20.0, &appearance);
        assert_eq!(thumb.half_width(), 15.0);
        assert_eq!(thumb.target_radius(), 30.0);
    }

    #[test]
    fn missing_image_falls_back_to_default_circle() {
        let appearance = ThumbAppearance {
            radius: None,
            ..circle(0.0)
        };
        let thumb = Thumb::new(0.0, &appearance);
        assert_eq!(thumb.half_width(), DEFAULT_THUMB_RADIUS.to_pixels_f32());
    }

    #[test]
    fn target_zone_is_larger_than_the_thumb() {
        let mut thumb = Thumb::new(50.0, &circle(20.0));
        thumb.set_x(100.0);
        assert_eq!(thumb.target_radius(), 40.0);
        assert!(thumb.is_in_target_zone(139.0, 50.0));
        assert!(thumb.is_in_target_zone(100.0, 89.0));
        assert!(!thumb.is_in_target_zone(141.0, 50.0));
        assert!(!thumb.is_in_target_zone(100.0, 9.0));

        // Small thumbs still get the minimum target.
        let small = Thumb::new(0.0, &circle(2.0));
        assert_eq!(small.target_radius(), MINIMUM_TARGET_RADIUS.to_pixels_f32());
    }

    #[test]
    fn press_and_release_are_idempotent() {
        let mut thumb = Thumb::new(0.0, &circle(5.0));
        thumb.press();
        thumb.press();
        assert!(thumb.is_pressed());
        thumb.release();
        thumb.release();
        assert!(!thumb.is_pressed());
    }

    #[test]
    fn draw_reflects_pressed_state() {
        let mut thumb = Thumb::new(50.0, &circle(8.0));
        thumb.set_x(30.0);

        let mut surface = RecordingSurface::new();
        thumb.draw(&mut surface);
        thumb.press();
        thumb.draw(&mut surface);

        let colors: Vec<_> = surface.circles().map(|(_, _, color)| color).collect();
        assert_eq!(colors, vec![Color::HOLO_BLUE, Color::WHITE]);
    }

    #[test]
    fn image_thumb_draws_centered_image_and_label() {
        let normal = ImageRef::new(1, 20, 10);
        let pressed = ImageRef::new(2, 20, 10);
        let appearance = ThumbAppearance {
            radius: None,
            image_normal: Some(normal),
            image_pressed: Some(pressed),
            ..circle(0.0)
        };
        let mut thumb = Thumb::new(50.0, &appearance);
        thumb.set_x(100.0);
        thumb.set_label(Some(ThumbLabel {
            text: "go".into(),
            size: Dp(12.0),
            color: Color::WHITE,
        }));
        thumb.press();

        let mut surface = RecordingSurface::new();
        thumb.draw(&mut surface);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Image {
                image: pressed,
                top_left: PxPosition::new(90.0, 45.0),
            }
        );
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["go"]);
    }
}
