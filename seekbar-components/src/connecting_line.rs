//! The line drawn between two thumbs.

use seekbar_ui::{Color, DrawSurface, PxPosition, Stroke};

use crate::thumb::Thumb;

/// Stateless helper that draws the selected range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectingLine {
    y: f32,
    stroke: Stroke,
}

impl ConnectingLine {
    pub fn new(y: f32, weight: f32, color: Color) -> Self {
        Self {
            y,
            stroke: Stroke::new(color, weight),
        }
    }

    /// Draws the segment between the two thumbs' current x on the shared y.
    pub fn draw(&self, surface: &mut dyn DrawSurface, left: &Thumb, right: &Thumb) {
        self.draw_between(surface, left.x(), right.x());
    }

    /// Draws the segment between two arbitrary x-coordinates.
    pub fn draw_between(&self, surface: &mut dyn DrawSurface, from_x: f32, to_x: f32) {
        surface.draw_line(
            PxPosition::new(from_x, self.y),
            PxPosition::new(to_x, self.y),
            self.stroke,
        );
    }
}

#[cfg(test)]
mod tests {
    use seekbar_ui::{Dp, RecordingSurface};

    use super::*;
    use crate::thumb::ThumbAppearance;

    #[test]
    fn draws_between_thumbs() {
        let appearance = ThumbAppearance {
            radius: Some(Dp(4.0)),
            color_normal: Color::BLACK,
            color_pressed: Color::BLACK,
            image_normal: None,
            image_pressed: None,
        };
        let mut left = Thumb::new(30.0, &appearance);
        let mut right = Thumb::new(30.0, &appearance);
        left.set_x(10.0);
        right.set_x(70.0);

        let line = ConnectingLine::new(30.0, 4.0, Color::LIGHT_GRAY);
        let mut surface = RecordingSurface::new();
        line.draw(&mut surface, &left, &right);

        let (from, to, stroke) = surface.lines().next().expect("one line");
        assert_eq!(from, PxPosition::new(10.0, 30.0));
        assert_eq!(to, PxPosition::new(70.0, 30.0));
        assert_eq!(stroke, Stroke::new(Color::LIGHT_GRAY, 4.0));
    }
}
