//! Abstract drawing target.
//!
//! Controls never touch pixels. They describe what to draw through
//! [`DrawSurface`], which the host implements on top of its canvas. The
//! [`RecordingSurface`] implementation captures the calls as
//! [`DrawCommand`]s, which is what tests and headless hosts use.

use smallvec::SmallVec;

use crate::{color::Color, px::PxPosition};

/// Paint used for strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Creates a stroke paint.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// An opaque reference to a host-loaded image.
///
/// The control only needs the pixel size the host resolved for the image;
/// decoding and caching stay on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    /// Host asset identifier.
    pub id: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl ImageRef {
    /// Creates an image reference.
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Half of the image width in pixels.
    pub fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    /// Half of the image height in pixels.
    pub fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }
}

/// The drawing capability a host provides to controls.
pub trait DrawSurface {
    /// Strokes a straight line from `from` to `to`.
    fn draw_line(&mut self, from: PxPosition, to: PxPosition, stroke: Stroke);

    /// Fills a circle.
    fn fill_circle(&mut self, center: PxPosition, radius: f32, color: Color);

    /// Draws an image with its top-left corner at `top_left`.
    fn draw_image(&mut self, image: ImageRef, top_left: PxPosition);

    /// Draws text horizontally centred on `center.x` with its baseline
    /// vertically centred on `center.y`.
    fn draw_text(&mut self, text: &str, center: PxPosition, size: f32, color: Color);
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`DrawSurface::draw_line`].
    Line {
        from: PxPosition,
        to: PxPosition,
        stroke: Stroke,
    },
    /// See [`DrawSurface::fill_circle`].
    Circle {
        center: PxPosition,
        radius: f32,
        color: Color,
    },
    /// See [`DrawSurface::draw_image`].
    Image { image: ImageRef, top_left: PxPosition },
    /// See [`DrawSurface::draw_text`].
    Text {
        text: String,
        center: PxPosition,
        size: f32,
        color: Color,
    },
}

/// A [`DrawSurface`] that records every call in order.
///
/// ```
/// use seekbar_ui::{Color, DrawSurface, RecordingSurface, px::PxPosition};
///
/// let mut surface = RecordingSurface::new();
/// surface.fill_circle(PxPosition::new(10.0, 10.0), 4.0, Color::WHITE);
/// assert_eq!(surface.commands().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: SmallVec<[DrawCommand; 16]>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        self.commands.drain(..).collect()
    }

    /// Iterates over the recorded lines.
    pub fn lines(&self) -> impl Iterator<Item = (PxPosition, PxPosition, Stroke)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    /// Iterates over the recorded circles.
    pub fn circles(&self) -> impl Iterator<Item = (PxPosition, f32, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Iterates over the recorded texts.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, from: PxPosition, to: PxPosition, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: PxPosition, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageRef, top_left: PxPosition) {
        self.commands.push(DrawCommand::Image { image, top_left });
    }

    fn draw_text(&mut self, text: &str, center: PxPosition, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            center,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        let stroke = Stroke::new(Color::BLACK, 2.0);
        surface.draw_line(PxPosition::ZERO, PxPosition::new(10.0, 0.0), stroke);
        surface.fill_circle(PxPosition::new(5.0, 0.0), 3.0, Color::WHITE);
        surface.draw_text("go", PxPosition::new(5.0, 0.0), 12.0, Color::BLACK);

        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.circles().count(), 1);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["go"]);
        assert!(matches!(surface.commands()[0], DrawCommand::Line { .. }));

        let taken = surface.take();
        assert_eq!(taken.len(), 3);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn image_half_extents() {
        let image = ImageRef::new(7, 30, 44);
        assert_eq!(image.half_width(), 15.0);
        assert_eq!(image.half_height(), 22.0);
    }
}
