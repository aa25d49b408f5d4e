//! The horizontal bar and its tick geometry.
//!
//! A [`Track`] is rebuilt whenever the control's size or tick count changes.
//! Mapping between x-coordinates and tick indices is a pure function of its
//! fields.

use seekbar_ui::{Color, Dp, DrawSurface, PxPosition, Stroke};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Radius of the dot drawn for each tick when [`TickMark::Dot`] is used.
pub const TICK_DOT_RADIUS: Dp = Dp(5.0);

/// How a single tick is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickMark {
    /// A vertical line of the tick height, centred on the bar.
    #[default]
    Line,
    /// A filled dot centred on the bar.
    Dot,
}

/// The underlying bar, without thumbs.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    left_x: f32,
    right_x: f32,
    y: f32,
    segments: usize,
    tick_distance: f32,
    tick_height: f32,
    stroke: Stroke,
    tick_mark: TickMark,
}

impl Track {
    /// Creates a track starting at `origin_x` and spanning `length` pixels.
    ///
    /// `tick_count` must be at least 2; controls validate it before building a
    /// track.
    pub fn new(
        origin_x: f32,
        center_y: f32,
        length: f32,
        tick_count: usize,
        tick_height: Dp,
        bar_weight: f32,
        bar_color: Color,
    ) -> Self {
        debug_assert!(tick_count >= 2, "track needs at least two ticks");
        let segments = tick_count.saturating_sub(1).max(1);
        Self {
            left_x: origin_x,
            right_x: origin_x + length,
            y: center_y,
            segments,
            tick_distance: length / segments as f32,
            tick_height: tick_height.to_pixels_f32(),
            stroke: Stroke::new(bar_color, bar_weight),
            tick_mark: TickMark::Line,
        }
    }

    /// Sets how ticks are drawn.
    pub fn with_tick_mark(mut self, tick_mark: TickMark) -> Self {
        self.tick_mark = tick_mark;
        self
    }

    /// X-coordinate of the left end of the bar.
    pub fn left_x(&self) -> f32 {
        self.left_x
    }

    /// X-coordinate of the right end of the bar.
    pub fn right_x(&self) -> f32 {
        self.right_x
    }

    /// Y-coordinate of the bar.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Number of ticks, including both ends.
    pub fn tick_count(&self) -> usize {
        self.segments + 1
    }

    /// Distance between two neighbouring ticks.
    pub fn tick_distance(&self) -> f32 {
        self.tick_distance
    }

    /// Index of the tick nearest to `x`.
    ///
    /// Ties go to the higher index: the distance is offset by half a tick and
    /// truncated, so a point exactly between two ticks snaps right. The result
    /// is clamped to the valid index range.
    pub fn nearest_tick_index(&self, x: f32) -> usize {
        if self.tick_distance <= 0.0 {
            return 0;
        }
        let raw = ((x - self.left_x + self.tick_distance / 2.0) / self.tick_distance) as i64;
        raw.clamp(0, self.segments as i64) as usize
    }

    /// X-coordinate of the tick nearest to `x`.
    pub fn nearest_tick_coordinate(&self, x: f32) -> f32 {
        self.tick_coordinate(self.nearest_tick_index(x))
    }

    /// X-coordinate of the tick at `index`.
    ///
    /// The last tick is the right end of the bar itself, not an accumulated
    /// multiple of the tick distance.
    pub fn tick_coordinate(&self, index: usize) -> f32 {
        if index >= self.segments {
            self.right_x
        } else {
            self.left_x + index as f32 * self.tick_distance
        }
    }

    /// X-coordinates of every tick, left to right.
    pub fn tick_coordinates(&self) -> SmallVec<[f32; 16]> {
        (0..=self.segments).map(|i| self.tick_coordinate(i)).collect()
    }

    /// Returns `true` if `x` lies on the bar, ends included.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left_x && x <= self.right_x
    }

    /// Changes the number of ticks in place, keeping both ends.
    pub fn set_tick_count(&mut self, tick_count: usize) {
        debug_assert!(tick_count >= 2, "track needs at least two ticks");
        let length = self.right_x - self.left_x;
        self.segments = tick_count.saturating_sub(1).max(1);
        self.tick_distance = length / self.segments as f32;
    }

    /// Draws the bar and one mark per tick.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.draw_line(
            PxPosition::new(self.left_x, self.y),
            PxPosition::new(self.right_x, self.y),
            self.stroke,
        );
        for x in self.tick_coordinates() {
            self.draw_tick(surface, x);
        }
    }

    fn draw_tick(&self, surface: &mut dyn DrawSurface, x: f32) {
        match self.tick_mark {
            TickMark::Line => {
                let half = self.tick_height / 2.0;
                surface.draw_line(
                    PxPosition::new(x, self.y - half),
                    PxPosition::new(x, self.y + half),
                    self.stroke,
                );
            }
            TickMark::Dot => {
                surface.fill_circle(
                    PxPosition::new(x, self.y),
                    TICK_DOT_RADIUS.to_pixels_rounded() as f32,
                    self.stroke.color,
                );
            }
        }
    }
}
