//! Host-facing primitives for discrete seek bars.
//!
//! This crate holds everything a seek bar control shares with the host that
//! embeds it: density-independent units, colors, pointer events, the abstract
//! drawing surface, the single-slot callback type used for change listeners,
//! and the requests a control makes of its host (redraw, re-layout, gesture
//! interception).
//!
//! The controls themselves live in `seekbar-components`.
//!
//! # Drawing
//!
//! ```
//! use seekbar_ui::{Color, DrawSurface, RecordingSurface, Stroke, px::PxPosition};
//!
//! let mut surface = RecordingSurface::new();
//! surface.draw_line(
//!     PxPosition::new(0.0, 50.0),
//!     PxPosition::new(100.0, 50.0),
//!     Stroke::new(Color::LIGHT_GRAY, 2.0),
//! );
//! assert_eq!(surface.lines().count(), 1);
//! ```

pub mod color;
pub mod cursor;
pub mod dp;
pub mod draw;
pub mod prop;
pub mod px;
pub mod requests;

pub use crate::{
    color::Color,
    cursor::{CursorEvent, CursorEventContent},
    dp::Dp,
    draw::{DrawCommand, DrawSurface, ImageRef, RecordingSurface, Stroke},
    prop::{CallbackWith, Slot},
    px::{PxPosition, PxSize},
    requests::HostRequests,
};
