//! Discrete seek bars whose thumbs snap to evenly spaced ticks.
//!
//! Two controls are provided:
//!
//! - [`SlidingSeekBar`]: two thumbs selecting a range of ticks.
//! - [`TextSeekBar`]: one labelled thumb selecting a single tick.
//!
//! Both are plain state machines. They never draw or schedule anything on
//! their own: the host feeds them sizes and pointer events, draws them onto a
//! [`seekbar_ui::DrawSurface`], and drains [`seekbar_ui::HostRequests`] to
//! learn when to redraw or re-layout.
//!
//! The building blocks ([`Track`], [`Thumb`], [`ConnectingLine`]) are public
//! so hosts can reuse the snapping geometry directly.

pub mod connecting_line;
pub mod error;
pub mod seek_bar;
pub mod state;
pub mod style;
pub mod thumb;
pub mod track;

pub use crate::{
    connecting_line::ConnectingLine,
    error::SeekBarError,
    seek_bar::{
        DEFAULT_HEIGHT, DEFAULT_WIDTH, IndexChange, MeasureSpec, NO_RIGHT_INDEX, SlidingSeekBar,
        TextSeekBar, ThumbSlot, measure,
    },
    state::SavedState,
    style::SeekBarStyle,
    thumb::{Thumb, ThumbAppearance, ThumbLabel},
    track::{TickMark, Track},
};
