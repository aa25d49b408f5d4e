//! Discrete seek bars built from a [`Track`](crate::Track), one or two
//! [`Thumb`](crate::Thumb)s and a [`ConnectingLine`](crate::ConnectingLine).
//!
//! ## Usage
//!
//! - [`SlidingSeekBar`] selects a range with two thumbs.
//! - [`TextSeekBar`] selects a single tick with one labelled thumb.
//!
//! Both controls are driven the same way: the host reports the laid-out size
//! with `set_size`, forwards pointer events to `handle_event`, draws with
//! `draw`, and drains [`HostRequests`] with `take_requests` after each call.
//! Index changes are reported synchronously through a single listener.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use seekbar_components::{IndexChange, SeekBarStyle, SlidingSeekBar};
//! use seekbar_ui::{CursorEvent, PxSize};
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&changes);
//!
//! let mut bar = SlidingSeekBar::new(SeekBarStyle::default().tick_count(5));
//! bar.set_on_index_change(move |change: IndexChange| sink.lock().unwrap().push(change));
//! bar.set_size(PxSize::new(128.0, 100.0));
//!
//! // The track runs from x = 14 to x = 114; press the left thumb and drag it.
//! bar.handle_event(CursorEvent::pressed(14.0, 50.0));
//! bar.handle_event(CursorEvent::moved(52.0, 50.0));
//! bar.handle_event(CursorEvent::released(52.0, 50.0));
//!
//! assert_eq!(bar.left_index(), 2);
//! assert_eq!(changes.lock().unwrap().last().map(|c| c.left_index), Some(2));
//! ```

mod interaction;
mod layout;
mod render;
mod sliding;
mod text;

use seekbar_ui::{CallbackWith, HostRequests, PxSize};
use tracing::{debug, warn};

use crate::{
    error::SeekBarError,
    style::{DEFAULT_TICK_COUNT, SeekBarStyle},
};

pub use interaction::ThumbSlot;
pub use layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MeasureSpec, measure};
pub use sliding::SlidingSeekBar;
pub use text::TextSeekBar;

/// Right index reported by single-thumb controls.
pub const NO_RIGHT_INDEX: i32 = -1;

/// Payload of the index change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexChange {
    /// Index of the left (or only) thumb.
    pub left_index: usize,
    /// Index of the right thumb; `None` for single-thumb controls.
    pub right_index: Option<usize>,
}

impl IndexChange {
    /// The right index, or [`NO_RIGHT_INDEX`] when the control has one thumb.
    pub fn right_index_or_sentinel(&self) -> i32 {
        self.right_index
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(NO_RIGHT_INDEX)
    }
}

/// State shared by both seek bar variants.
#[derive(Debug)]
struct SeekBarCore {
    style: SeekBarStyle,
    size: PxSize,
    enabled: bool,
    first_set_tick_count: bool,
    listener: Option<CallbackWith<IndexChange>>,
    requests: HostRequests,
}

impl SeekBarCore {
    fn new(mut style: SeekBarStyle) -> Self {
        if style.tick_count < 2 {
            warn!(
                tick_count = style.tick_count,
                fallback = DEFAULT_TICK_COUNT,
                "invalid tick count in style, using the default"
            );
            style.tick_count = DEFAULT_TICK_COUNT;
        }
        Self {
            style,
            size: PxSize::ZERO,
            enabled: true,
            first_set_tick_count: true,
            listener: None,
            requests: HostRequests::default(),
        }
    }

    fn tick_count(&self) -> usize {
        self.style.tick_count
    }

    fn center_y(&self) -> f32 {
        self.size.height / 2.0
    }

    fn validate_tick_count(tick_count: usize) -> Result<(), SeekBarError> {
        if tick_count < 2 {
            return Err(SeekBarError::InvalidTickCount { tick_count });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), SeekBarError> {
        if index >= self.tick_count() {
            return Err(SeekBarError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                tick_count: self.tick_count(),
            });
        }
        Ok(())
    }

    fn notify(&self, change: IndexChange) {
        debug!(
            left_index = change.left_index,
            right_index = change.right_index_or_sentinel(),
            "seek bar index changed"
        );
        if let Some(listener) = &self.listener {
            listener.call(change);
        }
    }
}
