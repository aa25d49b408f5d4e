//! A range of opening hours picked with a two-thumb seek bar.

use std::sync::Arc;

use parking_lot::Mutex;
use seekbar_components::{IndexChange, SeekBarStyle, SlidingSeekBar, ThumbSlot};
use seekbar_ui::{CursorEvent, PxSize};
use tracing::debug;

/// Hour shown at the first tick.
pub const FIRST_HOUR: usize = 9;
/// One tick per hour, both ends included.
pub const HOURS: usize = 7;

pub fn hour_label(index: usize) -> String {
    format!("{:02}:00", FIRST_HOUR + index)
}

pub struct TimerScreen {
    bar: SlidingSeekBar,
    range: Arc<Mutex<(usize, usize)>>,
}

impl TimerScreen {
    pub fn new(size: PxSize) -> Self {
        let mut bar = SlidingSeekBar::new(SeekBarStyle::default().tick_count(HOURS));
        let range = Arc::new(Mutex::new((bar.left_index(), bar.right_index())));
        Self::listen(&mut bar, &range);
        bar.set_size(size);
        Self { bar, range }
    }

    fn listen(bar: &mut SlidingSeekBar, range: &Arc<Mutex<(usize, usize)>>) {
        let sink = Arc::clone(range);
        bar.set_on_index_change(move |change: IndexChange| {
            let right = change.right_index.unwrap_or(change.left_index);
            debug!(
                from = %hour_label(change.left_index),
                to = %hour_label(right),
                "opening hours changed"
            );
            *sink.lock() = (change.left_index, right);
        });
    }

    pub fn bar(&self) -> &SlidingSeekBar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut SlidingSeekBar {
        &mut self.bar
    }

    /// The range last reported to the listener.
    pub fn selected_range(&self) -> (usize, usize) {
        *self.range.lock()
    }

    pub fn selected_hours(&self) -> (String, String) {
        let (from, to) = self.selected_range();
        (hour_label(from), hour_label(to))
    }

    /// Presses the thumb in `slot`, drags it to the tick at `index` and lets
    /// go. Returns `false` if the bar has not been laid out.
    pub fn drag_thumb_to(&mut self, slot: ThumbSlot, index: usize) -> bool {
        let (Some(track), Some(thumb)) = (self.bar.track(), self.bar.thumb(slot)) else {
            return false;
        };
        let (from, to, y) = (thumb.x(), track.tick_coordinate(index), thumb.y());
        self.bar.handle_event(CursorEvent::pressed(from, y));
        self.bar.handle_event(CursorEvent::moved(to, y));
        self.bar.handle_event(CursorEvent::released(to, y));
        true
    }

    /// Recreates the screen's bar from a saved snapshot, keeping the listener.
    pub fn replace_bar(&mut self, mut bar: SlidingSeekBar) {
        Self::listen(&mut bar, &self.range);
        self.bar = bar;
    }
}
