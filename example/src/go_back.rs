//! A two-tick text seek bar used as a go/back toggle. The thumb label names
//! the trip currently selected.

use std::sync::Arc;

use parking_lot::Mutex;
use seekbar_components::{IndexChange, TextSeekBar};
use seekbar_ui::{CursorEvent, PxSize};
use tracing::info;

pub const GO: &str = "Go";
pub const BACK: &str = "Back";

pub fn label_for(index: usize) -> &'static str {
    if index == 0 { GO } else { BACK }
}

pub struct GoBackScreen {
    bar: TextSeekBar,
    // The listener cannot touch the bar it is attached to, so it parks the
    // new index here and the screen applies it after the event.
    pending: Arc<Mutex<Option<usize>>>,
}

impl GoBackScreen {
    pub fn new(size: PxSize) -> Self {
        let mut bar = TextSeekBar::new(TextSeekBar::default_style().tick_count(2));
        bar.set_label(label_for(0));

        let pending = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&pending);
        bar.set_on_index_change(move |change: IndexChange| {
            *sink.lock() = Some(change.left_index);
        });
        bar.set_size(size);

        Self { bar, pending }
    }

    pub fn bar(&self) -> &TextSeekBar {
        &self.bar
    }

    /// Forwards a pointer event and refreshes the label if the index moved.
    pub fn dispatch(&mut self, event: CursorEvent) -> bool {
        let consumed = self.bar.handle_event(event);
        let pending = self.pending.lock().take();
        if let Some(index) = pending {
            let label = label_for(index);
            info!(index, label, "go/back toggled");
            self.bar.set_label(label);
        }
        consumed
    }

    /// Taps the control at `x`, half way down.
    pub fn tap(&mut self, x: f32) {
        let y = self.bar.size().height / 2.0;
        self.dispatch(CursorEvent::pressed(x, y));
        self.dispatch(CursorEvent::released(x, y));
    }
}
