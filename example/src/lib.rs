//! Headless walk-through of the seek bar controls.
//!
//! Two screens are driven with synthetic pointer events: a go/back toggle
//! built on [`TextSeekBar`](seekbar_components::TextSeekBar) and an
//! opening-hours picker built on
//! [`SlidingSeekBar`](seekbar_components::SlidingSeekBar). The picker is then
//! saved to JSON and restored into a fresh control, the way a host would
//! across a restart.

pub mod go_back;
pub mod timer;

use seekbar_components::{MeasureSpec, SavedState, SeekBarError, SlidingSeekBar, ThumbSlot, measure};
use seekbar_ui::RecordingSurface;
use tracing::info;

use crate::{go_back::GoBackScreen, timer::TimerScreen};

/// What the walk-through ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub go_back_label: String,
    pub hours: (String, String),
    pub restored_hours: (String, String),
    pub saved_json: String,
    pub draw_commands: usize,
}

pub fn run_demo() -> Result<DemoReport, SeekBarError> {
    let size = measure(MeasureSpec::AtMost(360.0), MeasureSpec::Unspecified);
    info!(width = size.width, height = size.height, "measured seek bars");

    let mut go_back = GoBackScreen::new(size);
    let right_end = go_back.bar().track().map_or(size.width, |track| track.right_x());
    go_back.tap(right_end);
    let go_back_label = go_back.bar().label().unwrap_or_default().to_owned();

    let mut timer = TimerScreen::new(size);
    timer.drag_thumb_to(ThumbSlot::Left, 2);
    timer.drag_thumb_to(ThumbSlot::Right, 5);
    // Dragging the right thumb below the left one swaps them.
    timer.drag_thumb_to(ThumbSlot::Right, 1);
    let hours = timer.selected_hours();
    info!(from = %hours.0, to = %hours.1, "opening hours selected");

    let mut surface = RecordingSurface::new();
    go_back.bar().draw(&mut surface);
    timer.bar().draw(&mut surface);
    let draw_commands = surface.commands().len();

    let saved_json = timer.bar().save_state().to_json()?;
    let state = SavedState::from_json(&saved_json)?;
    timer.replace_bar(SlidingSeekBar::default());
    timer.bar_mut().restore_state(&state);
    timer.bar_mut().set_size(size);
    let restored_hours = timer.selected_hours();
    info!(json = %saved_json, "restored opening hours from saved state");

    Ok(DemoReport {
        go_back_label,
        hours,
        restored_hours,
        saved_json,
        draw_commands,
    })
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn desktop_main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let report = run_demo()?;
    info!(
        label = %report.go_back_label,
        from = %report.restored_hours.0,
        to = %report.restored_hours.1,
        draw_commands = report.draw_commands,
        "demo finished"
    );
    Ok(())
}
