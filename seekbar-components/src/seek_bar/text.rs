use seekbar_ui::{
    CallbackWith, Color, CursorEvent, CursorEventContent, Dp, DrawSurface, HostRequests, ImageRef,
    PxSize,
};
use tracing::{debug, trace, warn};

use super::{
    IndexChange, SeekBarCore,
    interaction::{self, DragState, ThumbSlot},
    layout::TrackGeometry,
    render,
};
use crate::{
    connecting_line::ConnectingLine,
    error::SeekBarError,
    state::{SavedState, checked_index},
    style::SeekBarStyle,
    thumb::{Thumb, ThumbLabel},
    track::{TickMark, Track},
};

#[derive(Debug)]
struct SingleParts {
    track: Track,
    thumb: Thumb,
    line: ConnectingLine,
}

/// A seek bar with a single labelled thumb.
///
/// Besides dragging the thumb, tapping anywhere on the control moves the
/// thumb to the nearest tick under the tap. Ticks are drawn as dots by
/// default.
#[derive(Debug)]
pub struct TextSeekBar {
    core: SeekBarCore,
    index: usize,
    label: Option<String>,
    drag: DragState,
    parts: Option<SingleParts>,
}

impl Default for TextSeekBar {
    fn default() -> Self {
        Self::new(Self::default_style())
    }
}

impl TextSeekBar {
    /// The default style with dot ticks.
    pub fn default_style() -> SeekBarStyle {
        SeekBarStyle::default().tick_mark(TickMark::Dot)
    }

    pub fn new(style: SeekBarStyle) -> Self {
        Self {
            core: SeekBarCore::new(style),
            index: 0,
            label: None,
            drag: DragState::Idle,
            parts: None,
        }
    }

    /// Sets the listener, replacing any previous one. The reported right
    /// index is always `None`.
    ///
    /// The listener receives the new index but not the control. It runs
    /// while the control is mid-update, so callers that want to react by
    /// changing the control (a new label, say) apply those changes after the
    /// triggering call returns.
    pub fn set_on_index_change(&mut self, listener: impl Into<CallbackWith<IndexChange>>) {
        self.core.listener = Some(listener.into());
    }

    pub fn clear_on_index_change(&mut self) {
        self.core.listener = None;
    }

    pub fn style(&self) -> &SeekBarStyle {
        &self.core.style
    }

    pub fn tick_count(&self) -> usize {
        self.core.tick_count()
    }

    /// Index of the thumb.
    pub fn left_index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> PxSize {
        self.core.size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    pub fn track(&self) -> Option<&Track> {
        self.parts.as_ref().map(|parts| &parts.track)
    }

    pub fn thumb(&self) -> Option<&Thumb> {
        self.parts.as_ref().map(|parts| &parts.thumb)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the text drawn on the thumb.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
        self.refresh_label();
    }

    pub fn clear_label(&mut self) {
        self.label = None;
        self.refresh_label();
    }

    pub fn set_label_size(&mut self, size: Dp) {
        self.core.style.label_size = size;
        self.refresh_label();
    }

    pub fn set_label_color(&mut self, color: Color) {
        self.core.style.label_color = color;
        self.refresh_label();
    }

    fn thumb_label(&self) -> Option<ThumbLabel> {
        self.label.as_ref().map(|text| ThumbLabel {
            text: text.clone(),
            size: self.core.style.label_size,
            color: self.core.style.label_color,
        })
    }

    fn refresh_label(&mut self) {
        let label = self.thumb_label();
        if let Some(parts) = self.parts.as_mut() {
            parts.thumb.set_label(label);
        }
        self.core.requests.request_redraw();
    }

    pub fn is_enabled(&self) -> bool {
        self.core.enabled
    }

    /// Enables or disables pointer input. Disabling mid-drag snaps the thumb
    /// as if the pointer had been released.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.is_dragging() {
            self.core.requests.request_disallow_intercept(false);
            self.finish_drag();
        }
        self.core.enabled = enabled;
        self.core.requests.request_redraw();
    }

    pub fn take_requests(&mut self) -> HostRequests {
        self.core.requests.take()
    }

    /// Applies a new laid-out size, notifying only if the thumb lands on a
    /// different tick.
    pub fn set_size(&mut self, size: PxSize) {
        self.core.size = size;
        self.rebuild();
        self.sync_index();
    }

    /// Changes the number of ticks.
    ///
    /// The first call after construction, or a call that leaves the index out
    /// of range, moves the thumb to the first tick and notifies the listener.
    pub fn set_tick_count(&mut self, tick_count: usize) -> Result<(), SeekBarError> {
        SeekBarCore::validate_tick_count(tick_count)?;
        self.core.style.tick_count = tick_count;
        debug!(tick_count, "seek bar tick count changed");

        if self.core.first_set_tick_count || self.index >= tick_count {
            self.index = 0;
            self.core.notify(self.index_change());
        }
        self.rebuild();
        self.core.first_set_tick_count = false;
        Ok(())
    }

    /// Moves the thumb to the given tick.
    pub fn set_thumb_index(&mut self, index: usize) -> Result<(), SeekBarError> {
        self.core.check_index(index)?;
        self.apply_index(index);
        Ok(())
    }

    fn apply_index(&mut self, index: usize) {
        self.index = index;
        self.core.first_set_tick_count = false;
        self.rebuild();
        self.core.notify(self.index_change());
        self.core.requests.request_layout();
    }

    pub fn set_tick_height(&mut self, tick_height: Dp) {
        self.restyle(|style| style.tick_height = tick_height);
    }

    pub fn set_tick_mark(&mut self, tick_mark: TickMark) {
        self.restyle(|style| style.tick_mark = tick_mark);
    }

    pub fn set_bar_weight(&mut self, bar_weight: f32) {
        self.restyle(|style| style.bar_weight = bar_weight);
    }

    pub fn set_bar_color(&mut self, bar_color: Color) {
        self.restyle(|style| style.bar_color = bar_color);
    }

    pub fn set_connecting_line_weight(&mut self, weight: f32) {
        self.restyle_line(|style| style.connecting_line_weight = weight);
    }

    pub fn set_connecting_line_color(&mut self, color: Color) {
        self.restyle_line(|style| style.connecting_line_color = color);
    }

    /// Sets the circle radius, or `None` to draw the thumb images.
    pub fn set_thumb_radius(&mut self, radius: Option<Dp>) {
        self.restyle(|style| style.thumb_radius = radius);
    }

    pub fn set_thumb_color_normal(&mut self, color: Color) {
        self.restyle(|style| style.thumb_color_normal = Some(color));
    }

    pub fn set_thumb_color_pressed(&mut self, color: Color) {
        self.restyle(|style| style.thumb_color_pressed = Some(color));
    }

    pub fn set_thumb_image_normal(&mut self, image: Option<ImageRef>) {
        self.restyle(|style| style.thumb_image_normal = image);
    }

    pub fn set_thumb_image_pressed(&mut self, image: Option<ImageRef>) {
        self.restyle(|style| style.thumb_image_pressed = image);
    }

    fn restyle(&mut self, update: impl FnOnce(&mut SeekBarStyle)) {
        update(&mut self.core.style);
        self.rebuild();
    }

    fn restyle_line(&mut self, update: impl FnOnce(&mut SeekBarStyle)) {
        update(&mut self.core.style);
        let style = &self.core.style;
        if let Some(parts) = self.parts.as_mut() {
            parts.line = ConnectingLine::new(
                parts.track.y(),
                style.connecting_line_weight,
                style.connecting_line_color,
            );
        }
        self.core.requests.request_redraw();
    }

    /// Feeds one pointer event through the touch state machine.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: CursorEvent) -> bool {
        if !self.core.enabled {
            return false;
        }
        let Some(parts) = self.parts.as_mut() else {
            trace!("seek bar has no geometry yet, ignoring pointer event");
            return false;
        };
        let CursorEvent { position, content } = event;
        trace!(?content, x = position.x, y = position.y, "seek bar pointer event");

        match content {
            CursorEventContent::Pressed => {
                if self.drag == DragState::Idle
                    && interaction::resolve_press(&parts.thumb, None, position.x, position.y)
                        .is_some()
                {
                    parts.thumb.press();
                    self.drag = DragState::Dragging(ThumbSlot::Left);
                    self.core.first_set_tick_count = false;
                    self.core.requests.request_redraw();
                    debug!("seek bar drag started");
                }
            }
            CursorEventContent::Moved => {
                self.core.requests.request_disallow_intercept(true);
                if self.drag != DragState::Idle {
                    if let Some(x) = interaction::drag_target(&parts.track, position.x) {
                        parts.thumb.set_x(x);
                        self.core.requests.request_redraw();
                    }
                    self.sync_index();
                }
            }
            CursorEventContent::Released => {
                self.core.requests.request_disallow_intercept(false);
                if self.is_dragging() {
                    self.finish_drag();
                } else {
                    self.jump_to(position.x);
                }
            }
            CursorEventContent::Cancelled => {
                self.core.requests.request_disallow_intercept(false);
                self.finish_drag();
            }
        }
        true
    }

    fn finish_drag(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }
        self.drag = DragState::Idle;
        if let Some(parts) = self.parts.as_mut() {
            let snapped = parts.track.nearest_tick_coordinate(parts.thumb.x());
            parts.thumb.set_x(snapped);
            parts.thumb.release();
            self.core.requests.request_redraw();
        }
        debug!("seek bar drag ended");
        self.sync_index();
    }

    /// Moves the thumb to the tick nearest a tap that did not start a drag.
    fn jump_to(&mut self, x: f32) {
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        let snapped = parts.track.nearest_tick_coordinate(x);
        parts.thumb.set_x(snapped);
        self.core.first_set_tick_count = false;
        self.core.requests.request_redraw();
        debug!(x = snapped, "seek bar thumb jumped to tap");
        self.sync_index();
    }

    fn sync_index(&mut self) {
        let Some(parts) = &self.parts else {
            return;
        };
        let index = parts.track.nearest_tick_index(parts.thumb.x());
        if index != self.index {
            self.index = index;
            self.core.notify(self.index_change());
        }
    }

    fn rebuild(&mut self) {
        self.core.requests.request_redraw();
        let style = &self.core.style;
        let mut thumb = Thumb::new(self.core.center_y(), &style.thumb_appearance());

        let Some(geometry) = TrackGeometry::new(self.core.size, thumb.half_width()) else {
            if !self.core.size.is_empty() {
                warn!(
                    width = self.core.size.width,
                    thumb_half_width = thumb.half_width(),
                    "seek bar is too narrow for its thumb, deferring layout"
                );
            }
            self.parts = None;
            self.drag = DragState::Idle;
            return;
        };

        let track = geometry.build_track(style);
        thumb.set_x(track.tick_coordinate(self.index));
        thumb.set_label(self.thumb_label());
        if self.is_dragging() {
            thumb.press();
        }
        let line = ConnectingLine::new(
            geometry.center_y,
            style.connecting_line_weight,
            style.connecting_line_color,
        );
        debug!(
            tick_count = style.tick_count,
            index = self.index,
            "seek bar rebuilt"
        );
        self.parts = Some(SingleParts { track, thumb, line });
    }

    fn index_change(&self) -> IndexChange {
        IndexChange {
            left_index: self.index,
            right_index: None,
        }
    }

    /// Draws the bar, the line up to the thumb and the labelled thumb.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if let Some(parts) = &self.parts {
            render::draw_single(surface, &parts.track, &parts.line, &parts.thumb);
        }
    }

    /// Captures everything needed to recreate this control, label included.
    pub fn save_state(&self) -> SavedState {
        SavedState::capture(
            &self.core.style,
            self.index,
            None,
            self.core.first_set_tick_count,
            self.label.clone(),
        )
    }

    /// Restores a snapshot taken with [`TextSeekBar::save_state`], replaying
    /// the index through the same path as [`TextSeekBar::set_thumb_index`].
    pub fn restore_state(&mut self, state: &SavedState) {
        state.apply_style(&mut self.core.style);
        match state.valid_tick_count() {
            Some(tick_count) => self.core.style.tick_count = tick_count,
            None => warn!(
                tick_count = state.tick_count,
                "ignoring invalid saved tick count"
            ),
        }
        self.label = state.label.clone();

        let index = checked_index(state.left_index, self.core.tick_count()).unwrap_or_else(|err| {
            warn!(%err, "saved seek bar index is invalid, using the first tick");
            0
        });
        self.apply_index(index);
        self.core.first_set_tick_count = state.first_set_tick_count;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use seekbar_ui::RecordingSurface;

    use super::*;

    // Track from x = 14 to x = 114.
    const LEFT_X: f32 = 14.0;
    const Y: f32 = 50.0;

    fn bar(tick_count: usize) -> TextSeekBar {
        let mut bar = TextSeekBar::new(TextSeekBar::default_style().tick_count(tick_count));
        bar.set_size(PxSize::new(128.0, 100.0));
        bar
    }

    fn record(bar: &mut TextSeekBar) -> Arc<Mutex<Vec<IndexChange>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        bar.set_on_index_change(move |change: IndexChange| sink.lock().push(change));
        log
    }

    fn reported(log: &Mutex<Vec<IndexChange>>) -> Vec<(usize, i32)> {
        log.lock()
            .iter()
            .map(|change| (change.left_index, change.right_index_or_sentinel()))
            .collect()
    }

    fn thumb_x(bar: &TextSeekBar) -> f32 {
        bar.thumb().expect("laid out").x()
    }

    #[test]
    fn drag_snaps_and_reports_the_sentinel() {
        let mut bar = bar(5);
        let log = record(&mut bar);

        assert!(bar.handle_event(CursorEvent::pressed(LEFT_X, Y)));
        assert!(bar.is_dragging());
        assert!(bar.handle_event(CursorEvent::moved(LEFT_X + 37.0, Y)));
        assert!(bar.handle_event(CursorEvent::released(LEFT_X + 37.0, Y)));

        assert_eq!(bar.left_index(), 1);
        assert_eq!(thumb_x(&bar), LEFT_X + 25.0);
        assert_eq!(reported(&log), vec![(1, -1)]);
    }

    #[test]
    fn tap_away_from_the_thumb_jumps_on_release() {
        let mut bar = bar(5);
        let log = record(&mut bar);

        assert!(bar.handle_event(CursorEvent::pressed(LEFT_X + 88.0, Y)));
        assert!(!bar.is_dragging());
        assert_eq!(bar.left_index(), 0);

        assert!(bar.handle_event(CursorEvent::released(LEFT_X + 88.0, Y)));
        assert_eq!(bar.left_index(), 4);
        assert_eq!(thumb_x(&bar), 114.0);
        assert_eq!(reported(&log), vec![(4, -1)]);
    }

    #[test]
    fn taps_outside_the_track_clamp_to_the_ends() {
        let mut bar = bar(5);
        bar.set_thumb_index(2).expect("valid");
        bar.handle_event(CursorEvent::released(400.0, Y));
        assert_eq!(bar.left_index(), 4);
        bar.handle_event(CursorEvent::released(-30.0, Y));
        assert_eq!(bar.left_index(), 0);
        assert_eq!(thumb_x(&bar), LEFT_X);
    }

    #[test]
    fn cancel_without_a_drag_does_not_jump() {
        let mut bar = bar(5);
        assert!(bar.handle_event(CursorEvent::cancelled(100.0, Y)));
        assert_eq!(bar.left_index(), 0);
        assert_eq!(bar.take_requests().disallow_intercept, Some(false));
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let mut bar = bar(5);
        assert!(bar.handle_event(CursorEvent::moved(80.0, Y)));
        assert_eq!(thumb_x(&bar), LEFT_X);
        assert_eq!(bar.take_requests().disallow_intercept, Some(true));
    }

    #[test]
    fn tick_count_changes_reset_only_when_needed() {
        let mut bar = bar(5);
        bar.set_thumb_index(3).expect("valid");
        let log = record(&mut bar);

        bar.set_tick_count(6).expect("valid");
        assert_eq!(bar.left_index(), 3);

        bar.set_tick_count(3).expect("valid");
        assert_eq!(bar.left_index(), 0);
        assert_eq!(
            bar.set_tick_count(1),
            Err(SeekBarError::InvalidTickCount { tick_count: 1 })
        );
        assert_eq!(bar.tick_count(), 3);
        assert_eq!(reported(&log), vec![(0, -1)]);
    }

    #[test]
    fn first_tick_count_change_resets_the_index() {
        let mut bar = bar(5);
        let log = record(&mut bar);
        bar.set_tick_count(5).expect("valid");
        assert_eq!(reported(&log), vec![(0, -1)]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut bar = bar(5);
        assert_eq!(
            bar.set_thumb_index(5),
            Err(SeekBarError::IndexOutOfRange {
                index: 5,
                tick_count: 5
            })
        );
        assert_eq!(bar.left_index(), 0);
    }

    #[test]
    fn label_follows_the_thumb() {
        let mut bar = bar(3);
        bar.set_label("Go");
        bar.set_label_size(Dp(18.0));
        bar.set_thumb_index(1).expect("valid");

        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Go"]);
        let label = bar.thumb().and_then(Thumb::label).expect("labelled");
        assert_eq!(label.size, Dp(18.0));

        bar.clear_label();
        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn draws_dot_ticks_and_a_line_from_the_start() {
        let mut bar = bar(3);
        bar.set_thumb_index(1).expect("valid");
        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface);

        let lines: Vec<_> = surface.lines().collect();
        // Bar, then the connecting line.
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[1].0.x, lines[1].1.x), (LEFT_X, LEFT_X + 50.0));

        // Three tick dots, then the thumb.
        let centers: Vec<_> = surface.circles().map(|(center, _, _)| center.x).collect();
        assert_eq!(centers, vec![LEFT_X, LEFT_X + 50.0, 114.0, LEFT_X + 50.0]);
    }

    #[test]
    fn restore_brings_back_index_and_label() {
        let mut original = bar(5);
        original.set_thumb_index(2).expect("valid");
        original.set_label("Back");
        let state = original.save_state();
        assert_eq!(state.right_index, None);

        let mut restored = TextSeekBar::default();
        let log = record(&mut restored);
        restored.restore_state(&state);

        assert_eq!(restored.tick_count(), 5);
        assert_eq!(restored.left_index(), 2);
        assert_eq!(restored.label(), Some("Back"));
        assert_eq!(reported(&log), vec![(2, -1)]);
    }

    #[test]
    fn restore_rejects_negative_indices() {
        let state = SavedState {
            tick_count: 5,
            left_index: -1,
            ..SavedState::default()
        };
        let mut bar = bar(5);
        bar.set_thumb_index(3).expect("valid");
        bar.restore_state(&state);
        assert_eq!(bar.left_index(), 0);
    }

    #[test]
    fn restore_keeps_label_color_and_tick_mark() {
        let mut original = bar(3);
        original.set_label("Go");
        original.set_label_color(Color::BLACK);
        original.set_tick_mark(TickMark::Line);
        let json = original.save_state().to_json().expect("encodes");

        let mut restored = TextSeekBar::default();
        restored.restore_state(&SavedState::from_json(&json).expect("decodes"));
        restored.set_size(PxSize::new(128.0, 100.0));

        assert_eq!(restored.style().tick_mark, TickMark::Line);
        let label = restored.thumb().and_then(Thumb::label).expect("labelled");
        assert_eq!(label.color, Color::BLACK);

        // Line ticks leave the thumb as the only circle.
        let mut surface = RecordingSurface::new();
        restored.draw(&mut surface);
        assert_eq!(surface.circles().count(), 1);
    }

    #[test]
    fn disabled_bar_ignores_input() {
        let mut bar = bar(5);
        bar.set_enabled(false);
        assert!(!bar.handle_event(CursorEvent::pressed(LEFT_X, Y)));
        assert!(!bar.handle_event(CursorEvent::released(114.0, Y)));
        assert!(!bar.is_dragging());
        assert_eq!(bar.left_index(), 0);

        bar.set_enabled(true);
        assert!(bar.handle_event(CursorEvent::pressed(LEFT_X, Y)));
        assert!(bar.is_dragging());
    }

    #[test]
    fn disabling_mid_drag_snaps_the_thumb() {
        let mut bar = bar(5);
        let log = record(&mut bar);
        bar.handle_event(CursorEvent::pressed(LEFT_X, Y));
        bar.handle_event(CursorEvent::moved(LEFT_X + 30.0, Y));
        bar.set_enabled(false);

        assert!(!bar.is_dragging());
        assert_eq!(thumb_x(&bar), LEFT_X + 25.0);
        assert_eq!(bar.left_index(), 1);
        assert_eq!(reported(&log), vec![(1, -1)]);
        assert_eq!(bar.take_requests().disallow_intercept, Some(false));
    }

    #[test]
    fn too_narrow_defers_geometry() {
        let mut bar = bar(5);
        bar.set_thumb_index(3).expect("valid");
        bar.set_size(PxSize::new(20.0, 100.0));
        assert!(bar.thumb().is_none());
        assert!(!bar.handle_event(CursorEvent::pressed(10.0, Y)));

        bar.set_size(PxSize::new(128.0, 100.0));
        assert_eq!(bar.left_index(), 3);
        assert_eq!(thumb_x(&bar), LEFT_X + 75.0);
    }
}
