use std::mem;

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
    thumb::Thumb,
    track::{TickMark, Track},
};

#[derive(Debug)]
struct RangeParts {
    track: Track,
    left: Thumb,
    right: Thumb,
    line: ConnectingLine,
}

impl RangeParts {
    fn thumb(&self, slot: ThumbSlot) -> &Thumb {
        match slot {
            ThumbSlot::Left => &self.left,
            ThumbSlot::Right => &self.right,
        }
    }

    fn thumb_mut(&mut self, slot: ThumbSlot) -> &mut Thumb {
        match slot {
            ThumbSlot::Left => &mut self.left,
            ThumbSlot::Right => &mut self.right,
        }
    }

    /// Swaps thumb identities if the left one has moved past the right one.
    fn restore_order(&mut self) -> bool {
        if self.left.x() > self.right.x() {
            mem::swap(&mut self.left, &mut self.right);
            return true;
        }
        false
    }
}

/// A seek bar with two thumbs selecting a range of ticks.
///
/// Index ordering is restored while dragging: when the dragged thumb passes
/// the other one, the two swap roles so that the reported left index never
/// exceeds the right one. [`SlidingSeekBar::set_thumb_indices`] does not
/// reorder its arguments.
#[derive(Debug)]
pub struct SlidingSeekBar {
    core: SeekBarCore,
    left_index: usize,
    right_index: usize,
    drag: DragState,
    parts: Option<RangeParts>,
}

impl Default for SlidingSeekBar {
    fn default() -> Self {
        Self::new(SeekBarStyle::default())
    }
}

impl SlidingSeekBar {
    /// Creates a bar covering the full range. Geometry is built on the first
    /// [`SlidingSeekBar::set_size`].
    pub fn new(style: SeekBarStyle) -> Self {
        let core = SeekBarCore::new(style);
        let right_index = core.tick_count() - 1;
        Self {
            core,
            left_index: 0,
            right_index,
            drag: DragState::Idle,
            parts: None,
        }
    }

    /// Sets the listener, replacing any previous one.
    ///
    /// The listener receives the new indices but not the control. It runs
    /// while the control is mid-update, so callers that want to react by
    /// changing the control apply those changes after the triggering call
    /// returns.
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

    pub fn left_index(&self) -> usize {
        self.left_index
    }

    pub fn right_index(&self) -> usize {
        self.right_index
    }

    pub fn size(&self) -> PxSize {
        self.core.size
    }

    /// The thumb being dragged, if any.
    pub fn dragging(&self) -> Option<ThumbSlot> {
        self.drag.slot()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// The current track, or `None` until the control has a usable size.
    pub fn track(&self) -> Option<&Track> {
        self.parts.as_ref().map(|parts| &parts.track)
    }

    pub fn thumb(&self, slot: ThumbSlot) -> Option<&Thumb> {
        self.parts.as_ref().map(|parts| parts.thumb(slot))
    }

    pub fn is_enabled(&self) -> bool {
        self.core.enabled
    }

    /// Enables or disables pointer input. Disabling mid-drag ends the drag as
    /// if the pointer had been released.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.is_dragging() {
            self.core.requests.request_disallow_intercept(false);
            self.on_release();
        }
        self.core.enabled = enabled;
        self.core.requests.request_redraw();
    }

    /// Returns and clears what the host should do next.
    pub fn take_requests(&mut self) -> HostRequests {
        self.core.requests.take()
    }

    /// Applies a new laid-out size.
    ///
    /// Thumbs are re-placed from the stored indices and the listener only
    /// fires if the re-snapped indices differ.
    pub fn set_size(&mut self, size: PxSize) {
        self.core.size = size;
        self.rebuild();
        self.sync_indices();
    }

    /// Changes the number of ticks.
    ///
    /// The first call after construction, or any call that leaves a stored
    /// index out of range, resets the selection to the full range and
    /// notifies the listener.
    pub fn set_tick_count(&mut self, tick_count: usize) -> Result<(), SeekBarError> {
        SeekBarCore::validate_tick_count(tick_count)?;
        self.core.style.tick_count = tick_count;
        debug!(tick_count, "seek bar tick count changed");

        if self.core.first_set_tick_count
            || self.left_index >= tick_count
            || self.right_index >= tick_count
        {
            self.left_index = 0;
            self.right_index = tick_count - 1;
            self.core.notify(self.index_change());
        }
        self.rebuild();
        self.core.first_set_tick_count = false;
        Ok(())
    }

    /// Moves both thumbs to the given ticks.
    ///
    /// Both indices are checked before anything changes. `left_index` may be
    /// greater than `right_index`.
    pub fn set_thumb_indices(
        &mut self,
        left_index: usize,
        right_index: usize,
    ) -> Result<(), SeekBarError> {
        self.core.check_index(left_index)?;
        self.core.check_index(right_index)?;
        self.apply_indices(left_index, right_index);
        Ok(())
    }

    fn apply_indices(&mut self, left_index: usize, right_index: usize) {
        self.left_index = left_index;
        self.right_index = right_index;
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
    /// Returns `true` if the event was consumed. Disabled controls and
    /// controls without a usable size consume nothing.
    pub fn handle_event(&mut self, event: CursorEvent) -> bool {
        if !self.core.enabled {
            return false;
        }
        if self.parts.is_none() {
            trace!("seek bar has no geometry yet, ignoring pointer event");
            return false;
        }
        let CursorEvent { position, content } = event;
        trace!(?content, x = position.x, y = position.y, "seek bar pointer event");

        match content {
            CursorEventContent::Pressed => self.on_press(position.x, position.y),
            CursorEventContent::Moved => {
                self.core.requests.request_disallow_intercept(true);
                self.on_move(position.x);
            }
            CursorEventContent::Released | CursorEventContent::Cancelled => {
                self.core.requests.request_disallow_intercept(false);
                self.on_release();
            }
        }
        true
    }

    fn on_press(&mut self, x: f32, y: f32) {
        if self.drag != DragState::Idle {
            return;
        }
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        self.core.first_set_tick_count = false;
        self.core.requests.request_redraw();

        match interaction::resolve_press(&parts.left, Some(&parts.right), x, y) {
            Some(slot) => {
                parts.thumb_mut(slot).press();
                self.drag = DragState::Dragging(slot);
                debug!(?slot, "seek bar drag started");
            }
            None => {
                let slot = interaction::nearer_slot(parts.left.x(), parts.right.x(), x);
                let snapped = parts.track.nearest_tick_coordinate(x);
                parts.thumb_mut(slot).set_x(snapped);
                parts.restore_order();
                debug!(?slot, x = snapped, "seek bar thumb jumped to press");
                self.sync_indices();
            }
        }
    }

    fn on_move(&mut self, x: f32) {
        let Some(slot) = self.drag.slot() else {
            return;
        };
        let Some(parts) = self.parts.as_mut() else {
            return;
        };
        if let Some(x) = interaction::drag_target(&parts.track, x) {
            parts.thumb_mut(slot).set_x(x);
            self.core.requests.request_redraw();
        }
        if parts.restore_order() {
            let slot = slot.opposite();
            self.drag = DragState::Dragging(slot);
            debug!(dragging = ?slot, "seek bar thumbs crossed");
        }
        self.sync_indices();
    }

    fn on_release(&mut self) {
        let Some(slot) = self.drag.slot() else {
            return;
        };
        self.drag = DragState::Idle;
        if let Some(parts) = self.parts.as_mut() {
            let snapped = parts.track.nearest_tick_coordinate(parts.thumb(slot).x());
            let thumb = parts.thumb_mut(slot);
            thumb.set_x(snapped);
            thumb.release();
            self.core.requests.request_redraw();
        }
        debug!(?slot, "seek bar drag ended");
        self.sync_indices();
    }

    /// Re-derives both indices from the thumb positions and notifies on
    /// change.
    fn sync_indices(&mut self) {
        let Some(parts) = &self.parts else {
            return;
        };
        let left_index = parts.track.nearest_tick_index(parts.left.x());
        let right_index = parts.track.nearest_tick_index(parts.right.x());
        if left_index != self.left_index || right_index != self.right_index {
            self.left_index = left_index;
            self.right_index = right_index;
            self.core.notify(self.index_change());
        }
    }

    /// Rebuilds the track, thumbs and connecting line from the style, size and
    /// stored indices. A thumb being dragged stays pressed.
    fn rebuild(&mut self) {
        self.core.requests.request_redraw();
        let style = &self.core.style;
        let appearance = style.thumb_appearance();
        let center_y = self.core.center_y();
        let mut left = Thumb::new(center_y, &appearance);
        let mut right = Thumb::new(center_y, &appearance);

        let Some(geometry) = TrackGeometry::new(self.core.size, left.half_width()) else {
            if !self.core.size.is_empty() {
                warn!(
                    width = self.core.size.width,
                    thumb_half_width = left.half_width(),
                    "seek bar is too narrow for its thumbs, deferring layout"
                );
            }
            self.parts = None;
            self.drag = DragState::Idle;
            return;
        };

        let track = geometry.build_track(style);
        left.set_x(track.tick_coordinate(self.left_index));
        right.set_x(track.tick_coordinate(self.right_index));
        match self.drag.slot() {
            Some(ThumbSlot::Left) => left.press(),
            Some(ThumbSlot::Right) => right.press(),
            None => {}
        }
        let line = ConnectingLine::new(
            geometry.center_y,
            style.connecting_line_weight,
            style.connecting_line_color,
        );
        debug!(
            tick_count = style.tick_count,
            left_index = self.left_index,
            right_index = self.right_index,
            "seek bar rebuilt"
        );
        self.parts = Some(RangeParts {
            track,
            left,
            right,
            line,
        });
    }

    fn index_change(&self) -> IndexChange {
        IndexChange {
            left_index: self.left_index,
            right_index: Some(self.right_index),
        }
    }

    /// Draws the bar, the selected range and both thumbs. Draws nothing until
    /// the control has a usable size.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if let Some(parts) = &self.parts {
            render::draw_range(surface, &parts.track, &parts.line, &parts.left, &parts.right);
        }
    }

    /// Captures everything needed to recreate this control.
    pub fn save_state(&self) -> SavedState {
        SavedState::capture(
            &self.core.style,
            self.left_index,
            Some(self.right_index),
            self.core.first_set_tick_count,
            None,
        )
    }

    /// Restores a snapshot taken with [`SlidingSeekBar::save_state`].
    ///
    /// Style fields are copied, the tick count and indices are validated, and
    /// the indices are applied through the same path as
    /// [`SlidingSeekBar::set_thumb_indices`], so the listener fires once.
    /// Invalid values fall back to the current tick count and the full range.
    pub fn restore_state(&mut self, state: &SavedState) {
        state.apply_style(&mut self.core.style);
        match state.valid_tick_count() {
            Some(tick_count) => self.core.style.tick_count = tick_count,
            None => warn!(
                tick_count = state.tick_count,
                "ignoring invalid saved tick count"
            ),
        }

        let tick_count = self.core.tick_count();
        let indices = checked_index(state.left_index, tick_count).and_then(|left| {
            let right = match state.right_index {
                Some(right) => checked_index(right, tick_count)?,
                None => tick_count - 1,
            };
            Ok((left, right))
        });
        let (left_index, right_index) = indices.unwrap_or_else(|err| {
            warn!(%err, "saved seek bar indices are invalid, selecting the full range");
            (0, tick_count - 1)
        });

        self.apply_indices(left_index, right_index);
        self.core.first_set_tick_count = state.first_set_tick_count;
    }
}
