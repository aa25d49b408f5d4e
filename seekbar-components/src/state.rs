//! Serializable snapshot of a seek bar.
//!
//! A [`SavedState`] is a plain record of every scalar the control persists.
//! Hosts encode it however they like; the JSON helpers cover the common case.
//! Restoring goes through the control's validating setters, so a snapshot
//! with out-of-range values never produces an invalid control.

use seekbar_ui::{Color, Dp, ImageRef};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::SeekBarError,
    style::{DEFAULT_TICK_COUNT, SeekBarStyle},
    track::TickMark,
};

/// Persisted seek bar fields.
///
/// Every field has a default, so snapshots written by older versions (or with
/// fields missing) still decode. Indices are signed so that corrupt negative
/// values survive decoding and are rejected by validation instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    pub tick_count: i64,
    pub tick_height_dp: f64,
    pub tick_mark: TickMark,
    pub bar_weight: f32,
    /// ARGB, 8 bits per channel.
    pub bar_color: u32,
    pub connecting_line_weight: f32,
    pub connecting_line_color: u32,
    pub thumb_radius_dp: Option<f64>,
    pub thumb_color_normal: Option<u32>,
    pub thumb_color_pressed: Option<u32>,
    pub thumb_image_normal: Option<ImageRef>,
    pub thumb_image_pressed: Option<ImageRef>,
    pub label_size_dp: f64,
    pub label_color: u32,
    pub left_index: i64,
    /// `None` for single-thumb controls.
    pub right_index: Option<i64>,
    pub first_set_tick_count: bool,
    /// Thumb label of a text seek bar.
    pub label: Option<String>,
}

impl Default for SavedState {
    fn default() -> Self {
        let style = SeekBarStyle::default();
        let mut state = Self::capture(&style, 0, None, true, None);
        state.right_index = Some(DEFAULT_TICK_COUNT as i64 - 1);
        state
    }
}

impl SavedState {
    pub(crate) fn capture(
        style: &SeekBarStyle,
        left_index: usize,
        right_index: Option<usize>,
        first_set_tick_count: bool,
        label: Option<String>,
    ) -> Self {
        Self {
            tick_count: style.tick_count as i64,
            tick_height_dp: style.tick_height.0,
            tick_mark: style.tick_mark,
            bar_weight: style.bar_weight,
            bar_color: style.bar_color.to_argb_u32(),
            connecting_line_weight: style.connecting_line_weight,
            connecting_line_color: style.connecting_line_color.to_argb_u32(),
            thumb_radius_dp: style.thumb_radius.map(|radius| radius.0),
            thumb_color_normal: style.thumb_color_normal.map(Color::to_argb_u32),
            thumb_color_pressed: style.thumb_color_pressed.map(Color::to_argb_u32),
            thumb_image_normal: style.thumb_image_normal,
            thumb_image_pressed: style.thumb_image_pressed,
            label_size_dp: style.label_size.0,
            label_color: style.label_color.to_argb_u32(),
            left_index: left_index as i64,
            right_index: right_index.map(|index| index as i64),
            first_set_tick_count,
            label,
        }
    }

    /// Copies the style fields onto `style`. The tick count is left to the
    /// control, which validates it first.
    pub(crate) fn apply_style(&self, style: &mut SeekBarStyle) {
        style.tick_height = Dp(self.tick_height_dp);
        style.tick_mark = self.tick_mark;
        style.bar_weight = self.bar_weight;
        style.bar_color = Color::from_argb_u32(self.bar_color);
        style.connecting_line_weight = self.connecting_line_weight;
        style.connecting_line_color = Color::from_argb_u32(self.connecting_line_color);
        style.thumb_radius = self.thumb_radius_dp.map(Dp);
        style.thumb_color_normal = self.thumb_color_normal.map(Color::from_argb_u32);
        style.thumb_color_pressed = self.thumb_color_pressed.map(Color::from_argb_u32);
        style.thumb_image_normal = self.thumb_image_normal;
        style.thumb_image_pressed = self.thumb_image_pressed;
        style.label_size = Dp(self.label_size_dp);
        style.label_color = Color::from_argb_u32(self.label_color);
    }

    /// The persisted tick count, if it is usable.
    pub fn valid_tick_count(&self) -> Option<usize> {
        usize::try_from(self.tick_count)
            .ok()
            .filter(|count| *count >= 2)
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SeekBarError> {
        serde_json::to_string(self).map_err(|err| SeekBarError::InvalidState(err.to_string()))
    }

    /// Decodes a snapshot, failing on malformed input.
    ///
    /// Missing fields take their defaults; only syntax or type errors fail.
    pub fn from_json(json: &str) -> Result<Self, SeekBarError> {
        serde_json::from_str(json).map_err(|err| SeekBarError::InvalidState(err.to_string()))
    }

    /// Decodes a snapshot, falling back to [`SavedState::default`] on any
    /// error.
    pub fn from_json_lossy(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            warn!(%err, "discarding unreadable seek bar state");
            Self::default()
        })
    }
}

/// Converts a persisted index into a checked one.
pub(crate) fn checked_index(index: i64, tick_count: usize) -> Result<usize, SeekBarError> {
    usize::try_from(index)
        .ok()
        .filter(|index| *index < tick_count)
        .ok_or(SeekBarError::IndexOutOfRange { index, tick_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_describes_a_fresh_control() {
        let state = SavedState::default();
        assert_eq!(state.tick_count, 3);
        assert_eq!(state.left_index, 0);
        assert_eq!(state.right_index, Some(2));
        assert!(state.first_set_tick_count);
        assert_eq!(state.bar_color, Color::LIGHT_GRAY.to_argb_u32());
    }

    #[test]
    fn json_keeps_every_field() {
        let style = SeekBarStyle::default()
            .tick_count(7)
            .thumb_radius(Dp(9.0))
            .thumb_color_pressed(Color::WHITE)
            .thumb_image_normal(ImageRef::new(4, 16, 16))
            .tick_mark(TickMark::Dot)
            .label_color(Color::BLACK);
        let state = SavedState::capture(&style, 2, Some(5), false, Some("go".into()));

        let json = state.to_json().expect("encodes");
        let decoded = SavedState::from_json(&json).expect("decodes");
        assert_eq!(decoded, state);

        let mut restored_style = SeekBarStyle::default();
        decoded.apply_style(&mut restored_style);
        assert_eq!(restored_style.thumb_radius, Some(Dp(9.0)));
        assert_eq!(restored_style.thumb_color_pressed, Some(Color::WHITE));
        assert_eq!(restored_style.thumb_image_normal, Some(ImageRef::new(4, 16, 16)));
        assert_eq!(restored_style.tick_mark, TickMark::Dot);
        assert_eq!(restored_style.label_color, Color::BLACK);
        // Tick count is validated by the control, not copied here.
        assert_eq!(restored_style.tick_count, 3);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state = SavedState::from_json(r#"{"tick_count":5,"left_index":2}"#).expect("decodes");
        assert_eq!(state.tick_count, 5);
        assert_eq!(state.left_index, 2);
        assert_eq!(state.bar_weight, SavedState::default().bar_weight);
    }

    #[test]
    fn garbage_is_rejected_or_replaced() {
        assert!(matches!(
            SavedState::from_json("{not json"),
            Err(SeekBarError::InvalidState(_))
        ));
        assert_eq!(SavedState::from_json_lossy("{not json"), SavedState::default());
    }

    #[test]
    fn invalid_tick_counts_and_indices_are_detected() {
        let mut state = SavedState::default();
        state.tick_count = 1;
        assert_eq!(state.valid_tick_count(), None);
        state.tick_count = -4;
        assert_eq!(state.valid_tick_count(), None);
        state.tick_count = 4;
        assert_eq!(state.valid_tick_count(), Some(4));

        assert_eq!(checked_index(3, 4), Ok(3));
        assert_eq!(
            checked_index(-1, 4),
            Err(SeekBarError::IndexOutOfRange {
                index: -1,
                tick_count: 4
            })
        );
        assert!(checked_index(4, 4).is_err());
    }
}
