use crate::{thumb::Thumb, track::Track};

/// Which logical thumb a pointer is acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbSlot {
    Left,
    Right,
}

impl ThumbSlot {
    pub(super) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Touch state machine. Only one thumb is dragged at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum DragState {
    #[default]
    Idle,
    Dragging(ThumbSlot),
}

impl DragState {
    pub(super) fn slot(self) -> Option<ThumbSlot> {
        match self {
            Self::Idle => None,
            Self::Dragging(slot) => Some(slot),
        }
    }
}

/// Picks the thumb a press-down at `(x, y)` starts dragging.
///
/// The left thumb is checked first, so a press inside both target zones
/// drags the left one. The right thumb is only considered while the left one
/// is not already pressed.
pub(super) fn resolve_press(
    left: &Thumb,
    right: Option<&Thumb>,
    x: f32,
    y: f32,
) -> Option<ThumbSlot> {
    if !left.is_pressed() && left.is_in_target_zone(x, y) {
        return Some(ThumbSlot::Left);
    }
    match right {
        Some(right) if !left.is_pressed() && right.is_in_target_zone(x, y) => {
            Some(ThumbSlot::Right)
        }
        _ => None,
    }
}

/// The thumb closer to `x`. The left thumb must be strictly closer to win.
pub(super) fn nearer_slot(left_x: f32, right_x: f32, x: f32) -> ThumbSlot {
    if (x - left_x).abs() < (x - right_x).abs() {
        ThumbSlot::Left
    } else {
        ThumbSlot::Right
    }
}

/// Where a dragged thumb goes for pointer `x`, or `None` if it stays put.
pub(super) fn drag_target(track: &Track, x: f32) -> Option<f32> {
    track.contains_x(x).then_some(x)
}

#[cfg(test)]
mod tests {
    use seekbar_ui::{Color, Dp};

    use super::*;
    use crate::thumb::ThumbAppearance;

    fn thumb_at(x: f32) -> Thumb {
        let appearance = ThumbAppearance {
            radius: Some(Dp(10.0)),
            color_normal: Color::HOLO_BLUE,
            color_pressed: Color::HOLO_BLUE,
            image_normal: None,
            image_pressed: None,
        };
        let mut thumb = Thumb::new(50.0, &appearance);
        thumb.set_x(x);
        thumb
    }

    #[test]
    fn left_thumb_wins_overlapping_zones() {
        let left = thumb_at(40.0);
        let right = thumb_at(50.0);
        assert_eq!(resolve_press(&left, Some(&right), 46.0, 50.0), Some(ThumbSlot::Left));
        assert_eq!(resolve_press(&left, Some(&right), 70.0, 50.0), Some(ThumbSlot::Right));
        assert_eq!(resolve_press(&left, Some(&right), 200.0, 50.0), None);
        assert_eq!(resolve_press(&left, None, 70.0, 50.0), None);
    }

    #[test]
    fn pressed_left_thumb_blocks_right() {
        let mut left = thumb_at(0.0);
        left.press();
        let right = thumb_at(100.0);
        assert_eq!(resolve_press(&left, Some(&right), 100.0, 50.0), None);
    }

    #[test]
    fn ties_go_to_the_right_thumb() {
        assert_eq!(nearer_slot(0.0, 100.0, 30.0), ThumbSlot::Left);
        assert_eq!(nearer_slot(0.0, 100.0, 50.0), ThumbSlot::Right);
        assert_eq!(nearer_slot(40.0, 40.0, 10.0), ThumbSlot::Right);
    }

    #[test]
    fn drags_stop_at_the_track_ends() {
        let track = Track::new(10.0, 50.0, 100.0, 5, Dp(4.0), 1.0, Color::BLACK);
        assert_eq!(drag_target(&track, 10.0), Some(10.0));
        assert_eq!(drag_target(&track, 110.0), Some(110.0));
        assert_eq!(drag_target(&track, 9.0), None);
        assert_eq!(drag_target(&track, 111.0), None);
        assert_eq!(ThumbSlot::Left.opposite(), ThumbSlot::Right);
        assert_eq!(DragState::Dragging(ThumbSlot::Right).slot(), Some(ThumbSlot::Right));
        assert_eq!(DragState::Idle.slot(), None);
    }
}
