use seekbar_ui::DrawSurface;

use crate::{connecting_line::ConnectingLine, thumb::Thumb, track::Track};

/// Bar, then the selected range, then both thumbs on top.
pub(super) fn draw_range(
    surface: &mut dyn DrawSurface,
    track: &Track,
    line: &ConnectingLine,
    left: &Thumb,
    right: &Thumb,
) {
    track.draw(surface);
    line.draw(surface, left, right);
    left.draw(surface);
    right.draw(surface);
}

/// Bar, then the line from the start of the track to the thumb, then the
/// thumb.
pub(super) fn draw_single(
    surface: &mut dyn DrawSurface,
    track: &Track,
    line: &ConnectingLine,
    thumb: &Thumb,
) {
    track.draw(surface);
    line.draw_between(surface, track.left_x(), thumb.x());
    thumb.draw(surface);
}
