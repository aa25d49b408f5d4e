//! Pointer events delivered to a control.
//!
//! The host translates its own mouse or touch events into [`CursorEvent`]s in
//! the control's local coordinate space and hands them over one at a time.
//! Only a single pointer is tracked; additional touch points are the host's
//! business to filter out.
//!
//! ```
//! use seekbar_ui::cursor::{CursorEvent, CursorEventContent};
//!
//! let down = CursorEvent::pressed(12.0, 50.0);
//! assert_eq!(down.content, CursorEventContent::Pressed);
//! assert_eq!(down.position.x, 12.0);
//! ```

use crate::px::PxPosition;

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorEventContent {
    /// A button or touch point went down.
    Pressed,
    /// The pointer moved while down.
    Moved,
    /// The button or touch point was released.
    Released,
    /// The gesture was taken away from the control (e.g. by an ancestor).
    Cancelled,
}

/// A single pointer event in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEvent {
    /// Where the pointer was when the event fired.
    pub position: PxPosition,
    /// The kind of event.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// Creates an event of the given kind at `(x, y)`.
    pub const fn new(content: CursorEventContent, x: f32, y: f32) -> Self {
        Self {
            position: PxPosition::new(x, y),
            content,
        }
    }

    /// Shorthand for a press at `(x, y)`.
    pub const fn pressed(x: f32, y: f32) -> Self {
        Self::new(CursorEventContent::Pressed, x, y)
    }

    /// Shorthand for a move to `(x, y)`.
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(CursorEventContent::Moved, x, y)
    }

    /// Shorthand for a release at `(x, y)`.
    pub const fn released(x: f32, y: f32) -> Self {
        Self::new(CursorEventContent::Released, x, y)
    }

    /// Shorthand for a cancel at `(x, y)`.
    pub const fn cancelled(x: f32, y: f32) -> Self {
        Self::new(CursorEventContent::Cancelled, x, y)
    }
}
