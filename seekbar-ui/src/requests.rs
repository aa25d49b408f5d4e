//! Requests a control makes of its host.
//!
//! Controls cannot repaint or re-measure themselves. Instead every mutation
//! records what the host should do next in a [`HostRequests`] value, and the
//! host drains it with [`HostRequests::take`] after delivering an event or
//! calling a setter.

/// Pending requests from a control to the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostRequests {
    /// The control's appearance changed and it should be drawn again.
    pub redraw: bool,
    /// Something that affects layout changed; the host should re-measure.
    pub relayout: bool,
    /// `Some(true)` asks ancestors to stop intercepting the current gesture,
    /// `Some(false)` lifts that request. The last write in a batch wins.
    pub disallow_intercept: Option<bool>,
}

impl HostRequests {
    /// Asks for a redraw.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Asks for a redraw and a re-layout.
    pub fn request_layout(&mut self) {
        self.redraw = true;
        self.relayout = true;
    }

    /// Records whether ancestors may intercept the gesture.
    pub fn request_disallow_intercept(&mut self, disallow: bool) {
        self.disallow_intercept = Some(disallow);
    }

    /// Returns `true` if anything is pending.
    pub fn is_pending(&self) -> bool {
        self.redraw || self.relayout || self.disallow_intercept.is_some()
    }

    /// Returns the pending requests and clears them.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
