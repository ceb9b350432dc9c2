/// Coalesces bursts of scroll events into at most one detection per animation frame.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks work for the next frame. Returns `true` only for the first request
    /// of a frame, i.e. when the caller must actually schedule one.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called from the frame callback; reports whether work was requested.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
