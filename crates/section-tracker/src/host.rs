use core::time::Duration;

use crate::geometry::SectionGeometry;
use crate::slot::TabStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump straight to the offset within the current paint.
    Instant,
    /// Animated scroll; offsets in between are reported through scroll events.
    Smooth,
}

/// Everything the tracker needs from the document it runs in.
///
/// The host drives the tracker: it forwards scroll events, runs frame callbacks
/// it was asked for, and advances its own monotonic clock. Nothing here blocks.
pub trait ViewportHost {
    /// Monotonic time since the tab was opened.
    fn now(&self) -> Duration;

    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn scroll_to(&mut self, offset: f64, mode: ScrollMode);

    /// Current URL fragment without the leading `#`.
    fn fragment(&self) -> Option<String>;

    /// Rewrites the fragment in place (history replace) without a native anchor jump.
    fn replace_fragment(&mut self, fragment: &str);

    /// Layout of the element with anchor `id`, or `None` when it is not mounted
    /// or not laid out yet.
    fn section_geometry(&self, id: &str) -> Option<SectionGeometry>;

    /// Asks for one `on_animation_frame` callback on the next paint.
    fn request_frame(&mut self);

    /// Asks for an `on_animation_frame` callback no earlier than `after` from now.
    fn schedule_wakeup(&mut self, after: Duration);

    /// Locks or unlocks document scrolling (mobile overlay menu).
    fn set_scroll_locked(&mut self, locked: bool);

    fn tab_storage(&mut self) -> &mut TabStorage;
}

/// Client-side router used to move between pages.
pub trait PageRouter {
    /// Starts an asynchronous route change to `href` (path plus optional fragment).
    fn push(&mut self, href: &str);
}
