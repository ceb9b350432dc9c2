//! Host-driven section navigation for the portfolio's single-page layout.
//!
//! The crate owns no I/O: the embedding document implements [`ViewportHost`]
//! and [`PageRouter`], pushes scroll events and frame callbacks in, and the
//! tracker answers with scroll and fragment writes. Time only moves when the
//! host says so, which keeps every behaviour reproducible in tests.

pub mod geometry;
pub mod host;
pub mod section;
pub mod slot;
pub mod throttle;
pub mod tracker;

pub use geometry::{compute_active_section, Accent, SectionBounds, SectionGeometry};
pub use host::{PageRouter, ScrollMode, ViewportHost};
pub use section::{NavLink, RegistryError, RouteTarget, SectionDescriptor, SectionRegistry};
pub use slot::{ScrollIntentRecord, Slot, TabStorage};
pub use tracker::{
    NavigationState, SectionTracker, TrackerConfig, TrackerState, DEFAULT_ARRIVAL_FRAMES,
    DEFAULT_SETTLE_DELAY,
};
