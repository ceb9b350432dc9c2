//! Section tracker: keeps the highlighted nav link, the URL fragment and the
//! scroll position in agreement, and moves between sections and pages without
//! flashing the landing section.
//!
//! # Lifecycle
//! One tracker lives per mounted page. Crossing a page boundary drops it
//! ([`SectionTracker::unmount`]) and mounts a fresh one on the same host. The
//! only state that survives is the host's [`TabStorage`]: the pending-section
//! slot and the scroll-intent record.
//!
//! # States
//! ```text
//! Idle ──layout measurable──▶ ScrollTracking ◀──settle delay── ManualNavigating
//!                                  │   ▲                            ▲
//!                        menu open │   │ menu close                 │ navigate_to_section
//!                                  ▼   │                            │
//!                            MenuOpenSuspended        ScrollTracking┘
//! ```

use core::time::Duration;

use tracing::{debug, trace};

use crate::geometry::{
    compute_active_section, target_offset, Accent, SectionBounds, SectionGeometry,
    DEFAULT_HEADER_HEIGHT,
};
use crate::host::{PageRouter, ScrollMode, ViewportHost};
use crate::section::{fragment_id, NavLink, SectionRegistry};
use crate::slot::ScrollIntentRecord;
use crate::throttle::FrameThrottle;

/// Matches the browser's smooth-scroll duration.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Frames to wait for an arrival target's layout before landing at the top.
pub const DEFAULT_ARRIVAL_FRAMES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub header_height: f64,
    pub settle_delay: Duration,
    pub arrival_frames: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            arrival_frames: DEFAULT_ARRIVAL_FRAMES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    /// Mounted, sections not measurable yet (or a page without sections).
    Idle,
    ScrollTracking,
    /// A programmatic scroll is in flight; detection is off until `settle_at`.
    ManualNavigating { settle_at: Duration },
    /// Overlay menu open, document scroll locked.
    MenuOpenSuspended { restore_offset: f64, from_idle: bool },
}

/// What the navbar renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub active_section_id: Option<String>,
    pub is_dark_variant: bool,
    pub accent: Accent,
    /// Target handed to the section page by a cross-page navigation from this page.
    pub pending_section_id: Option<String>,
}

pub struct SectionTracker<H, R> {
    host: H,
    router: R,
    registry: SectionRegistry,
    config: TrackerConfig,
    path: String,
    state: TrackerState,
    nav: NavigationState,
    throttle: FrameThrottle,
    arrival_waits: u32,
}

impl<H: ViewportHost, R: PageRouter> SectionTracker<H, R> {
    /// Mounts the navigation host on the page at `path`.
    ///
    /// On the section page this performs the arrival handoff straight away when
    /// the layout is already measurable, otherwise on a later frame.
    pub fn mount(
        host: H,
        router: R,
        registry: SectionRegistry,
        config: TrackerConfig,
        path: &str,
    ) -> Self {
        let mut tracker = Self {
            host,
            router,
            registry,
            config,
            path: path.to_string(),
            state: TrackerState::Idle,
            nav: NavigationState::default(),
            throttle: FrameThrottle::new(),
            arrival_waits: 0,
        };

        debug!(path, "section tracker mounted");

        if tracker.on_section_page() && !tracker.try_arrive() {
            tracker.host.request_frame();
        }

        tracker
    }

    /// Tears the tracker down, handing the host and router back for the next page.
    pub fn unmount(self) -> (H, R) {
        debug!(path = %self.path, "section tracker unmounted");
        (self.host, self.router)
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active_section_id.as_deref()
    }

    pub fn is_manual_navigation_in_flight(&self) -> bool {
        matches!(self.state, TrackerState::ManualNavigating { .. })
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        self.registry
            .nav_links(&self.path, self.nav.active_section_id.as_deref())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Host events
    // ────────────────────────────────────────────────────────────────────────

    /// Scroll event from the document. Detection is deferred to the next frame.
    pub fn on_scroll(&mut self) {
        if self.throttle.request() {
            self.host.request_frame();
        }
    }

    /// Frame callback (also used for settle wakeups).
    pub fn on_animation_frame(&mut self) {
        let detect = self.throttle.take();

        match self.state {
            TrackerState::Idle => {
                if self.on_section_page() && !self.try_arrive() {
                    self.host.request_frame();
                }
            }
            TrackerState::ScrollTracking => {
                if detect {
                    self.detect();
                }
            }
            TrackerState::ManualNavigating { settle_at } => {
                if self.host.now() >= settle_at {
                    self.finish_manual_navigation();
                } else {
                    trace!("scroll detection suspended during manual navigation");
                }
            }
            TrackerState::MenuOpenSuspended { .. } => {}
        }
    }

    /// The document reported that a scroll animation finished. Ends manual
    /// navigation early instead of waiting out the settle delay.
    pub fn on_scroll_end(&mut self) {
        if self.is_manual_navigation_in_flight() {
            self.finish_manual_navigation();
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Navigation actions
    // ────────────────────────────────────────────────────────────────────────

    /// Moves to an in-page section, animating on the section page and routing
    /// there from anywhere else. Unknown or unmounted targets are ignored.
    pub fn navigate_to_section(&mut self, target: &str) {
        if !self.registry.is_section(target) {
            debug!(target, "ignoring navigation to unknown section");
            return;
        }

        if !self.on_section_page() {
            self.hand_off(target);
            return;
        }

        if matches!(self.state, TrackerState::MenuOpenSuspended { .. }) {
            self.on_menu_close();
        }

        if self.nav.active_section_id.as_deref() == Some(target) {
            if self.current_fragment().as_deref() != Some(target) {
                self.host.replace_fragment(target);
            }
            return;
        }

        let Some(geometry) = self.host.section_geometry(target) else {
            debug!(target, "navigation target not mounted; dropping");
            return;
        };

        let offset = target_offset(
            &geometry,
            self.config.header_height,
            self.registry.is_landing(target),
        );

        self.set_active(target, &geometry);
        self.state = TrackerState::ManualNavigating {
            settle_at: self.host.now() + self.config.settle_delay,
        };
        self.host.replace_fragment(target);
        self.host.scroll_to(offset, ScrollMode::Smooth);
        self.host.schedule_wakeup(self.config.settle_delay);

        debug!(target, offset, "smooth scroll to section");
    }

    /// Routes to `path`. Leaving the section page for a page without sections
    /// remembers where the reader was so a back action can return there.
    pub fn navigate_to_page(&mut self, path: &str) {
        if matches!(self.state, TrackerState::MenuOpenSuspended { .. }) {
            self.on_menu_close();
        }

        if self.on_section_page() && !self.registry.is_section_page(path) {
            let from = self.nav.active_section_id.clone();
            self.remember_origin(from.as_deref());
        }

        self.router.push(path);
    }

    /// Stores the section the reader is leaving from: `from`, else the current
    /// fragment, else the landing section.
    pub fn remember_origin(&mut self, from: Option<&str>) {
        let section_id = from
            .filter(|id| self.registry.is_section(id))
            .map(str::to_string)
            .or_else(|| {
                self.current_fragment()
                    .filter(|id| self.registry.is_section(id))
            })
            .unwrap_or_else(|| self.registry.landing().id.clone());

        debug!(%section_id, "remembering origin section");
        self.host
            .tab_storage()
            .scroll_intent
            .put(ScrollIntentRecord { section_id });
    }

    /// Href of the "back" control on a page without sections.
    pub fn back_href(&mut self) -> String {
        let id = self.back_target();
        self.registry.section_href(&id)
    }

    /// Returns to the section remembered by [`Self::navigate_to_page`]. The
    /// record itself is cleared when the section page arrives.
    pub fn navigate_back(&mut self) {
        let id = self.back_target();
        self.navigate_to_section(&id);
    }

    // ────────────────────────────────────────────────────────────────────────
    // Overlay menu
    // ────────────────────────────────────────────────────────────────────────

    pub fn on_menu_open(&mut self) {
        if matches!(self.state, TrackerState::MenuOpenSuspended { .. }) {
            return;
        }

        let restore_offset = self.host.scroll_offset();
        let from_idle = matches!(self.state, TrackerState::Idle);
        self.state = TrackerState::MenuOpenSuspended {
            restore_offset,
            from_idle,
        };
        self.host.set_scroll_locked(true);
        debug!(restore_offset, "menu opened; detection suspended");
    }

    /// Unlocks scrolling, puts the document back at its pre-open offset and only
    /// then lets detection run again.
    pub fn on_menu_close(&mut self) {
        let TrackerState::MenuOpenSuspended {
            restore_offset,
            from_idle,
        } = self.state
        else {
            return;
        };

        self.host.set_scroll_locked(false);
        self.host.scroll_to(restore_offset, ScrollMode::Instant);

        self.state = if from_idle {
            TrackerState::Idle
        } else {
            TrackerState::ScrollTracking
        };
        self.throttle.request();
        self.host.request_frame();
        debug!(restore_offset, "menu closed; scroll restored");
    }

    // ────────────────────────────────────────────────────────────────────────
    // Internals
    // ────────────────────────────────────────────────────────────────────────

    fn on_section_page(&self) -> bool {
        self.registry.is_section_page(&self.path)
    }

    fn current_fragment(&self) -> Option<String> {
        self.host
            .fragment()
            .and_then(|raw| fragment_id(&raw).map(str::to_string))
    }

    fn back_target(&mut self) -> String {
        let landing = self.registry.landing().id.clone();
        self.host
            .tab_storage()
            .scroll_intent
            .peek()
            .map(|r| r.section_id.clone())
            .unwrap_or(landing)
    }

    fn hand_off(&mut self, target: &str) {
        let displaced = self
            .host
            .tab_storage()
            .pending_section
            .put(target.to_string());
        if let Some(previous) = displaced {
            debug!(%previous, target, "pending section overwritten");
        }
        self.nav.pending_section_id = Some(target.to_string());

        let href = self.registry.section_href(target);
        debug!(%href, "routing to section page");
        self.router.push(&href);
    }

    /// Lands a freshly mounted section page on its target without animation.
    /// Returns `false` while the layout cannot be measured yet, or while the
    /// target itself is not laid out and `arrival_frames` have not run out.
    fn try_arrive(&mut self) -> bool {
        if !self
            .registry
            .sections()
            .any(|d| self.host.section_geometry(&d.id).is_some())
        {
            trace!("section layout not measurable yet");
            return false;
        }

        let target = self.arrival_target();

        if let Some(id) = target.as_deref() {
            if self.host.section_geometry(id).is_none()
                && self.arrival_waits < self.config.arrival_frames
            {
                self.arrival_waits += 1;
                trace!(section = id, waits = self.arrival_waits, "arrival target not laid out yet");
                return false;
            }
        }

        let storage = self.host.tab_storage();
        storage.pending_section.take();
        if storage.scroll_intent.take().is_some() {
            debug!("scroll intent consumed on return");
        }

        let landed = target.clone().and_then(|id| {
            let geometry = self.host.section_geometry(&id)?;
            Some((id, geometry))
        });

        match landed {
            Some((id, geometry)) => {
                let offset = target_offset(
                    &geometry,
                    self.config.header_height,
                    self.registry.is_landing(&id),
                );
                self.host.scroll_to(offset, ScrollMode::Instant);
                if self.current_fragment().as_deref() != Some(id.as_str()) {
                    self.host.replace_fragment(&id);
                }
                self.set_active(&id, &geometry);
                debug!(section = %id, offset, "arrived on section");
            }
            None => {
                if target.is_some() {
                    debug!(waits = self.arrival_waits, "arrival target never laid out; landing at top");
                }
                self.host.scroll_to(0.0, ScrollMode::Instant);
                self.detect();
            }
        }

        self.nav.pending_section_id = None;
        self.state = TrackerState::ScrollTracking;
        true
    }

    /// Pending handoff first, then the URL fragment. Unknown ids are skipped.
    fn arrival_target(&mut self) -> Option<String> {
        let pending = self
            .host
            .tab_storage()
            .pending_section
            .peek()
            .filter(|id| self.registry.is_section(id))
            .cloned();
        pending.or_else(|| {
            self.current_fragment()
                .filter(|id| self.registry.is_section(id))
        })
    }

    fn finish_manual_navigation(&mut self) {
        self.state = TrackerState::ScrollTracking;
        trace!("manual navigation settled");
        self.detect();
    }

    fn detect(&mut self) {
        let measured: Vec<(String, SectionGeometry)> = self
            .registry
            .sections()
            .filter_map(|d| {
                self.host
                    .section_geometry(&d.id)
                    .map(|g| (d.id.clone(), g))
            })
            .collect();
        let bounds: Vec<SectionBounds<'_>> = measured
            .iter()
            .map(|(id, geometry)| SectionBounds {
                id: id.as_str(),
                geometry: *geometry,
            })
            .collect();

        let Some(id) = compute_active_section(
            self.host.scroll_offset(),
            self.host.viewport_height(),
            &bounds,
            &self.registry.landing().id,
        ) else {
            return;
        };

        let Some((id, geometry)) = measured.iter().find(|(m, _)| m == id).cloned() else {
            return;
        };

        if self.nav.active_section_id.as_deref() != Some(id.as_str()) {
            trace!(section = %id, "active section changed");
            self.set_active(&id, &geometry);
        }
        if self.current_fragment().as_deref() != Some(id.as_str()) {
            self.host.replace_fragment(&id);
        }
    }

    fn set_active(&mut self, id: &str, geometry: &SectionGeometry) {
        self.nav.active_section_id = Some(id.to_string());
        self.nav.is_dark_variant = geometry.dark;
        self.nav.accent = geometry.accent;
    }
}
