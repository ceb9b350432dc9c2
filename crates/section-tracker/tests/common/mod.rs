#![allow(dead_code)]

use core::time::Duration;
use std::collections::HashMap;

use section_tracker::{
    Accent, PageRouter, ScrollMode, SectionGeometry, SectionRegistry, SectionTracker,
    TabStorage, TrackerConfig, ViewportHost,
};

pub const FRAME: Duration = Duration::from_millis(16);
pub const SMOOTH_SCROLL: Duration = Duration::from_millis(600);
pub const VIEWPORT: f64 = 900.0;
pub const DOCUMENT_HEIGHT: f64 = 4000.0;

struct Animation {
    from: f64,
    to: f64,
    start: Duration,
}

/// In-memory document. Scroll locking behaves like `body { position: fixed }`:
/// while locked the offset reads 0, and a plain unlock leaves the page at 0.
pub struct FakeHost {
    now: Duration,
    scroll: f64,
    locked: bool,
    fragment: Option<String>,
    layout: HashMap<String, SectionGeometry>,
    layout_ready: bool,
    animation: Option<Animation>,
    storage: TabStorage,
    pub scroll_log: Vec<(f64, ScrollMode)>,
    pub fragment_log: Vec<String>,
    pub frame_requests: usize,
    pub wakeups: Vec<Duration>,
    pub lock_log: Vec<bool>,
}

pub fn portfolio_layout() -> HashMap<String, SectionGeometry> {
    HashMap::from([
        ("hero".to_string(), SectionGeometry::new(0.0, 900.0)),
        (
            "value".to_string(),
            SectionGeometry::new(900.0, 800.0)
                .dark()
                .with_accent(Accent::Purple),
        ),
        ("work".to_string(), SectionGeometry::new(1700.0, 1500.0)),
        (
            "contact".to_string(),
            SectionGeometry::new(3200.0, 800.0).with_accent(Accent::Red),
        ),
    ])
}

impl FakeHost {
    /// A fresh tab sitting on `href`.
    pub fn at(href: &str) -> Self {
        let mut host = Self {
            now: Duration::ZERO,
            scroll: 0.0,
            locked: false,
            fragment: None,
            layout: HashMap::new(),
            layout_ready: true,
            animation: None,
            storage: TabStorage::default(),
            scroll_log: Vec::new(),
            fragment_log: Vec::new(),
            frame_requests: 0,
            wakeups: Vec::new(),
            lock_log: Vec::new(),
        };
        host.load_page(href);
        host
    }

    /// Simulates the router committing a new page in the same tab.
    pub fn load_page(&mut self, href: &str) {
        let (path, fragment) = match href.split_once('#') {
            Some((p, f)) => (p, Some(f.to_string())),
            None => (href, None),
        };
        self.fragment = fragment.filter(|f| !f.is_empty());
        self.scroll = 0.0;
        self.locked = false;
        self.animation = None;
        self.layout = if path == "/" {
            portfolio_layout()
        } else {
            HashMap::new()
        };
        self.scroll_log.clear();
        self.fragment_log.clear();
    }

    pub fn set_layout_ready(&mut self, ready: bool) {
        self.layout_ready = ready;
    }

    pub fn unmount_section(&mut self, id: &str) {
        self.layout.remove(id);
    }

    /// Lays out a section of the portfolio page that was missing.
    pub fn mount_section(&mut self, id: &str) {
        if let Some(geometry) = portfolio_layout().get(id) {
            self.layout.insert(id.to_string(), *geometry);
        }
    }

    /// Reader drags the page. The caller forwards the scroll event.
    pub fn user_scroll_to(&mut self, offset: f64) {
        self.animation = None;
        self.scroll = offset.clamp(0.0, self.max_scroll());
    }

    /// Advances the clock; returns whether the scroll offset moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.now += dt;
        let Some(anim) = &self.animation else {
            return false;
        };
        let elapsed = self.now.saturating_sub(anim.start);
        let t = (elapsed.as_secs_f64() / SMOOTH_SCROLL.as_secs_f64()).min(1.0);
        let next = anim.from + (anim.to - anim.from) * t;
        if t >= 1.0 {
            self.animation = None;
        }
        let moved = (next - self.scroll).abs() > f64::EPSILON;
        self.scroll = next;
        moved
    }

    pub fn storage(&self) -> &TabStorage {
        &self.storage
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn max_scroll(&self) -> f64 {
        DOCUMENT_HEIGHT - VIEWPORT
    }
}

impl ViewportHost for FakeHost {
    fn now(&self) -> Duration {
        self.now
    }

    fn scroll_offset(&self) -> f64 {
        if self.locked {
            0.0
        } else {
            self.scroll
        }
    }

    fn viewport_height(&self) -> f64 {
        VIEWPORT
    }

    fn scroll_to(&mut self, offset: f64, mode: ScrollMode) {
        self.scroll_log.push((offset, mode));
        let to = offset.clamp(0.0, self.max_scroll());
        match mode {
            ScrollMode::Instant => {
                self.animation = None;
                self.scroll = to;
            }
            ScrollMode::Smooth => {
                self.animation = Some(Animation {
                    from: self.scroll,
                    to,
                    start: self.now,
                });
            }
        }
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
        self.fragment_log.push(fragment.to_string());
    }

    fn section_geometry(&self, id: &str) -> Option<SectionGeometry> {
        if !self.layout_ready {
            return None;
        }
        self.layout.get(id).copied()
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn schedule_wakeup(&mut self, after: Duration) {
        self.wakeups.push(self.now + after);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.lock_log.push(locked);
        if self.locked && !locked {
            self.scroll = 0.0;
        }
        self.locked = locked;
    }

    fn tab_storage(&mut self) -> &mut TabStorage {
        &mut self.storage
    }
}

#[derive(Debug, Default)]
pub struct FakeRouter {
    pub pushes: Vec<String>,
}

impl PageRouter for FakeRouter {
    fn push(&mut self, href: &str) {
        self.pushes.push(href.to_string());
    }
}

pub type Tracker = SectionTracker<FakeHost, FakeRouter>;

pub fn mount(href: &str) -> Tracker {
    mount_on(FakeHost::at(href), FakeRouter::default(), href)
}

pub fn mount_on(host: FakeHost, router: FakeRouter, href: &str) -> Tracker {
    let path = href.split('#').next().unwrap_or(href);
    SectionTracker::mount(
        host,
        router,
        SectionRegistry::portfolio(),
        TrackerConfig::default(),
        path,
    )
}

/// Completes the last route change: unmounts, loads the pushed href, remounts.
pub fn follow_route(tracker: Tracker) -> Tracker {
    let (mut host, router) = tracker.unmount();
    let href = router.pushes.last().cloned().expect("no route was pushed");
    host.load_page(&href);
    mount_on(host, router, &href)
}

/// Runs frames for `total`, forwarding scroll events, and records the active
/// section after every frame.
pub fn pump(tracker: &mut Tracker, total: Duration) -> Vec<Option<String>> {
    let mut seen = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        if tracker.host_mut().advance(FRAME) {
            tracker.on_scroll();
        }
        tracker.on_animation_frame();
        seen.push(tracker.active_section().map(str::to_string));
        elapsed += FRAME;
    }
    seen
}

pub fn scroll_and_settle(tracker: &mut Tracker, offset: f64) {
    tracker.host_mut().user_scroll_to(offset);
    tracker.on_scroll();
    pump(tracker, FRAME);
}
