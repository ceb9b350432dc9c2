use serde::Serialize;

/// Below this scroll offset an unmatched detection point falls back to the landing section.
pub const LANDING_SCROLL_THRESHOLD: f64 = 100.0;

/// Height of the fixed navbar that covers the top of every section.
pub const DEFAULT_HEADER_HEIGHT: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Yellow,
    Purple,
    Red,
}

/// Document-relative layout of one mounted section, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    /// Section renders on a dark background.
    pub dark: bool,
    pub accent: Accent,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            ..Default::default()
        }
    }

    pub fn dark(mut self) -> Self {
        self.dark = true;
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open `[top, bottom)`; zero-height sections never contain anything.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub geometry: SectionGeometry,
}

/// Picks the section the reader is looking at.
///
/// The detection point sits a third of the way down the viewport. `sections`
/// must be in document order; sections whose geometry could not be read are
/// simply absent. Near the top the `landing` section wins, but only while it
/// is measured. `None` means "keep whatever was active before".
pub fn compute_active_section<'a>(
    scroll_offset: f64,
    viewport_height: f64,
    sections: &[SectionBounds<'a>],
    landing: &str,
) -> Option<&'a str> {
    let detection_point = scroll_offset + viewport_height / 3.0;

    if let Some(hit) = sections
        .iter()
        .find(|s| s.geometry.contains(detection_point))
    {
        return Some(hit.id);
    }

    if scroll_offset < LANDING_SCROLL_THRESHOLD {
        return sections.iter().find(|s| s.id == landing).map(|s| s.id);
    }

    None
}

/// Scroll offset that puts a section's top just under the navbar.
/// The landing section always scrolls to the very top.
pub fn target_offset(geometry: &SectionGeometry, header_height: f64, is_landing: bool) -> f64 {
    if is_landing {
        0.0
    } else {
        (geometry.top - header_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds<'static>> {
        vec![
            SectionBounds {
                id: "hero",
                geometry: SectionGeometry::new(0.0, 800.0),
            },
            SectionBounds {
                id: "value",
                geometry: SectionGeometry::new(800.0, 600.0).dark(),
            },
            SectionBounds {
                id: "work",
                geometry: SectionGeometry::new(1400.0, 1200.0),
            },
            SectionBounds {
                id: "contact",
                geometry: SectionGeometry::new(2600.0, 700.0),
            },
        ]
    }

    #[test]
    fn test_detection_point_is_upper_third() {
        // 600 + 900/3 = 900 -> inside value
        assert_eq!(
            compute_active_section(600.0, 900.0, &layout(), "hero"),
            Some("value")
        );
        // 450 + 300 = 750 -> still hero
        assert_eq!(compute_active_section(450.0, 900.0, &layout(), "hero"), Some("hero"));
    }

    #[test]
    fn test_top_edge_inclusive_bottom_exclusive() {
        // detection point exactly at 1400
        assert_eq!(
            compute_active_section(1100.0, 900.0, &layout(), "hero"),
            Some("work")
        );
        // detection point exactly at 800
        assert_eq!(compute_active_section(500.0, 900.0, &layout(), "hero"), Some("value"));
    }

    #[test]
    fn test_near_top_without_match_defaults_to_landing() {
        let sections = vec![SectionBounds {
            id: "hero",
            geometry: SectionGeometry::new(500.0, 100.0),
        }];
        assert_eq!(compute_active_section(50.0, 300.0, &sections, "hero"), Some("hero"));
    }

    #[test]
    fn test_near_top_without_measured_landing_is_none() {
        let sections = vec![
            SectionBounds {
                id: "value",
                geometry: SectionGeometry::new(900.0, 800.0),
            },
            SectionBounds {
                id: "work",
                geometry: SectionGeometry::new(1700.0, 1500.0),
            },
        ];
        assert_eq!(compute_active_section(50.0, 900.0, &sections, "hero"), None);
    }

    #[test]
    fn test_gap_far_down_preserves_previous() {
        let sections = vec![
            SectionBounds {
                id: "hero",
                geometry: SectionGeometry::new(0.0, 500.0),
            },
            SectionBounds {
                id: "work",
                geometry: SectionGeometry::new(2000.0, 500.0),
            },
        ];
        assert_eq!(compute_active_section(1000.0, 900.0, &sections, "hero"), None);
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let sections = vec![
            SectionBounds {
                id: "hero",
                geometry: SectionGeometry::new(0.0, 1000.0),
            },
            SectionBounds {
                id: "empty",
                geometry: SectionGeometry::new(1300.0, 0.0),
            },
        ];
        assert_eq!(compute_active_section(1000.0, 900.0, &sections, "hero"), None);
    }

    #[test]
    fn test_no_sections_is_none() {
        assert_eq!(compute_active_section(0.0, 900.0, &[], "hero"), None);
    }

    #[test]
    fn test_target_offset_subtracts_header() {
        let g = SectionGeometry::new(1400.0, 100.0);
        assert_eq!(target_offset(&g, DEFAULT_HEADER_HEIGHT, false), 1336.0);
        assert_eq!(target_offset(&g, DEFAULT_HEADER_HEIGHT, true), 0.0);
        let near_top = SectionGeometry::new(20.0, 100.0);
        assert_eq!(target_offset(&near_top, DEFAULT_HEADER_HEIGHT, false), 0.0);
    }
}
