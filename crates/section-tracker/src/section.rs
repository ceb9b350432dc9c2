use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate section id '{0}'")]
    DuplicateId(String),

    #[error("Registry has no in-page sections")]
    NoSections,

    #[error("Route '{0}' must be an absolute path")]
    RelativeRoute(String),
}

/// Where a navigation link leads: an anchor on the section page, or another routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum RouteTarget {
    InPage,
    Page(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub label: String,
    pub route_target: RouteTarget,
}

impl SectionDescriptor {
    pub fn in_page(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            route_target: RouteTarget::InPage,
        }
    }

    pub fn page(id: &str, label: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            route_target: RouteTarget::Page(path.to_string()),
        }
    }

    pub fn is_in_page(&self) -> bool {
        matches!(self.route_target, RouteTarget::InPage)
    }
}

/// A rendered navigation link: resolved href plus highlight flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// The static set of navigation targets, in navbar order.
///
/// In-page descriptors double as anchor ids and URL fragments; their relative
/// order is the document order of the sections. The first in-page descriptor
/// is the landing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRegistry {
    section_page: String,
    descriptors: Vec<SectionDescriptor>,
    #[serde(skip)]
    landing: usize,
}

impl SectionRegistry {
    pub fn new(
        section_page: &str,
        descriptors: Vec<SectionDescriptor>,
    ) -> Result<Self, RegistryError> {
        if !section_page.starts_with('/') {
            return Err(RegistryError::RelativeRoute(section_page.to_string()));
        }

        let mut seen = HashSet::new();
        for d in &descriptors {
            if !seen.insert(d.id.as_str()) {
                return Err(RegistryError::DuplicateId(d.id.clone()));
            }
            if let RouteTarget::Page(path) = &d.route_target {
                if !path.starts_with('/') {
                    return Err(RegistryError::RelativeRoute(path.clone()));
                }
            }
        }

        let landing = descriptors
            .iter()
            .position(SectionDescriptor::is_in_page)
            .ok_or(RegistryError::NoSections)?;

        Ok(Self {
            section_page: section_page.to_string(),
            descriptors,
            landing,
        })
    }

    /// The portfolio navbar: four landing-page sections and the resume page.
    pub fn portfolio() -> Self {
        Self {
            section_page: "/".to_string(),
            descriptors: vec![
                SectionDescriptor::in_page("hero", "Home"),
                SectionDescriptor::in_page("value", "Value"),
                SectionDescriptor::in_page("work", "Work"),
                SectionDescriptor::page("resume", "Resume", "/resume"),
                SectionDescriptor::in_page("contact", "Contact"),
            ],
            landing: 0,
        }
    }

    pub fn section_page(&self) -> &str {
        &self.section_page
    }

    pub fn descriptors(&self) -> &[SectionDescriptor] {
        &self.descriptors
    }

    /// In-page sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.descriptors.iter().filter(|d| d.is_in_page())
    }

    pub fn landing(&self) -> &SectionDescriptor {
        &self.descriptors[self.landing]
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn is_section(&self, id: &str) -> bool {
        self.get(id).is_some_and(SectionDescriptor::is_in_page)
    }

    pub fn is_landing(&self, id: &str) -> bool {
        self.landing().id == id
    }

    pub fn is_section_page(&self, path: &str) -> bool {
        strip_fragment(path) == self.section_page
    }

    /// `"/#work"` style href that lands on `id` from any page.
    pub fn section_href(&self, id: &str) -> String {
        format!("{}#{}", self.section_page, id)
    }

    /// Resolves every descriptor into a navbar link for the page at `current_path`.
    ///
    /// Anchor links are prefixed with the section page when rendered elsewhere so
    /// the click routes home first.
    pub fn nav_links(&self, current_path: &str, active_section: Option<&str>) -> Vec<NavLink> {
        let on_section_page = self.is_section_page(current_path);
        let current = strip_fragment(current_path);

        self.descriptors
            .iter()
            .map(|d| {
                let (href, active) = match &d.route_target {
                    RouteTarget::InPage if on_section_page => (
                        format!("#{}", d.id),
                        active_section == Some(d.id.as_str()),
                    ),
                    RouteTarget::InPage => (self.section_href(&d.id), false),
                    RouteTarget::Page(path) => (path.clone(), current == path),
                };
                NavLink {
                    id: d.id.clone(),
                    label: d.label.clone(),
                    href,
                    active,
                }
            })
            .collect()
    }
}

fn strip_fragment(path: &str) -> &str {
    path.split('#').next().unwrap_or(path)
}

/// Normalizes a raw URL fragment (`"#work"`, `"work"`, `""`) into a bare id.
pub fn fragment_id(raw: &str) -> Option<&str> {
    let id = raw.strip_prefix('#').unwrap_or(raw);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
