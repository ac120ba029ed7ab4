use serde::{Deserialize, Serialize};

/// Distance above a section's top at which it already counts as active.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Scroll depth past which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

pub const DEFAULT_SECTION: &str = "home";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Certificates", href: "#certificates" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Measured position of a rendered section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.top - ACTIVE_OFFSET;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// Section to highlight for a scroll position. Sections are checked in
/// document order and the last one containing `scroll_y` wins; if none does,
/// the previous highlight (`current`) is kept.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionBounds],
    current: &'a str,
) -> &'a str {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y))
        .map(|s| s.id.as_str())
        .unwrap_or(current)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}
