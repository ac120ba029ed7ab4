use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::OwnerProfile;
use crate::site::ambient::AmbientDescriptor;
use crate::site::navigation::{
    active_section, is_scrolled, NavLink, SectionBounds, DEFAULT_SECTION, NAV_LINKS,
};
use crate::state::AppState;
use crate::theme::Theme;

pub const SITE_TITLE: &str = "Portfolio | Alan Syahlan Santriago";
pub const SITE_DESCRIPTION: &str =
    "Personal portfolio website showcasing my projects and skills as a full-stack developer";

#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub title: &'static str,
    pub description: &'static str,
    pub owner: OwnerProfile,
    pub nav_links: Vec<NavLink>,
    /// Section ids the nav links point at, in page order.
    pub sections: Vec<&'static str>,
    pub theme: Theme,
    pub ambient_visuals: Vec<AmbientDescriptor>,
}

/// GET /api/v1/site
pub async fn handle_site_manifest(State(state): State<AppState>) -> Json<SiteManifest> {
    let theme = state.theme.current();
    Json(SiteManifest {
        title: SITE_TITLE,
        description: SITE_DESCRIPTION,
        owner: state.catalog.owner.clone(),
        nav_links: NAV_LINKS.to_vec(),
        sections: NAV_LINKS.iter().map(NavLink::section_id).collect(),
        theme,
        ambient_visuals: state.ambient.describe(),
    })
}

#[derive(Debug, Deserialize)]
pub struct NavigationRequest {
    pub scroll_y: f64,
    /// Currently highlighted section; kept when no section contains `scroll_y`.
    pub current: Option<String>,
    pub sections: Vec<SectionBounds>,
}

#[derive(Debug, Serialize)]
pub struct NavigationState {
    pub active: String,
    pub scrolled: bool,
}

/// POST /api/v1/site/navigation
pub async fn handle_navigation_state(
    Json(req): Json<NavigationRequest>,
) -> Json<NavigationState> {
    let current = req.current.as_deref().unwrap_or(DEFAULT_SECTION);
    Json(NavigationState {
        active: active_section(req.scroll_y, &req.sections, current).to_string(),
        scrolled: is_scrolled(req.scroll_y),
    })
}
