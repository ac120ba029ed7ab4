//! Axum route handlers for the catalog listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Certificate, Project, WorkExperience};
use crate::errors::AppError;
use crate::listing::carousel::{Carousel, SlideDirection};
use crate::listing::filter::{
    filter_certificates, filter_projects, filter_projects_by_tag, toggle_tag, CategoryFilter,
};
use crate::listing::pagination::VisibleWindow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
    pub visible: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub featured: Option<Project>,
    pub projects: Vec<Project>,
    pub total: usize,
    pub visible: usize,
    pub has_more: bool,
    /// Cutoff to request for the next "show more"; absent once everything is shown.
    pub next_visible: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CertificateQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CertificateListResponse {
    pub certificates: Vec<Certificate>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveQuery {
    /// Currently selected tag, if any.
    pub tag: Option<String>,
    /// Tag the user just clicked; toggles against `tag`.
    pub toggle: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArchiveResponse {
    pub tags: Vec<String>,
    pub active_tag: Option<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GalleryStep {
    Next,
    Previous,
    /// Autoplay tick; ignored once the user has navigated.
    #[default]
    Auto,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub from: usize,
    #[serde(default)]
    pub step: GalleryStep,
    /// Jump straight to an image (thumbnail click).
    pub to: Option<usize>,
    /// Whether the client has already stopped autoplay.
    #[serde(default)]
    pub manual: bool,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub index: usize,
    pub image: Option<String>,
    pub direction: SlideDirection,
    pub total: usize,
    pub autoplay: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/experiences
pub async fn handle_list_experiences(State(state): State<AppState>) -> Json<Vec<WorkExperience>> {
    Json(state.catalog.experiences.clone())
}

/// GET /api/v1/experiences/:id
pub async fn handle_get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkExperience>, AppError> {
    state
        .catalog
        .experience(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Experience {id} not found")))
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> Json<ProjectListResponse> {
    let category = CategoryFilter::parse(params.category.as_deref());
    let listing = filter_projects(&state.catalog, &category);
    let window = params
        .visible
        .map(VisibleWindow::from_count)
        .unwrap_or_default();

    let total = listing.projects.len();
    let mut next = window;
    let next_visible = next.show_more(total).then(|| next.count());

    Json(ProjectListResponse {
        featured: listing.featured.cloned(),
        projects: window
            .apply(&listing.projects)
            .iter()
            .map(|p| (*p).clone())
            .collect(),
        total,
        visible: window.visible(total),
        has_more: window.has_more(total),
        next_visible,
    })
}

/// GET /api/v1/projects/categories
pub async fn handle_project_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.project_categories())
}

/// GET /api/v1/projects/archive
pub async fn handle_project_archive(
    State(state): State<AppState>,
    Query(params): Query<ArchiveQuery>,
) -> Json<ArchiveResponse> {
    let current = params.tag.as_deref().filter(|t| !t.trim().is_empty());
    let active = match params.toggle.as_deref() {
        Some(clicked) => toggle_tag(current, clicked),
        None => current.map(str::to_string),
    };
    Json(ArchiveResponse {
        tags: state.catalog.project_tags(),
        projects: filter_projects_by_tag(&state.catalog, active.as_deref())
            .into_iter()
            .cloned()
            .collect(),
        active_tag: active,
    })
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    state
        .catalog
        .project(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// GET /api/v1/projects/:id/gallery
pub async fn handle_project_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>, AppError> {
    let project = state
        .catalog
        .project(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;

    let mut carousel = Carousel::starting_at(project.images.len(), params.from);
    if params.manual {
        carousel.stop_autoplay();
    }
    match (params.to, params.step) {
        (Some(to), _) => carousel.go_to(to),
        (None, GalleryStep::Next) => carousel.next(),
        (None, GalleryStep::Previous) => carousel.previous(),
        (None, GalleryStep::Auto) => carousel.tick(),
    }

    Ok(Json(GalleryResponse {
        index: carousel.index(),
        image: project.images.get(carousel.index()).cloned(),
        direction: carousel.direction(),
        total: project.images.len(),
        autoplay: carousel.is_autoplaying(),
    }))
}

/// GET /api/v1/certificates
pub async fn handle_list_certificates(
    State(state): State<AppState>,
    Query(params): Query<CertificateQuery>,
) -> Json<CertificateListResponse> {
    let category = CategoryFilter::parse(params.category.as_deref());
    let certificates: Vec<Certificate> =
        filter_certificates(&state.catalog, &category, params.q.as_deref().unwrap_or(""))
            .into_iter()
            .cloned()
            .collect();
    Json(CertificateListResponse {
        total: certificates.len(),
        certificates,
    })
}

/// GET /api/v1/certificates/categories
pub async fn handle_certificate_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.certificate_categories())
}

/// GET /api/v1/certificates/:id
pub async fn handle_get_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Certificate>, AppError> {
    state
        .catalog
        .certificate(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Certificate {id} not found")))
}
