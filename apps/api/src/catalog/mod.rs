//! Content Catalog — the immutable project, certificate and work-experience records.
//!
//! Built once at startup by `Catalog::load()`, validated, then shared read-only
//! through `AppState`. Nothing in the process mutates it afterwards.

use std::collections::HashSet;

use thiserror::Error;

pub mod data;
pub mod models;

pub use models::{Certificate, OwnerProfile, Project, WorkExperience};

/// Selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("At most one featured project is allowed, found: {}", .ids.join(", "))]
    MultipleFeatured { ids: Vec<String> },

    #[error("Invalid issue date {date} for '{id}'")]
    InvalidDate { id: String, date: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub owner: OwnerProfile,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub experiences: Vec<WorkExperience>,
}

impl Catalog {
    /// Builds the seed catalog and checks its invariants.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Catalog {
            owner: data::owner(),
            projects: data::projects(),
            certificates: data::certificates()?,
            experiences: data::experiences(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Ids unique within each collection; zero or one featured project.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("certificate", self.certificates.iter().map(|c| c.id.as_str()))?;
        ensure_unique("experience", self.experiences.iter().map(|e| e.id.as_str()))?;

        let featured: Vec<String> = self
            .projects
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.id.clone())
            .collect();
        if featured.len() > 1 {
            return Err(CatalogError::MultipleFeatured { ids: featured });
        }
        Ok(())
    }

    pub fn featured_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.featured)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn experience(&self, id: &str) -> Option<&WorkExperience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    /// `"All"` followed by each project category in order of first appearance.
    pub fn project_categories(&self) -> Vec<String> {
        with_all(self.projects.iter().map(|p| p.category.label()))
    }

    /// `"All"` followed by each certificate tag in order of first appearance.
    pub fn certificate_categories(&self) -> Vec<String> {
        with_all(
            self.certificates
                .iter()
                .flat_map(|c| c.tags.iter().map(String::as_str)),
        )
    }

    /// Distinct project tags, sorted alphabetically.
    pub fn project_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .projects
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort();
        tags
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
