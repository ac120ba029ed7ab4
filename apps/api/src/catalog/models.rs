use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Primary category of a project. Serialised with the labels shown on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[serde(rename = "Web App")]
    WebApp,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "3D Graphics")]
    Graphics3d,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::Graphics3d => "3D Graphics",
            ProjectCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub featured: bool,
    pub title: String,
    pub description: String,
    /// Shown in the detail modal only.
    pub long_description: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub category: ProjectCategory,
    pub year: i32,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub issuer_logo: String,
    pub issue_date: NaiveDate,
    pub thumbnail: String,
    pub full_image: String,
    pub tags: Vec<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free-text label such as "Jan 2025 - Present". Never parsed.
    pub duration: String,
    pub location: String,
    pub description: Vec<String>,
    pub logo: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// The portfolio owner, as presented in the hero, contact and footer sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerProfile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub cv_path: String,
    pub socials: Vec<SocialLink>,
}
