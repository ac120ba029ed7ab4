//! Category/tag filtering, text search and ordering for the catalog listings.
//!
//! Every function here is pure over the borrowed catalog. Sorting uses the
//! stable `sort_by`, so records that tie keep their catalog order.

use serde::Serialize;

use crate::catalog::{Catalog, Certificate, Project, ALL_CATEGORIES};

/// A category/tag selector. `All` keeps every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Absent, blank and `"All"` all mean no filtering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(v) if v == ALL_CATEGORIES => CategoryFilter::All,
            Some(v) => CategoryFilter::Named(v.to_string()),
        }
    }

    fn matches_category(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => project.category.label() == name,
        }
    }

    fn matches_tags(&self, tags: &[String]) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => tags.iter().any(|t| t == name),
        }
    }
}

/// The featured project, shown first and apart, plus the sorted remainder.
#[derive(Debug, Serialize)]
pub struct ProjectListing<'a> {
    pub featured: Option<&'a Project>,
    pub projects: Vec<&'a Project>,
}

/// Non-featured projects matching `category`, newest year first.
/// The featured project is never part of the list and ignores the category.
pub fn filter_projects<'a>(catalog: &'a Catalog, category: &CategoryFilter) -> ProjectListing<'a> {
    let mut projects: Vec<&Project> = catalog
        .projects
        .iter()
        .filter(|p| !p.featured && category.matches_category(p))
        .collect();
    projects.sort_by(|a, b| b.year.cmp(&a.year));

    ProjectListing {
        featured: catalog.featured_project(),
        projects,
    }
}

/// Certificates carrying the `category` tag whose title or issuer contains
/// `query` (case-insensitive), newest issue date first. An empty query matches all.
pub fn filter_certificates<'a>(
    catalog: &'a Catalog,
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Certificate> {
    let needle = query.to_lowercase();
    let mut certificates: Vec<&Certificate> = catalog
        .certificates
        .iter()
        .filter(|c| category.matches_tags(&c.tags) && matches_query(c, &needle))
        .collect();
    certificates.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    certificates
}

fn matches_query(certificate: &Certificate, needle: &str) -> bool {
    needle.is_empty()
        || certificate.title.to_lowercase().contains(needle)
        || certificate.issuer.to_lowercase().contains(needle)
}

/// Archive page: every project (featured included) carrying `tag`, in catalog order.
pub fn filter_projects_by_tag<'a>(catalog: &'a Catalog, tag: Option<&str>) -> Vec<&'a Project> {
    catalog
        .projects
        .iter()
        .filter(|p| tag.map_or(true, |t| p.tags.iter().any(|pt| pt == t)))
        .collect()
}

/// Clicking the active tag clears the selection; any other tag replaces it.
pub fn toggle_tag(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::models::ProjectCategory;

    fn catalog() -> Catalog {
        Catalog::load().expect("seed catalog is valid")
    }

    fn project_ids(items: &[&Project]) -> Vec<String> {
        items.iter().map(|p| p.id.clone()).collect()
    }

    fn certificate_ids(items: &[&Certificate]) -> Vec<String> {
        items.iter().map(|c| c.id.clone()).collect()
    }

    fn extra_project(id: &str, category: ProjectCategory, year: i32) -> Project {
        let mut p = catalog().projects[1].clone();
        p.id = id.to_string();
        p.category = category;
        p.year = year;
        p.featured = false;
        p
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("All")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("Web App")),
            CategoryFilter::Named("Web App".to_string())
        );
    }

    #[test]
    fn test_projects_all_excludes_featured_and_sorts_by_year() {
        let c = catalog();
        let listing = filter_projects(&c, &CategoryFilter::All);
        assert_eq!(
            listing.featured.map(|p| p.id.as_str()),
            Some("project-management-dashboard")
        );
        assert_eq!(
            project_ids(&listing.projects),
            vec!["ecommerce-mobile-app", "3d-portfolio-gallery"]
        );
    }

    #[test]
    fn test_projects_category_filter() {
        let c = catalog();
        let listing = filter_projects(&c, &CategoryFilter::Named("3D Graphics".to_string()));
        assert_eq!(project_ids(&listing.projects), vec!["3d-portfolio-gallery"]);
        // Featured stays visible regardless of the selected category.
        assert!(listing.featured.is_some());
    }

    #[test]
    fn test_projects_featured_category_yields_empty_list() {
        let c = catalog();
        let listing = filter_projects(&c, &CategoryFilter::Named("Web App".to_string()));
        assert!(listing.projects.is_empty());
    }

    #[test]
    fn test_projects_unknown_category_yields_empty_list() {
        let c = catalog();
        assert!(filter_projects(&c, &CategoryFilter::Named("Games".to_string()))
            .projects
            .is_empty());
    }

    #[test]
    fn test_projects_sort_is_stable_on_year_ties() {
        let mut c = catalog();
        c.projects.push(extra_project("a-2023", ProjectCategory::Other, 2023));
        c.projects.push(extra_project("b-2024", ProjectCategory::Other, 2024));
        c.projects.push(extra_project("c-2023", ProjectCategory::Other, 2023));
        let listing = filter_projects(&c, &CategoryFilter::All);
        assert_eq!(
            project_ids(&listing.projects),
            vec![
                "b-2024",
                "ecommerce-mobile-app",
                "a-2023",
                "c-2023",
                "3d-portfolio-gallery"
            ]
        );
    }

    #[test]
    fn test_projects_without_featured() {
        let mut c = catalog();
        c.projects[0].featured = false;
        let listing = filter_projects(&c, &CategoryFilter::All);
        assert!(listing.featured.is_none());
        assert_eq!(listing.projects.len(), 3);
    }

    #[test]
    fn test_certificates_sorted_newest_first() {
        let mut c = catalog();
        c.certificates.retain(|cert| cert.id != "react-advanced");
        let dates: Vec<NaiveDate> = filter_certificates(&c, &CategoryFilter::All, "")
            .iter()
            .map(|cert| cert.issue_date)
            .collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 7, 22).unwrap(),
                NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
            ]
        );
    }

    #[test]
    fn test_certificates_search_is_case_insensitive_on_issuer() {
        let c = catalog();
        let found = filter_certificates(&c, &CategoryFilter::All, "UDEMY");
        assert_eq!(
            certificate_ids(&found),
            vec!["react-advanced", "web-development"]
        );
    }

    #[test]
    fn test_certificates_search_matches_title() {
        let c = catalog();
        let found = filter_certificates(&c, &CategoryFilter::All, "cloud practitioner");
        assert_eq!(certificate_ids(&found), vec!["aws-cloud"]);
    }

    #[test]
    fn test_certificates_category_and_query_are_anded() {
        let c = catalog();
        let dev = CategoryFilter::Named("Development".to_string());
        let found = filter_certificates(&c, &dev, "react");
        assert_eq!(certificate_ids(&found), vec!["react-advanced"]);

        let all_dev = filter_certificates(&c, &dev, "");
        assert_eq!(all_dev.len(), 2);

        assert!(filter_certificates(&c, &dev, "aws").is_empty());
    }

    #[test]
    fn test_certificates_tag_filter_is_exact() {
        let c = catalog();
        let found = filter_certificates(&c, &CategoryFilter::Named("develop".to_string()), "");
        assert!(found.is_empty());
    }

    #[test]
    fn test_certificates_date_ties_keep_catalog_order() {
        let mut c = catalog();
        let date = c.certificates[3].issue_date;
        c.certificates[0].issue_date = date;
        let found = filter_certificates(&c, &CategoryFilter::All, "");
        assert_eq!(
            certificate_ids(&found),
            vec!["web-development", "aws-cloud", "react-advanced", "ui-ux-design"]
        );
    }

    #[test]
    fn test_filtering_is_deterministic() {
        let c = catalog();
        let a = filter_certificates(&c, &CategoryFilter::All, "u");
        let b = filter_certificates(&c, &CategoryFilter::All, "u");
        assert_eq!(a, b);
    }

    #[test]
    fn test_archive_tag_filter_includes_featured() {
        let c = catalog();
        let found = filter_projects_by_tag(&c, Some("React"));
        assert_eq!(
            project_ids(&found),
            vec!["project-management-dashboard", "3d-portfolio-gallery"]
        );
        assert_eq!(filter_projects_by_tag(&c, None).len(), 3);
    }

    #[test]
    fn test_toggle_tag() {
        assert_eq!(toggle_tag(None, "React"), Some("React".to_string()));
        assert_eq!(toggle_tag(Some("React"), "React"), None);
        assert_eq!(toggle_tag(Some("React"), "WebGL"), Some("WebGL".to_string()));
    }
}
