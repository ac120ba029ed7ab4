pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::contact::handlers as contact;
use crate::listing::handlers as listing;
use crate::site::handlers as site;
use crate::state::AppState;
use crate::theme::handlers as theme;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/site", get(site::handle_site_manifest))
        .route(
            "/api/v1/site/navigation",
            post(site::handle_navigation_state),
        )
        // Content catalog
        .route("/api/v1/experiences", get(listing::handle_list_experiences))
        .route(
            "/api/v1/experiences/:id",
            get(listing::handle_get_experience),
        )
        .route("/api/v1/projects", get(listing::handle_list_projects))
        .route(
            "/api/v1/projects/categories",
            get(listing::handle_project_categories),
        )
        .route(
            "/api/v1/projects/archive",
            get(listing::handle_project_archive),
        )
        .route("/api/v1/projects/:id", get(listing::handle_get_project))
        .route(
            "/api/v1/projects/:id/gallery",
            get(listing::handle_project_gallery),
        )
        .route(
            "/api/v1/certificates",
            get(listing::handle_list_certificates),
        )
        .route(
            "/api/v1/certificates/categories",
            get(listing::handle_certificate_categories),
        )
        .route(
            "/api/v1/certificates/:id",
            get(listing::handle_get_certificate),
        )
        // Theme
        .route(
            "/api/v1/theme",
            get(theme::handle_get_theme).put(theme::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(theme::handle_toggle_theme))
        // Contact form
        .route("/api/v1/contact/forms", post(contact::handle_open_form))
        .route(
            "/api/v1/contact/forms/:id",
            get(contact::handle_get_form)
                .patch(contact::handle_update_form)
                .delete(contact::handle_close_form),
        )
        .route(
            "/api/v1/contact/forms/:id/submit",
            post(contact::handle_submit_form),
        )
        .route(
            "/api/v1/contact/forms/:id/retry",
            post(contact::handle_retry_form),
        )
        .route(
            "/api/v1/contact/forms/:id/reset",
            post(contact::handle_reset_form),
        )
        .with_state(state)
}

/// Static assets under `/assets`. A missing file is answered with the
/// placeholder image instead of a 404.
pub fn asset_service(asset_dir: &Path, placeholder: &str) -> ServeDir<ServeFile> {
    ServeDir::new(asset_dir).fallback(ServeFile::new(asset_dir.join(placeholder)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::contact::service::test_support::{StubOutcome, StubRelay};
    use crate::contact::service::{ContactService, FormLimits};
    use crate::site::ambient::AmbientRegistry;
    use crate::theme::{Theme, ThemeContext};

    fn app_with(relay: Arc<StubRelay>) -> Router {
        app_over(Catalog::load().unwrap(), relay)
    }

    fn app_over(catalog: Catalog, relay: Arc<StubRelay>) -> Router {
        let contact = ContactService::new(relay, "test-key".to_string(), FormLimits::default());
        let state = AppState {
            catalog: Arc::new(catalog),
            contact: Arc::new(contact),
            theme: ThemeContext::new(Theme::Dark),
            ambient: Arc::new(AmbientRegistry::compose(true, Theme::Dark)),
        };
        build_router(state)
    }

    fn app() -> Router {
        app_with(Arc::new(StubRelay::new(StubOutcome::Accept)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = send(app, Method::GET, uri, None).await;
        let status = response.status();
        (status, json_body(response).await)
    }

    async fn form_action(app: &Router, id: &str, action: &str) -> Response {
        let uri = format!("/api/v1/contact/forms/{id}/{action}");
        send(app, Method::POST, &uri, None).await
    }

    fn ids(items: &Value) -> Vec<String> {
        items
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(&app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_projects_default_listing() {
        let (status, body) = get_json(&app(), "/api/v1/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["featured"]["id"], "project-management-dashboard");
        assert_eq!(
            ids(&body["projects"]),
            vec!["ecommerce-mobile-app", "3d-portfolio-gallery"]
        );
        assert_eq!(body["visible"], 2);
        assert_eq!(body["has_more"], false);
        assert!(body["next_visible"].is_null());
    }

    /// Seed catalog plus four more non-featured projects: six in the grid.
    fn larger_catalog() -> Catalog {
        let mut catalog = Catalog::load().unwrap();
        let template = catalog.projects[1].clone();
        for (n, year) in [2019, 2020, 2021, 2022].into_iter().enumerate() {
            let mut extra = template.clone();
            extra.id = format!("extra-project-{n}");
            extra.year = year;
            extra.featured = false;
            catalog.projects.push(extra);
        }
        catalog
    }

    #[tokio::test]
    async fn test_projects_show_more_steps() {
        let app = app_over(
            larger_catalog(),
            Arc::new(StubRelay::new(StubOutcome::Accept)),
        );

        let (_, body) = get_json(&app, "/api/v1/projects").await;
        assert_eq!(body["total"], 6);
        assert_eq!(body["visible"], 3);
        assert_eq!(body["projects"].as_array().unwrap().len(), 3);
        assert_eq!(body["has_more"], true);
        assert_eq!(body["next_visible"], 6);

        let (_, body) = get_json(&app, "/api/v1/projects?visible=6").await;
        assert_eq!(body["visible"], 6);
        assert_eq!(body["projects"].as_array().unwrap().len(), 6);
        assert_eq!(body["has_more"], false);
        assert!(body["next_visible"].is_null());

        let (_, body) = get_json(&app, "/api/v1/projects?visible=12").await;
        assert_eq!(body["projects"].as_array().unwrap().len(), 6);
        assert!(body["visible"].as_u64().unwrap() <= 6);
        assert!(body["next_visible"].is_null());
    }

    #[tokio::test]
    async fn test_projects_category_query() {
        let (_, body) = get_json(&app(), "/api/v1/projects?category=Mobile%20App").await;
        assert_eq!(ids(&body["projects"]), vec!["ecommerce-mobile-app"]);
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_project_categories() {
        let (_, body) = get_json(&app(), "/api/v1/projects/categories").await;
        assert_eq!(body, json!(["All", "Web App", "Mobile App", "3D Graphics"]));
    }

    #[tokio::test]
    async fn test_project_detail_and_missing() {
        let app = app();
        let (status, body) = get_json(&app, "/api/v1/projects/3d-portfolio-gallery").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "3D Graphics");
        assert!(body["live_url"].is_null());

        let (status, body) = get_json(&app, "/api/v1/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_project_gallery_steps() {
        let app = app();
        let uri = "/api/v1/projects/project-management-dashboard/gallery";
        let (_, body) = get_json(&app, &format!("{uri}?from=2&step=next")).await;
        assert_eq!(body["index"], 0);
        assert_eq!(body["image"], "/projects/kanban-1.jpg");
        assert_eq!(body["autoplay"], false);

        let (_, body) = get_json(&app, &format!("{uri}?from=1")).await;
        assert_eq!(body["index"], 2);
        assert_eq!(body["autoplay"], true);

        let (_, body) = get_json(&app, &format!("{uri}?from=1&manual=true")).await;
        assert_eq!(body["index"], 1);

        let (_, body) = get_json(&app, &format!("{uri}?to=2")).await;
        assert_eq!(body["index"], 2);
        assert_eq!(body["direction"], "forward");
    }

    #[tokio::test]
    async fn test_archive_tag_toggle() {
        let app = app();
        let (_, body) = get_json(&app, "/api/v1/projects/archive?toggle=WebGL").await;
        assert_eq!(body["active_tag"], "WebGL");
        assert_eq!(ids(&body["projects"]), vec!["3d-portfolio-gallery"]);

        let (_, body) = get_json(&app, "/api/v1/projects/archive?tag=WebGL&toggle=WebGL").await;
        assert!(body["active_tag"].is_null());
        assert_eq!(body["projects"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_certificates_search_and_category() {
        let app = app();
        let (_, body) = get_json(&app, "/api/v1/certificates").await;
        assert_eq!(
            ids(&body["certificates"]),
            vec!["aws-cloud", "react-advanced", "ui-ux-design", "web-development"]
        );

        let (_, body) = get_json(&app, "/api/v1/certificates?q=UDEMY").await;
        assert_eq!(body["total"], 2);

        let (_, body) =
            get_json(&app, "/api/v1/certificates?category=Development&q=react").await;
        assert_eq!(ids(&body["certificates"]), vec!["react-advanced"]);
    }

    #[tokio::test]
    async fn test_certificate_categories_and_detail() {
        let app = app();
        let (_, body) = get_json(&app, "/api/v1/certificates/categories").await;
        assert_eq!(body[0], "All");
        let (status, body) = get_json(&app, "/api/v1/certificates/aws-cloud").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["issue_date"], "2023-07-22");
    }

    #[tokio::test]
    async fn test_experiences() {
        let app = app();
        let (_, body) = get_json(&app, "/api/v1/experiences").await;
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[0]["id"], "diskominfo");
        let (status, _) = get_json(&app, "/api/v1/experiences/btn").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_theme_roundtrip() {
        let app = app();
        let (_, body) = get_json(&app, "/api/v1/theme").await;
        assert_eq!(body["theme"], "dark");

        let response = send(&app, Method::POST, "/api/v1/theme/toggle", None).await;
        assert_eq!(json_body(response).await["theme"], "light");

        let response = send(
            &app,
            Method::PUT,
            "/api/v1/theme",
            Some(json!({"theme": "dark"})),
        )
        .await;
        assert_eq!(json_body(response).await["theme"], "dark");

        let (_, site) = get_json(&app, "/api/v1/site").await;
        assert_eq!(site["theme"], "dark");
        assert_eq!(site["ambient_visuals"][0]["palette"]["accent"], "#06b6d4");
        assert_eq!(site["nav_links"].as_array().unwrap().len(), 6);
        assert_eq!(site["sections"][0], "home");
        assert_eq!(site["sections"][5], "contact");
    }

    #[tokio::test]
    async fn test_navigation_state() {
        let response = send(
            &app(),
            Method::POST,
            "/api/v1/site/navigation",
            Some(json!({
                "scroll_y": 750.0,
                "sections": [
                    {"id": "home", "top": 0.0, "height": 800.0},
                    {"id": "about", "top": 800.0, "height": 600.0}
                ]
            })),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["active"], "about");
        assert_eq!(body["scrolled"], true);
    }

    async fn open_filled_form(app: &Router) -> String {
        let response = send(app, Method::POST, "/api/v1/contact/forms", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = json_body(response).await["id"].as_str().unwrap().to_string();
        let response = send(
            app,
            Method::PATCH,
            &format!("/api/v1/contact/forms/{id}"),
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's build something"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        id
    }

    #[tokio::test]
    async fn test_contact_success_then_reset() {
        let relay = Arc::new(StubRelay::new(StubOutcome::Accept));
        let app = app_with(relay.clone());
        let id = open_filled_form(&app).await;

        let response = form_action(&app, &id, "submit").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "success");
        assert_eq!(relay.call_count(), 1);
        assert_eq!(relay.sent.lock().unwrap()[0].access_key, "test-key");

        let response = form_action(&app, &id, "retry").await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = form_action(&app, &id, "reset").await;
        let body = json_body(response).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(body["fields"]["name"], "");
    }

    #[tokio::test]
    async fn test_contact_failure_then_retry_keeps_fields() {
        let relay = Arc::new(StubRelay::new(StubOutcome::Reject));
        let app = app_with(relay);
        let id = open_filled_form(&app).await;

        let response = form_action(&app, &id, "submit").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "error");

        let response = form_action(&app, &id, "retry").await;
        let body = json_body(response).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(body["fields"]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_contact_missing_field_is_bad_request() {
        let relay = Arc::new(StubRelay::new(StubOutcome::Accept));
        let app = app_with(relay.clone());
        let response = send(&app, Method::POST, "/api/v1/contact/forms", None).await;
        let id = json_body(response).await["id"].as_str().unwrap().to_string();

        let response = form_action(&app, &id, "submit").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        let (_, body) = get_json(&app, &format!("/api/v1/contact/forms/{id}")).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(relay.call_count(), 0);
    }

    #[tokio::test]
    async fn test_contact_unknown_form() {
        let uri = format!("/api/v1/contact/forms/{}", uuid::Uuid::new_v4());
        let (status, _) = get_json(&app(), &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contact_close_form() {
        let app = app();
        let id = open_filled_form(&app).await;
        let uri = format!("/api/v1/contact/forms/{id}");
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let (status, _) = get_json(&app, &format!("/api/v1/contact/forms/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets_fall_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("placeholder.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("logo.svg"), "<svg id=\"logo\"/>").unwrap();
        let assets =
            Router::new().nest_service("/assets", asset_service(dir.path(), "placeholder.svg"));

        let response = send(&assets, Method::GET, "/assets/logo.svg", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<svg id=\"logo\"/>");

        let response = send(&assets, Method::GET, "/assets/projects/missing.jpg", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<svg/>");
    }
}
