mod catalog;
mod config;
mod contact;
mod errors;
mod listing;
mod routes;
mod site;
mod state;
mod theme;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::contact::relay::Web3FormsRelay;
use crate::contact::service::{ContactService, FormLimits};
use crate::routes::{asset_service, build_router};
use crate::site::ambient::AmbientRegistry;
use crate::state::AppState;
use crate::theme::ThemeContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Content catalog: built and validated once, read-only afterwards
    let catalog = Catalog::load().context("Seed catalog is invalid")?;
    info!(
        "Catalog loaded: {} projects, {} certificates, {} experiences",
        catalog.projects.len(),
        catalog.certificates.len(),
        catalog.experiences.len()
    );

    // Contact relay
    let relay = Web3FormsRelay::new(
        config.contact_endpoint.clone(),
        config.contact_relay_timeout,
    )
    .context("Failed to build contact relay HTTP client")?;
    info!("Contact relay initialized (endpoint: {})", config.contact_endpoint);
    let limits = FormLimits {
        idle_ttl: config.contact_form_ttl,
        max_forms: config.contact_max_forms,
    };
    let contact = ContactService::new(
        Arc::new(relay),
        config.contact_access_key.clone(),
        limits,
    );

    // Ambient visuals are a capability decided here, not per request
    let ambient = AmbientRegistry::compose(config.enable_ambient_visuals, config.default_theme);
    info!(
        "Ambient visuals {}",
        if ambient.is_empty() { "disabled" } else { "enabled" }
    );

    let theme = ThemeContext::new(config.default_theme);
    let ambient = Arc::new(ambient);
    {
        let ambient = ambient.clone();
        let subscription = theme.subscribe();
        tokio::spawn(async move { ambient.follow(subscription).await });
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        contact: Arc::new(contact),
        theme,
        ambient,
    };

    let app = build_router(state)
        .nest_service(
            "/assets",
            asset_service(&config.asset_dir, &config.placeholder_image),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
