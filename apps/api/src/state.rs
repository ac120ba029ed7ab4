use std::sync::Arc;

use crate::catalog::Catalog;
use crate::contact::service::ContactService;
use crate::site::ambient::AmbientRegistry;
use crate::theme::ThemeContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded and validated once at startup; read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub contact: Arc<ContactService>,
    pub theme: ThemeContext,
    /// Decorative backgrounds, fixed at composition time by ENABLE_AMBIENT_VISUALS.
    pub ambient: Arc<AmbientRegistry>,
}
