use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::theme::Theme;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.theme.current(),
    })
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Json<ThemeBody> {
    if state.theme.set(body.theme) {
        tracing::info!("Theme switched to {}", body.theme);
    }
    Json(ThemeBody {
        theme: state.theme.current(),
    })
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    let theme = state.theme.toggle();
    tracing::info!("Theme switched to {theme}");
    Json(ThemeBody { theme })
}
