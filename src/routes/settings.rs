use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::routes::AppState;

/// Dashboard color scheme. Held as explicit application state rather than an
/// ambient global so every consumer reads the same flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: Theme,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings/theme", get(get_theme))
        .route("/settings/theme", put(update_theme))
}

async fn get_theme(State(state): State<AppState>) -> AppResult<Json<ThemeResponse>> {
    let theme = *state.theme.read().await;
    Ok(Json(ThemeResponse { theme }))
}

async fn update_theme(
    State(state): State<AppState>,
    Json(payload): Json<UpdateThemeRequest>,
) -> AppResult<Json<ThemeResponse>> {
    let mut theme = state.theme.write().await;
    *theme = payload.theme;

    tracing::info!("Theme set to {:?}", payload.theme);
    Ok(Json(ThemeResponse { theme: *theme }))
}
