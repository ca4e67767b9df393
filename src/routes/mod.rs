pub mod charts;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::settings::Theme;
use crate::store::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub config: Config,
    pub theme: Arc<RwLock<Theme>>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, config: Config) -> Self {
        Self {
            catalog,
            config,
            theme: Arc::new(RwLock::new(Theme::Light)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(orders::routes())
        .merge(dashboard::routes())
        .merge(customers::routes())
        .merge(products::routes())
        .merge(charts::routes())
        .merge(settings::routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
