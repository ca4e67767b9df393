use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_admin::config::Config;
use storefront_admin::routes::{create_router, AppState};
use storefront_admin::store::MockCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    if config.testing_mode {
        tracing::warn!("TESTING MODE - Using relaxed settings");
    }

    // Seed the in-memory catalog; malformed seed data is a startup error.
    let catalog = MockCatalog::seed().expect("Failed to seed mock catalog");
    tracing::info!("Mock catalog seeded");

    // Create app state
    let state = AppState::new(Arc::new(catalog), config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Admin dashboard: {}/", config.base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
