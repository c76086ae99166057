use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use common::{
    database::{DatabaseConfig, init_client},
    store::{DocumentStore, MongoStore},
};
use tutors::{
    AppState,
    config::AppConfig,
    jwt::{JwtConfig, JwtService},
    routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting tutors service");

    let config = AppConfig::from_env()?;

    // Initialize the store client; it stays open for the life of the process
    let db_config = DatabaseConfig::from_env()?;
    let client = init_client(&db_config).await?;
    let store = MongoStore::new(client, &db_config.database);

    // A failed ping is not fatal: requests keep being served and store
    // calls report their own errors.
    if let Err(e) = store.ping().await {
        error!("Failed to connect to MongoDB: {}", e);
    }

    let jwt_service = JwtService::new(JwtConfig::new(config.token_secret.clone()));
    let app_state = AppState::new(Arc::new(store), jwt_service, config.cookie_policy());

    // Start the web server
    let app = routes::create_router(app_state)
        .layer(routes::cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Tutor server is running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
