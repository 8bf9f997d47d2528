//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use community_common::{AppConfig, AppError, JwtVerifier};
use community_core::entities::User;
use community_core::traits::UserDirectory;
use community_core::SnowflakeGenerator;
use community_service::ServiceContextBuilder;
use community_store::{MemoryMembershipStore, MemoryUserDirectory};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    // Health endpoints sit outside the rate limiter so probes never 429
    let router = router.merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create the in-memory stores
    let membership_store = Arc::new(MemoryMembershipStore::new());
    let user_directory = Arc::new(MemoryUserDirectory::new());

    // Create the token verifier
    let token_verifier = Arc::new(JwtVerifier::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create the Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Seed the directory with the configured subjects
    for subject in &config.directory.seed_subjects {
        let user = User::new(snowflake_generator.generate(), subject.clone());
        user_directory.insert(&user).await?;
    }
    if !config.directory.seed_subjects.is_empty() {
        info!(
            count = config.directory.seed_subjects.len(),
            "User directory seeded"
        );
    }

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .membership_store(membership_store)
        .user_directory(user_directory)
        .token_verifier(token_verifier)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
