mod models;
mod handlers;
mod services;
mod middleware;
mod generator;
mod layout;
mod config;
mod errors;

use std::path::Path;
use anyhow::Context;
use axum::{
    routing::{get, patch, post},
    Router,
    middleware::from_fn,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    limit::RequestBodyLimitLayer,
};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::{
    services::StorageService,
    config::Config,
};

/// Builds the full application: JSON API, session handling and the static
/// front-end bundle.
pub fn build_app(storage: StorageService, config: Config) -> Router {
    // Session store setup
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name("session")
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.session.inactivity_minutes,
        )));

    // Unknown paths fall back to index.html so client-side routes resolve
    let static_dir = Path::new(&config.server.static_dir);
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Auth routes
        .route("/api/register", post(handlers::handle_register))
        .route("/api/login", post(handlers::handle_login))
        .route("/api/guest", post(handlers::handle_guest))
        .route("/api/logout", post(handlers::handle_logout))
        .route("/api/user", get(handlers::serve_current_user))

        // Project routes
        .route(
            "/api/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/api/projects/:id", get(handlers::get_project))
        .route(
            "/api/projects/:id/configuration",
            patch(handlers::update_configuration),
        )
        .route("/api/projects/:id/generate", post(handlers::generate_configuration))
        .route("/api/projects/:id/flow", get(handlers::get_flow))
        .route("/api/projects/:id/rationale", get(handlers::get_rationale))
        .route("/api/projects/:id/templates", get(handlers::get_templates))
        .route("/api/generate", post(handlers::preview_configuration))

        // Front-end bundle
        .fallback_service(frontend)

        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))

        // Add state
        .with_state((storage, config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load().context("Failed to load configuration")?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(StorageService::new(), config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    tracing::info!("Server running on {}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("Failed to start server")?;

    Ok(())
}
