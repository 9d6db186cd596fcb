//! Portfolio web server.
//!
//! Serves the project list and vote API consumed by the Yew frontend, and
//! the built frontend assets themselves.

mod routes;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use routes::{cast_vote, list_projects};
use state::{AppState, seed_projects};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let projects = seed_projects();
    tracing::info!("Loaded {} projects", projects.len());

    let state = AppState::new(projects);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build API routes
    let api_routes = Router::new()
        .route("/projects", get(list_projects))
        .route("/vote", post(cast_vote));

    // Build main router
    let app = Router::new()
        .nest("/api", api_routes)
        // Serve static files from frontend dist (when built)
        .fallback_service(ServeDir::new("../frontend/dist").append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 5080));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_from_seeds() {
        let _state = AppState::new(seed_projects());
        // Basic smoke test
    }
}
