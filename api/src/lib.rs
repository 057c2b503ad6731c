use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

pub use error_handler::{AppError, AppResult};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::core::app_state::AppState;
use crate::routes::{
    health_route::health,
    quiz::{next_route::next_questions, start_route::start_quiz, submit_route::submit_quiz},
};

/// Binds the listener and serves the quiz API until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let state = Arc::new(AppState::from_env());

    // Open public API: every origin, method, and header is allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/quiz/start", get(start_quiz))
        .route("/api/quiz/next", post(next_questions))
        .route("/api/quiz/submit", post(submit_quiz))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(address = %host_url, "quiz service listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
