//! GET /health — liveness plus dataset visibility.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Size of the startup-loaded question set; 0 flags a broken dataset.
    pub questions_loaded: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        questions_loaded: state.questions.len(),
    })
}
