//! GET /api/quiz/start — the shared general question set.

use std::sync::Arc;

use axum::{Json, extract::State};
use quiz_core::selection;
use tracing::debug;

use crate::{core::app_state::AppState, routes::quiz::quiz_requests::StartResponse};

/// Handler: GET /api/quiz/start
///
/// Returns every general-phase question in dataset order. Idempotent; an
/// empty dataset yields an empty list rather than an error.
pub async fn start_quiz(State(state): State<Arc<AppState>>) -> Json<StartResponse> {
    let questions = selection::general_questions(&state.questions);
    debug!(count = questions.len(), "serving general questions");
    Json(StartResponse { questions })
}
