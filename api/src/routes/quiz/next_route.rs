//! POST /api/quiz/next — dominant-category specific question set.

use std::sync::Arc;

use axum::{Json, extract::State};
use quiz_core::selection;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::quiz::quiz_requests::{NextRequest, NextResponse},
};

/// Handler: POST /api/quiz/next
///
/// Computes the dominant category over the submitted votes and returns the
/// matching specific-phase questions. An empty or entirely invalid answers
/// array is a 400.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/quiz/next \
///   -H 'content-type: application/json' \
///   -d '{"answers":[{"questionId":"g1","selectedCategory":"Science"}]}'
/// ```
pub async fn next_questions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NextRequest>,
) -> AppResult<Json<NextResponse>> {
    let (dominant_category, questions) =
        selection::specific_questions(&state.questions, &body.answers)?;

    info!(
        dominant = %dominant_category,
        votes = body.answers.len(),
        questions = questions.len(),
        "specific question set selected"
    );

    Ok(Json(NextResponse {
        dominant_category,
        questions,
    }))
}
