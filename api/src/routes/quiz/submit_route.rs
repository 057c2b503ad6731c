//! POST /api/quiz/submit — forward the transcript to the AI counselor.

use ai_llm_service::{OpenAiService, config_openai_recommender};
use axum::Json;
use quiz_core::transcript::render_transcript;
use tracing::info;

use crate::{
    error_handler::AppResult,
    routes::quiz::quiz_requests::{SubmitRequest, SubmitResponse},
};

/// Fixed instruction sent alongside every transcript. The AI must answer
/// with one JSON object matching the client's Recommendation parse contract.
const RECOMMENDATION_SYSTEM_PROMPT: &str = "You are a career guidance counselor for students \
choosing an academic stream. Based on the quiz transcript, respond with a single well-formed \
JSON object and nothing else, using exactly these keys: \"recommended_stream\" (string), \
\"secondary_stream\" (string), \"reason\" (one short paragraph, string), and \
\"suitable_careers\" (array of strings).";

/// Handler: POST /api/quiz/submit
///
/// Renders the transcript, calls the external recommendation API once, and
/// returns its raw textual output unparsed. The credential is read from the
/// process environment at request time; when it is absent the request is
/// rejected before any outbound call is attempted.
pub async fn submit_quiz(Json(body): Json<SubmitRequest>) -> AppResult<Json<SubmitResponse>> {
    let cfg = config_openai_recommender()?;
    let service = OpenAiService::new(cfg)?;

    let transcript = render_transcript(&body.all_answers);
    let prompt = format!("Here is the student's quiz transcript:\n{transcript}");

    info!(answers = body.all_answers.len(), "requesting recommendation");

    let data = service
        .generate(&prompt, Some(RECOMMENDATION_SYSTEM_PROMPT))
        .await?;

    Ok(Json(SubmitResponse {
        status: "success",
        data,
    }))
}
