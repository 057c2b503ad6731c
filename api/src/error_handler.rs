use ai_llm_service::AiLlmError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quiz_core::QuizError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Public application error type.
///
/// Upstream/misconfiguration details are logged server-side; the variants
/// here carry only the generic messages clients are allowed to see.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The AI credential is not configured; the request was rejected before
    /// any outbound call.
    #[error("server is not configured for recommendations")]
    ServerConfig,

    /// The external recommendation call failed (non-2xx, transport, decode).
    #[error("failed to generate a recommendation")]
    Recommendation,

    #[error("internal error")]
    Internal,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Bind(_)
            | AppError::Server(_)
            | AppError::ServerConfig
            | AppError::Recommendation
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::ServerConfig => "SERVER_CONFIG_ERROR",
            AppError::Recommendation => "RECOMMENDATION_FAILED",
            AppError::Internal => "INTERNAL_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert common Axum rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Domain errors crossing into HTTP: only the empty-votes case is a client
/// error; anything else from `quiz-core` is unexpected here.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::NoValidAnswers => AppError::BadRequest(
                "answers must contain at least one entry with a selected category".into(),
            ),
            other => {
                error!(error = %other, "unexpected quiz-core error in handler");
                AppError::Internal
            }
        }
    }
}

/// AI-client errors: split misconfiguration from upstream failure, keep the
/// detail in the server log only.
impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        if err.is_missing_credential() {
            error!("AI credential missing, rejecting submission without an outbound call");
            AppError::ServerConfig
        } else {
            error!(error = %err, "recommendation call failed");
            AppError::Recommendation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ServerConfig.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Recommendation.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn empty_votes_map_to_bad_request() {
        let err = AppError::from(QuizError::NoValidAnswers);
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn missing_credential_maps_to_server_config() {
        let err = AppError::from(AiLlmError::from(
            ai_llm_service::ProviderError::MissingApiKey,
        ));
        assert!(matches!(err, AppError::ServerConfig));
    }
}
