//! Unified error handling for `quiz-core`.

use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Top-level error for the `quiz-core` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QuizError {
    /// Specific-question selection was asked to work with no usable votes
    /// (empty input, or every entry missing its category). Maps to a
    /// client-input error at the HTTP layer.
    #[error("no valid answers provided")]
    NoValidAnswers,

    /// The session was advanced past its last question or after reaching a
    /// terminal state.
    #[error("quiz session has no current question")]
    SessionExhausted,

    /// An option index outside the current question's options was selected.
    #[error("option index {index} out of range for question {question_id}")]
    InvalidOption { question_id: String, index: usize },

    /// The AI recommendation payload could not be interpreted as JSON.
    #[error("recommendation payload is not valid JSON: {0}")]
    MalformedRecommendation(#[source] serde_json::Error),

    /// Dataset file could not be read.
    #[error("dataset io error: {0}")]
    DatasetIo(#[from] std::io::Error),

    /// Dataset file was read but could not be parsed.
    #[error("dataset parse error: {0}")]
    DatasetParse(#[source] serde_json::Error),
}
