use quiz_core::QuestionSet;

/// Shared state for all HTTP handlers.
///
/// The question set is the only shared state in the service: read-only,
/// loaded once at startup. Everything else (including the AI credential)
/// is resolved per request.
#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionSet,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// A missing or broken dataset file degrades to an empty question set
    /// (with a warning) rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            questions: QuestionSet::load_from_env(),
        }
    }
}
