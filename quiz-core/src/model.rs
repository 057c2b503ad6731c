//! Core data model shared by the dataset, selection, and session layers.

use serde::{Deserialize, Serialize};

/// Quiz stage a question belongs to.
///
/// `General` questions are the same for every user; `Specific` questions
/// vary by the dominant category of the user's general-phase answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    General,
    Specific,
}

/// One selectable answer option.
///
/// `category` is present on general-phase options (it is what the dominant
/// category is computed from) and absent on specific-phase options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A quiz question as stored in the startup dataset.
///
/// Immutable after load; `category` is required iff `phase == Specific`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub phase: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub question: String,
    pub options: Vec<QuestionOption>,
}

/// One recorded answer, created when the user selects an option.
///
/// Accumulated client-side in selection order; never persisted server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub question: String,
    pub answer: String,
    /// Category of the chosen option, when that option carried one.
    pub category: Option<String>,
}

/// Wire pair sent to `/api/quiz/next`: which category a general-phase
/// answer voted for. Field names match the browser client payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVote {
    pub question_id: String,
    pub selected_category: String,
}

/// Wire pair sent to `/api/quiz/submit`: one question/answer line of the
/// transcript, category dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: String,
}

/// Shape the AI is instructed to produce.
///
/// The service itself never validates this; it is the client-side parse
/// contract for the raw string returned by `/api/quiz/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_stream: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_stream: Option<String>,
    pub reason: String,
    pub suitable_careers: Vec<String>,
}
