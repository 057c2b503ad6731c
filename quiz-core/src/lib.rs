//! Domain logic for the career-guidance quiz.
//!
//! This crate is HTTP-free: it owns the question/answer model, the startup
//! dataset, dominant-category selection, transcript rendering, and the
//! client-side session state machine. The `api` crate wires these into
//! handlers.

pub mod dataset;
pub mod errors;
pub mod model;
pub mod selection;
pub mod session;
pub mod transcript;

pub use dataset::QuestionSet;
pub use errors::{QuizError, Result};
pub use model::{
    AnswerRecord, CategoryVote, Phase, Question, QuestionOption, Recommendation, TranscriptEntry,
};
pub use session::{QuizSession, SessionState, Step};
