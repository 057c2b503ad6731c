//! Client-side quiz session state machine.
//!
//! The browser source kept this flow in ambient globals; here it is one
//! owned value with explicit transitions so the progression is testable on
//! its own. States run `general` → `specific` → `complete`, with `failed`
//! as the terminal error state reachable from anywhere. No state is ever
//! re-entered.

use tracing::debug;

use crate::errors::{QuizError, Result};
use crate::model::{AnswerRecord, CategoryVote, Phase, Question, Recommendation, TranscriptEntry};

/// Anticipated size of the specific question set, used by the progress
/// approximation before the real set has been fetched. The served set may
/// be a different size; the fraction is clamped rather than corrected,
/// matching the original client.
pub const EXPECTED_SPECIFIC_QUESTIONS: usize = 2;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Answering the shared general questions.
    General,
    /// Answering the dominant-category questions.
    Specific,
    /// Terminal: recommendation received and parsed.
    Complete(Recommendation),
    /// Terminal: a fetch or parse failed; the UI shows the refresh message.
    Failed,
}

/// What the driver must do after an answer is recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// More questions remain in the accumulated sequence; render the next.
    Ask,
    /// General phase exhausted: POST these votes to `/api/quiz/next` and
    /// extend the session with the returned questions.
    FetchSpecific(Vec<CategoryVote>),
    /// Specific phase exhausted: POST this transcript to `/api/quiz/submit`.
    Submit(Vec<TranscriptEntry>),
}

/// One quiz run: created on page load, dropped on refresh. Questions from
/// both fetches accumulate into a single growing sequence; the index is
/// never reset between phases.
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: SessionState,
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<AnswerRecord>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::General,
            questions: Vec::new(),
            current_index: 0,
            answers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Appends a fetched question batch to the growing sequence.
    pub fn extend_questions(&mut self, batch: Vec<Question>) {
        self.questions.extend(batch);
    }

    /// The question currently shown, or `None` past the end of the sequence.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::General | SessionState::Specific => {
                self.questions.get(self.current_index)
            }
            _ => None,
        }
    }

    /// Records the selected option for the current question and advances.
    ///
    /// Returns the [`Step`] the driver must perform next. Phase boundaries
    /// are crossed here: exhausting the general questions flips the session
    /// to `specific` and hands back the filtered vote payload; exhausting
    /// the specific questions hands back the full transcript.
    ///
    /// # Errors
    /// - [`QuizError::SessionExhausted`] in a terminal state or past the end
    /// - [`QuizError::InvalidOption`] for an out-of-range option index
    pub fn select_option(&mut self, option_index: usize) -> Result<Step> {
        if !matches!(self.state, SessionState::General | SessionState::Specific) {
            return Err(QuizError::SessionExhausted);
        }
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(QuizError::SessionExhausted)?;
        let option = question
            .options
            .get(option_index)
            .ok_or_else(|| QuizError::InvalidOption {
                question_id: question.id.clone(),
                index: option_index,
            })?;

        self.answers.push(AnswerRecord {
            question_id: question.id.clone(),
            question: question.question.clone(),
            answer: option.text.clone(),
            category: option.category.clone(),
        });
        self.current_index += 1;

        if self.current_index < self.questions.len() {
            return Ok(Step::Ask);
        }

        match self.state {
            SessionState::General => {
                self.state = SessionState::Specific;
                debug!(answers = self.answers.len(), "general phase exhausted");
                Ok(Step::FetchSpecific(self.category_votes()))
            }
            SessionState::Specific => {
                debug!(answers = self.answers.len(), "specific phase exhausted");
                Ok(Step::Submit(self.transcript_entries()))
            }
            _ => unreachable!("terminal states handled above"),
        }
    }

    /// Progress fraction for the UI bar.
    ///
    /// Uses [`EXPECTED_SPECIFIC_QUESTIONS`] as the anticipated specific-set
    /// size, so the bar only hits 100% cleanly when the service returns
    /// exactly that many. Kept as the original behaved; clamped at 1.0.
    pub fn progress(&self) -> f32 {
        let general_count = self.general_count();
        let total = general_count + EXPECTED_SPECIFIC_QUESTIONS;
        if total == 0 {
            return 0.0;
        }
        let done = match self.state {
            SessionState::General => self.current_index,
            _ => general_count + self.current_index.saturating_sub(general_count),
        };
        (done as f32 / total as f32).min(1.0)
    }

    /// Parses the raw `/api/quiz/submit` payload and completes the session.
    ///
    /// Malformed AI output is an expected failure mode: the session flips to
    /// [`SessionState::Failed`] and the parse error is surfaced.
    pub fn complete_from_raw(&mut self, raw: &str) -> Result<&Recommendation> {
        match serde_json::from_str::<Recommendation>(raw) {
            Ok(recommendation) => {
                self.state = SessionState::Complete(recommendation);
                match &self.state {
                    SessionState::Complete(r) => Ok(r),
                    _ => unreachable!(),
                }
            }
            Err(err) => {
                self.state = SessionState::Failed;
                Err(QuizError::MalformedRecommendation(err))
            }
        }
    }

    /// Terminal failure: any fetch error at any step lands here. There is no
    /// retry and collected answers are not preserved.
    pub fn fail(&mut self) {
        self.state = SessionState::Failed;
    }

    fn general_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.phase == Phase::General)
            .count()
    }

    /// Votes for `/api/quiz/next`, filtered to entries with both an id and a
    /// non-empty category.
    fn category_votes(&self) -> Vec<CategoryVote> {
        self.answers
            .iter()
            .filter(|a| !a.question_id.is_empty())
            .filter_map(|a| {
                a.category.as_deref().filter(|c| !c.is_empty()).map(|c| CategoryVote {
                    question_id: a.question_id.clone(),
                    selected_category: c.to_string(),
                })
            })
            .collect()
    }

    /// The full transcript for `/api/quiz/submit`, category dropped.
    fn transcript_entries(&self) -> Vec<TranscriptEntry> {
        self.answers
            .iter()
            .map(|a| TranscriptEntry {
                question: a.question.clone(),
                answer: a.answer.clone(),
            })
            .collect()
    }
}
