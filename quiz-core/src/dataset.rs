//! Startup question dataset.
//!
//! The dataset is one JSON file (`{"questions": [...]}`) read exactly once
//! when the service boots. A missing or malformed file degrades to an empty
//! question set with a loud warning instead of failing startup; the quiz then
//! serves empty question lists until the operator fixes the file.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::{QuizError, Result};
use crate::model::Question;

/// Env var pointing at the dataset file.
pub const DATASET_PATH_VAR: &str = "QUIZ_DATASET_PATH";

/// Fallback path relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/questions.json";

/// On-disk shape of the dataset file.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    questions: Vec<Question>,
}

/// Read-only question set loaded at startup and shared across requests.
#[derive(Debug, Clone, Default)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Wraps an already-built question list (used by tests and fixtures).
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Loads the dataset from `path`, degrading to an empty set on failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(set) => {
                info!(path = %path.display(), count = set.len(), "question dataset loaded");
                set
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load question dataset, serving an empty set"
                );
                Self::default()
            }
        }
    }

    /// Resolves the dataset path from `QUIZ_DATASET_PATH` (falling back to
    /// `data/questions.json`) and loads it.
    pub fn load_from_env() -> Self {
        let path = std::env::var(DATASET_PATH_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
        Self::load(path)
    }

    /// Strict load used internally; callers get the degrade-to-empty policy
    /// via [`QuestionSet::load`].
    fn try_load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: DatasetFile =
            serde_json::from_str(&raw).map_err(QuizError::DatasetParse)?;
        Ok(Self::from_questions(file.questions))
    }

    /// All questions in stored order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_tmp(name: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("quiz-dataset-{name}-{nanos}.json"))
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let set = QuestionSet::load("/definitely/not/here/questions.json");
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty() {
        let path = unique_tmp("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let set = QuestionSet::load(&path);
        assert!(set.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn valid_file_loads_in_stored_order() {
        let path = unique_tmp("valid");
        std::fs::write(
            &path,
            r#"{"questions":[
                {"id":"g1","phase":"general","question":"Q1","options":[{"text":"A","category":"Science"}]},
                {"id":"s1","phase":"specific","category":"Science","question":"Q2","options":[{"text":"B"}]}
            ]}"#,
        )
        .unwrap();
        let set = QuestionSet::load(&path);
        assert_eq!(set.len(), 2);
        assert_eq!(set.all()[0].id, "g1");
        assert_eq!(set.all()[1].id, "s1");
        let _ = std::fs::remove_file(&path);
    }
}
