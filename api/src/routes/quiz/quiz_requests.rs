use quiz_core::{CategoryVote, Question, TranscriptEntry};
use serde::{Deserialize, Serialize};

/// Response payload for GET /api/quiz/start.
#[derive(Debug, Serialize)]
pub struct StartResponse {
    /// Every general-phase question, in dataset order.
    pub questions: Vec<Question>,
}

/// Request payload for POST /api/quiz/next.
#[derive(Debug, Deserialize)]
pub struct NextRequest {
    /// General-phase votes; the browser already filters out entries missing
    /// an id or category, but the service validates again.
    pub answers: Vec<CategoryVote>,
}

/// Response payload for POST /api/quiz/next.
#[derive(Debug, Serialize)]
pub struct NextResponse {
    pub dominant_category: String,
    pub questions: Vec<Question>,
}

/// Request payload for POST /api/quiz/submit.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Full transcript across both phases, in answer order.
    pub all_answers: Vec<TranscriptEntry>,
}

/// Response payload for POST /api/quiz/submit.
///
/// `data` is the AI's raw textual output, passed through unparsed; the
/// client is responsible for interpreting it as JSON.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_request_uses_the_browser_field_names() {
        let body: NextRequest = serde_json::from_str(
            r#"{"answers":[{"questionId":"g1","selectedCategory":"Science"}]}"#,
        )
        .unwrap();
        assert_eq!(body.answers[0].question_id, "g1");
        assert_eq!(body.answers[0].selected_category, "Science");
    }

    #[test]
    fn submit_response_wire_shape() {
        let resp = SubmitResponse {
            status: "success",
            data: r#"{"recommended_stream":"Science"}"#.into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        // Raw passthrough: the payload stays a string, not nested JSON.
        assert!(json["data"].is_string());
    }

    #[test]
    fn start_response_serializes_question_phase_lowercase() {
        use quiz_core::{Phase, QuestionOption};

        let resp = StartResponse {
            questions: vec![Question {
                id: "g1".into(),
                phase: Phase::General,
                category: None,
                question: "Q?".into(),
                options: vec![QuestionOption {
                    text: "A".into(),
                    category: Some("Arts".into()),
                }],
            }],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["questions"][0]["phase"], "general");
        assert_eq!(json["questions"][0]["options"][0]["category"], "Arts");
        // Absent category is omitted, matching the original dataset shape.
        assert!(json["questions"][0].get("category").is_none());
    }
}
