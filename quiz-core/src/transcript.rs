//! Transcript rendering for the recommendation prompt.

use crate::model::TranscriptEntry;

/// Renders the answer transcript as labeled lines for the AI prompt.
///
/// Each `{question, answer}` pair becomes exactly one `Q: ... | A: ...`
/// line, joined with newlines in input order. No reordering, no
/// deduplication: N pairs in, N lines out.
pub fn render_transcript(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("Q: {} | A: {}", e.question, e.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(q: &str, a: &str) -> TranscriptEntry {
        TranscriptEntry {
            question: q.into(),
            answer: a.into(),
        }
    }

    #[test]
    fn one_line_per_pair_in_input_order() {
        let entries = [
            entry("What subject do you enjoy?", "Physics"),
            entry("Preferred work style?", "Lab work"),
            entry("What subject do you enjoy?", "Physics"),
        ];
        let rendered = render_transcript(&entries);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q: What subject do you enjoy? | A: Physics");
        assert_eq!(lines[1], "Q: Preferred work style? | A: Lab work");
        // Duplicates survive as-is.
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn empty_transcript_renders_empty() {
        assert_eq!(render_transcript(&[]), "");
    }
}
