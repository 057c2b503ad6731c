//! Question selection: the general subset and the dominant-category
//! specific subset.

use tracing::debug;

use crate::dataset::QuestionSet;
use crate::errors::{QuizError, Result};
use crate::model::{CategoryVote, Phase, Question};

/// Returns every general-phase question in stored order.
///
/// Idempotent and side-effect free; the same subset comes back on every call.
pub fn general_questions(set: &QuestionSet) -> Vec<Question> {
    set.all()
        .iter()
        .filter(|q| q.phase == Phase::General)
        .cloned()
        .collect()
}

/// Computes the most frequently voted category.
///
/// Votes with an empty `selected_category` are ignored. Ties are broken by
/// first-encountered-maximum order: counting is stable over the order in
/// which categories first appear in the input, and a later category only
/// wins with a strictly greater count. That tie policy is deliberate, not
/// incidental.
///
/// # Errors
/// [`QuizError::NoValidAnswers`] when no vote carries a category.
pub fn dominant_category(votes: &[CategoryVote]) -> Result<String> {
    // Counts keyed by first-occurrence order. The list stays tiny (a handful
    // of streams), so a linear scan beats pulling in a map.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for vote in votes {
        let category = vote.selected_category.trim();
        if category.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(category, n) in &counts {
        match best {
            Some((_, m)) if n <= m => {}
            _ => best = Some((category, n)),
        }
    }

    best.map(|(category, _)| category.to_string())
        .ok_or(QuizError::NoValidAnswers)
}

/// Picks the specific-phase questions for the dominant category of `votes`.
///
/// Returns the resolved dominant category together with every stored question
/// whose `phase == Specific` and whose `category` matches, in stored order.
/// An unknown dominant category simply yields an empty question list.
///
/// # Errors
/// [`QuizError::NoValidAnswers`] for an empty or entirely invalid input.
pub fn specific_questions(
    set: &QuestionSet,
    votes: &[CategoryVote],
) -> Result<(String, Vec<Question>)> {
    let dominant = dominant_category(votes)?;

    let questions: Vec<Question> = set
        .all()
        .iter()
        .filter(|q| q.phase == Phase::Specific && q.category.as_deref() == Some(dominant.as_str()))
        .cloned()
        .collect();

    debug!(
        dominant = %dominant,
        votes = votes.len(),
        selected = questions.len(),
        "resolved specific question set"
    );

    Ok((dominant, questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionOption;

    fn vote(id: &str, category: &str) -> CategoryVote {
        CategoryVote {
            question_id: id.into(),
            selected_category: category.into(),
        }
    }

    fn question(id: &str, phase: Phase, category: Option<&str>) -> Question {
        Question {
            id: id.into(),
            phase,
            category: category.map(Into::into),
            question: format!("question {id}"),
            options: vec![QuestionOption {
                text: "opt".into(),
                category: None,
            }],
        }
    }

    fn fixture_set() -> QuestionSet {
        QuestionSet::from_questions(vec![
            question("g1", Phase::General, None),
            question("s-sci-1", Phase::Specific, Some("Science")),
            question("g2", Phase::General, None),
            question("s-art-1", Phase::Specific, Some("Arts")),
            question("s-sci-2", Phase::Specific, Some("Science")),
        ])
    }

    #[test]
    fn general_subset_keeps_stored_order_and_is_idempotent() {
        let set = fixture_set();
        let first = general_questions(&set);
        let second = general_questions(&set);
        let ids: Vec<_> = first.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2"]);
        assert_eq!(ids, second.iter().map(|q| q.id.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn dominant_category_by_frequency() {
        let votes = [
            vote("q1", "Science"),
            vote("q2", "Science"),
            vote("q3", "Arts"),
        ];
        assert_eq!(dominant_category(&votes).unwrap(), "Science");
    }

    #[test]
    fn ties_resolve_to_earliest_first_occurrence() {
        let votes = [
            vote("q1", "Arts"),
            vote("q2", "Science"),
            vote("q3", "Science"),
            vote("q4", "Arts"),
        ];
        assert_eq!(dominant_category(&votes).unwrap(), "Arts");
    }

    #[test]
    fn empty_votes_are_rejected() {
        assert!(matches!(
            dominant_category(&[]),
            Err(QuizError::NoValidAnswers)
        ));
    }

    #[test]
    fn votes_without_categories_are_rejected() {
        let votes = [vote("q1", ""), vote("q2", "  ")];
        assert!(matches!(
            dominant_category(&votes),
            Err(QuizError::NoValidAnswers)
        ));
    }

    #[test]
    fn specific_questions_match_dominant_in_stored_order() {
        let set = fixture_set();
        let votes = [vote("q1", "Science"), vote("q2", "Arts"), vote("q3", "Science")];
        let (dominant, questions) = specific_questions(&set, &votes).unwrap();
        assert_eq!(dominant, "Science");
        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["s-sci-1", "s-sci-2"]);
    }

    #[test]
    fn unknown_dominant_yields_empty_list() {
        let set = QuestionSet::from_questions(vec![question("g1", Phase::General, None)]);
        let (dominant, questions) =
            specific_questions(&set, &[vote("q1", "Commerce")]).unwrap();
        assert_eq!(dominant, "Commerce");
        assert!(questions.is_empty());
    }
}
