//! Bonus-question selection. The selector looks at preliminary totals and
//! decides which extra questions (if any) to present; their responses are
//! folded into the same response map and the engine simply re-scores the
//! enlarged set. The engine keeps no incremental state between the rounds.

use super::domain::{Question, Role};
use super::scoring::ScoringResult;

/// Offers bonus questions when the race for first place is still close.
#[derive(Debug, Clone, Copy)]
pub struct BonusSelector {
    /// A bonus round is offered when the leader's margin over second place is
    /// at most this many points.
    pub margin: i32,
}

impl Default for BonusSelector {
    fn default() -> Self {
        Self { margin: 2 }
    }
}

impl BonusSelector {
    pub fn new(margin: i32) -> Self {
        Self { margin }
    }

    /// Pick the bonus questions that discriminate between the two contested
    /// roles. Returns an empty list when the result is already decisive.
    pub fn select(&self, preliminary: &ScoringResult, bonus_bank: &[Question]) -> Vec<Question> {
        let (Some(top), Some(second)) = (preliminary.ranked.first(), preliminary.ranked.get(1))
        else {
            return Vec::new();
        };

        if top.total - second.total > self.margin {
            return Vec::new();
        }

        let contested = (top.role, second.role);
        bonus_bank
            .iter()
            .filter(|question| discriminates(question, contested))
            .cloned()
            .collect()
    }
}

/// A question discriminates between two roles when at least one option favors
/// each side over the other.
fn discriminates(question: &Question, (a, b): (Role, Role)) -> bool {
    let favors_a = question
        .options
        .iter()
        .any(|opt| opt.scores.get(a) > opt.scores.get(b));
    let favors_b = question
        .options
        .iter()
        .any(|opt| opt.scores.get(b) > opt.scores.get(a));
    favors_a && favors_b
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::super::bank;
    use super::super::domain::{Response, ResponseMap};
    use super::super::scoring::ScoringEngine;
    use super::*;

    fn preliminary(responses: ResponseMap) -> ScoringResult {
        ScoringEngine::default().score(&responses, &bank::core_questions())
    }

    #[test]
    fn decisive_results_get_no_bonus_round() {
        // Every single-select answer favors BE.
        let responses: ResponseMap = [
            (1u32, Response::Single(0)),
            (2, Response::Single(0)),
            (3, Response::Single(0)),
            (7, Response::Single(0)),
            (10, Response::Single(0)),
        ]
        .into_iter()
        .collect();

        let selector = BonusSelector::default();
        let offered = selector.select(&preliminary(responses), &bank::bonus_questions());
        assert!(offered.is_empty());
    }

    #[test]
    fn close_races_offer_discriminating_questions() {
        // BE and FE neck and neck.
        let responses: ResponseMap = [
            (1u32, Response::Single(0)),
            (2, Response::Single(1)),
            (3, Response::Single(0)),
            (4, Response::Single(0)),
        ]
        .into_iter()
        .collect();

        let selector = BonusSelector::default();
        let offered = selector.select(&preliminary(responses), &bank::bonus_questions());

        assert!(!offered.is_empty());
        // Question 101 splits BE from FE; 104 splits QA from PM and must not
        // show up for a BE/FE race.
        assert!(offered.iter().any(|question| question.id == 101));
        assert!(offered.iter().all(|question| question.id != 104));
    }

    #[test]
    fn empty_input_is_a_four_way_tie_and_still_offers_questions() {
        let selector = BonusSelector::default();
        let offered = selector.select(&preliminary(BTreeMap::new()), &bank::bonus_questions());
        assert!(!offered.is_empty());
    }
}
