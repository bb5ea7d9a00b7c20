use std::collections::{BTreeMap, BTreeSet};

use super::super::domain::{Question, QuestionOption, Response, ResponseMap, Role};
use super::config::ScoringConfig;
use super::{EvidenceHighlight, QuestionContribution};

/// Everything the accumulation pass produces before ranking and narrative.
pub(crate) struct Accumulation {
    pub totals: BTreeMap<Role, i32>,
    pub strong_signal_counts: BTreeMap<Role, u32>,
    pub skill_profile: BTreeMap<String, u32>,
    pub evidence: Vec<EvidenceHighlight>,
    pub contributions: Vec<QuestionContribution>,
}

impl Accumulation {
    fn new() -> Self {
        let mut totals = BTreeMap::new();
        let mut strong_signal_counts = BTreeMap::new();
        for role in Role::ALL {
            totals.insert(role, 0);
            strong_signal_counts.insert(role, 0);
        }
        Self {
            totals,
            strong_signal_counts,
            skill_profile: BTreeMap::new(),
            evidence: Vec::new(),
            contributions: Vec::new(),
        }
    }
}

/// Walk the bank in order and fold every answered question into the running
/// totals. Malformed entries (unknown shape, out-of-range index) are skipped,
/// never surfaced: the engine stays total over arbitrary response maps.
pub(crate) fn accumulate(
    responses: &ResponseMap,
    bank: &[Question],
    config: &ScoringConfig,
) -> Accumulation {
    let mut acc = Accumulation::new();

    for question in bank {
        let Some(response) = responses.get(&question.id) else {
            continue;
        };

        match (question.kind.is_single_select(), response) {
            (true, Response::Single(index)) => {
                let Some(option) = question.options.get(*index) else {
                    continue;
                };
                let awarded = apply_option(question, option, config, true, &mut acc);
                if awarded.1 > 0 {
                    acc.contributions.push(QuestionContribution {
                        question_id: question.id,
                        prompt: question.prompt.clone(),
                        role: awarded.0,
                        score: awarded.1,
                    });
                }
            }
            (false, Response::Multi(indices)) => {
                let mut best: Option<(Role, i32)> = None;
                let mut seen = BTreeSet::new();

                for index in indices {
                    if !seen.insert(*index) {
                        continue;
                    }
                    let Some(option) = question.options.get(*index) else {
                        continue;
                    };
                    let awarded = apply_option(
                        question,
                        option,
                        config,
                        config.multi_select_strong_signals,
                        &mut acc,
                    );
                    if best.map(|(_, score)| awarded.1 > score).unwrap_or(true) {
                        best = Some(awarded);
                    }
                }

                if let Some((role, score)) = best {
                    if score > 0 {
                        acc.contributions.push(QuestionContribution {
                            question_id: question.id,
                            prompt: question.prompt.clone(),
                            role,
                            score,
                        });
                    }
                }
            }
            // Response shape does not match the question kind; the validator
            // prevents this upstream, the engine just moves on.
            _ => continue,
        }
    }

    acc
}

/// Fold one selected option into the totals, tag frequencies, strong-signal
/// counts, and evidence list. Returns the winning role and its score.
fn apply_option(
    question: &Question,
    option: &QuestionOption,
    config: &ScoringConfig,
    strong_eligible: bool,
    acc: &mut Accumulation,
) -> (Role, i32) {
    for role in Role::ALL {
        *acc.totals.entry(role).or_insert(0) += option.scores.get(role);
    }

    for tag in &option.tags {
        *acc.skill_profile.entry(tag.clone()).or_insert(0) += 1;
    }

    let best = option.scores.max_value();
    if strong_eligible && best >= config.strong_signal_threshold {
        // An option can be a strong signal for more than one role at once;
        // the highlight itself is recorded exactly once.
        for role in Role::ALL {
            if option.scores.get(role) >= config.strong_signal_threshold {
                *acc.strong_signal_counts.entry(role).or_insert(0) += 1;
            }
        }
        acc.evidence.push(EvidenceHighlight {
            question_id: question.id,
            prompt: question.prompt.clone(),
            option_text: option.text.clone(),
            evidence: option.evidence.clone(),
            tags: option.tags.clone(),
            score: best,
        });
    }

    (option.scores.leading_role(), best)
}

#[cfg(test)]
mod tests {
    use super::super::super::bank;
    use super::super::super::domain::RoleScores;
    use super::*;

    fn respond_single(id: u32, index: usize) -> (u32, Response) {
        (id, Response::Single(index))
    }

    #[test]
    fn absent_questions_contribute_nothing() {
        let bank = bank::core_questions();
        let responses = ResponseMap::new();
        let acc = accumulate(&responses, &bank, &ScoringConfig::default());

        for role in Role::ALL {
            assert_eq!(acc.totals[&role], 0);
            assert_eq!(acc.strong_signal_counts[&role], 0);
        }
        assert!(acc.evidence.is_empty());
        assert!(acc.contributions.is_empty());
        assert!(acc.skill_profile.is_empty());
    }

    #[test]
    fn out_of_range_index_is_skipped() {
        let bank = bank::core_questions();
        let responses: ResponseMap = [respond_single(1, 99)].into_iter().collect();
        let acc = accumulate(&responses, &bank, &ScoringConfig::default());

        for role in Role::ALL {
            assert_eq!(acc.totals[&role], 0);
        }
    }

    #[test]
    fn duplicate_multi_select_indices_count_once() {
        let bank = bank::core_questions();
        let responses: ResponseMap = [(8u32, Response::Multi(vec![0, 0]))].into_iter().collect();
        let acc = accumulate(&responses, &bank, &ScoringConfig::default());

        assert_eq!(acc.totals[&Role::Be], 1);
    }

    #[test]
    fn dual_role_strong_option_counts_for_both_roles_once_in_evidence() {
        let question = Question {
            id: 42,
            kind: super::super::super::domain::QuestionKind::ForcedChoice,
            prompt: "dual".to_string(),
            options: vec![QuestionOption {
                text: "both".to_string(),
                scores: RoleScores::new(2, 0, 2, 0),
                tags: vec!["dual".to_string()],
                evidence: "pulls both ways".to_string(),
            }],
        };
        let responses: ResponseMap = [(42u32, Response::Single(0))].into_iter().collect();
        let acc = accumulate(&responses, &[question], &ScoringConfig::default());

        assert_eq!(acc.strong_signal_counts[&Role::Be], 1);
        assert_eq!(acc.strong_signal_counts[&Role::Qa], 1);
        assert_eq!(acc.strong_signal_counts[&Role::Fe], 0);
        assert_eq!(acc.evidence.len(), 1);
    }

    #[test]
    fn multi_select_strong_signals_can_be_disabled() {
        let question = Question {
            id: 43,
            kind: super::super::super::domain::QuestionKind::MultiSelect { max_selections: 2 },
            prompt: "strong multi".to_string(),
            options: vec![QuestionOption {
                text: "heavy".to_string(),
                scores: RoleScores::new(2, 0, 0, 0),
                tags: vec![],
                evidence: "unusually strong multi option".to_string(),
            }],
        };
        let responses: ResponseMap = [(43u32, Response::Multi(vec![0]))].into_iter().collect();

        let config = ScoringConfig {
            multi_select_strong_signals: false,
            ..ScoringConfig::default()
        };
        let acc = accumulate(&responses, std::slice::from_ref(&question), &config);
        assert_eq!(acc.strong_signal_counts[&Role::Be], 0);
        assert!(acc.evidence.is_empty());
        // Scores still accumulate even when the signal is gated.
        assert_eq!(acc.totals[&Role::Be], 2);

        let acc = accumulate(
            &responses,
            std::slice::from_ref(&question),
            &ScoringConfig::default(),
        );
        assert_eq!(acc.strong_signal_counts[&Role::Be], 1);
        assert_eq!(acc.evidence.len(), 1);
    }

    #[test]
    fn contributions_require_strictly_positive_winning_scores() {
        let bank = bank::core_questions();
        // Question 3's "Neutral" option awards zero everywhere.
        let responses: ResponseMap = [respond_single(3, 2)].into_iter().collect();
        let acc = accumulate(&responses, &bank, &ScoringConfig::default());
        assert!(acc.contributions.is_empty());
    }
}
