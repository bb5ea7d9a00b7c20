use crate::infra::default_scoring_config;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

use role_quiz::error::AppError;
use role_quiz::quiz::submissions::{ResponseValidator, ValidationViolation};
use role_quiz::quiz::{
    bank, dominance_score, BonusSelector, ConfidenceBand, ConfidenceThresholds, QuestionId,
    Response, ResponseMap, ScoringEngine, ScoringResult,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file mapping question ids to selected option indexes,
    /// e.g. {"1": 0, "8": [0, 2]}
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// List the malformed responses dropped before scoring
    #[arg(long)]
    pub(crate) show_dropped: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the contested scenario and its bonus round
    #[arg(long)]
    pub(crate) decisive_only: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.responses)?;
    let responses: ResponseMap = serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;

    let validator = ResponseValidator::standard();
    let (sanitized, rejected) = partition_responses(&validator, &responses);

    if args.show_dropped && !rejected.is_empty() {
        println!("Dropped malformed responses:");
        for (question_id, violation) in &rejected {
            println!("  {question_id}: {violation}");
        }
    }

    let engine = ScoringEngine::new(default_scoring_config());
    let result = engine.score(&sanitized, validator.bank());
    render_result("Scored responses", &result);
    Ok(())
}

/// Validate each response on its own so one malformed entry does not sink
/// the whole file: the rest still scores, the rejects are reported.
fn partition_responses(
    validator: &ResponseValidator,
    responses: &ResponseMap,
) -> (ResponseMap, Vec<(QuestionId, ValidationViolation)>) {
    let mut sanitized = ResponseMap::new();
    let mut rejected = Vec::new();

    for (question_id, response) in responses {
        let entry: ResponseMap = [(*question_id, response.clone())].into_iter().collect();
        match validator.validate(&entry, false) {
            Ok(checked) => sanitized.extend(checked),
            Err(violation) => rejected.push((*question_id, violation)),
        }
    }

    (sanitized, rejected)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::new(default_scoring_config());
    let core = bank::core_questions();

    println!("Role quiz scoring demo");
    println!("{}", "=".repeat(60));

    let decisive = decisive_responses();
    let result = engine.score(&decisive, &core);
    render_result("\nScenario 1: decisive backend profile", &result);

    if args.decisive_only {
        return Ok(());
    }

    let mut contested = contested_responses();
    let preliminary = engine.score(&contested, &core);
    render_result("\nScenario 2: contested backend/frontend profile", &preliminary);

    let selector = BonusSelector::default();
    let bonus_bank = bank::bonus_questions();
    let offered = selector.select(&preliminary, &bonus_bank);

    println!("\nBonus round");
    if offered.is_empty() {
        println!("  No bonus questions needed; the ranking is already decisive.");
        return Ok(());
    }
    for question in &offered {
        println!("  [{}] {}", question.id, question.prompt);
    }

    // Answer the first offered question in the backend direction and rescore
    // the combined map.
    contested.insert(offered[0].id, Response::Single(0));
    let full = bank::full_bank();
    let resolved = engine.score(&contested, &full);
    render_result("\nScenario 2 after bonus answers", &resolved);
    Ok(())
}

fn render_result(heading: &str, result: &ScoringResult) {
    println!("{}", heading);
    println!("  Primary role: {}", result.primary.label());
    if let Some(secondary) = result.secondary {
        println!("  Secondary role: {}", secondary.code());
    }

    let dominance = dominance_score(&result.ranked);
    let band = ConfidenceBand::classify(
        dominance,
        result.tie_detected,
        &ConfidenceThresholds::default(),
    );
    println!("  Dominance: {} ({})", dominance, band.label());

    println!("  Ranking:");
    for standing in &result.ranked {
        println!(
            "    #{} {:<4} total {:>3}  strong signals {}",
            standing.rank,
            standing.role.code(),
            standing.total,
            standing.strong_signals
        );
    }

    if !result.skill_profile.is_empty() {
        let tags: Vec<String> = result
            .skill_profile
            .iter()
            .map(|(tag, count)| format!("{} x{}", tag, count))
            .collect();
        println!("  Skills: {}", tags.join(", "));
    }

    if !result.evidence_highlights.is_empty() {
        println!("  Evidence:");
        for highlight in &result.evidence_highlights {
            println!("    - {}", highlight.evidence);
        }
    }

    println!("  Narrative: {}", result.narrative);
}

fn decisive_responses() -> ResponseMap {
    let mut responses = BTreeMap::new();
    responses.insert(1, Response::Single(0));
    responses.insert(2, Response::Single(0));
    responses.insert(3, Response::Single(0));
    responses.insert(4, Response::Single(2));
    responses.insert(5, Response::Single(2));
    responses.insert(6, Response::Single(2));
    responses.insert(7, Response::Single(0));
    responses.insert(8, Response::Multi(vec![0]));
    responses.insert(9, Response::Multi(vec![0]));
    responses.insert(10, Response::Single(0));
    responses
}

fn contested_responses() -> ResponseMap {
    let mut responses = BTreeMap::new();
    responses.insert(1, Response::Single(0));
    responses.insert(2, Response::Single(1));
    responses.insert(3, Response::Single(0));
    responses.insert(4, Response::Single(0));
    responses.insert(5, Response::Single(2));
    responses.insert(6, Response::Single(2));
    responses.insert(7, Response::Single(0));
    responses.insert(8, Response::Multi(vec![1]));
    responses.insert(9, Response::Multi(vec![1]));
    responses.insert(10, Response::Single(1));
    responses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_entries_are_dropped_while_the_rest_still_score() {
        let validator = ResponseValidator::standard();
        let mut responses = contested_responses();
        responses.insert(1, Response::Single(99));
        responses.insert(999, Response::Single(0));

        let (sanitized, rejected) = partition_responses(&validator, &responses);

        assert_eq!(sanitized.len(), 9);
        assert!(!sanitized.contains_key(&1));
        assert!(rejected.iter().any(|(id, violation)| {
            *id == 1 && matches!(violation, ValidationViolation::OptionOutOfRange { .. })
        }));
        assert!(rejected.iter().any(|(id, violation)| {
            *id == 999 && matches!(violation, ValidationViolation::UnknownQuestion(999))
        }));
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn well_formed_files_drop_nothing() {
        let validator = ResponseValidator::standard();
        let responses = decisive_responses();

        let (sanitized, rejected) = partition_responses(&validator, &responses);

        assert_eq!(sanitized, responses);
        assert!(rejected.is_empty());
    }
}
