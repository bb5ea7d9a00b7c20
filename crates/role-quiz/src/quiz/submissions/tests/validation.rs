use super::common::*;
use crate::quiz::domain::Response;
use crate::quiz::submissions::validation::{ResponseValidator, ValidationViolation};

#[test]
fn complete_core_set_passes_strict_validation() {
    let validator = ResponseValidator::standard();
    let sanitized = validator
        .validate(&be_heavy_responses(), true)
        .expect("complete set validates");
    assert_eq!(sanitized.len(), 10);
}

#[test]
fn partial_sets_pass_when_core_is_not_required() {
    let validator = ResponseValidator::standard();
    let mut responses = be_heavy_responses();
    responses.retain(|id, _| *id <= 3);

    assert!(validator.validate(&responses, false).is_ok());

    match validator.validate(&responses, true) {
        Err(ValidationViolation::MissingCoreQuestion(id)) => assert_eq!(id, 4),
        other => panic!("expected missing core question, got {other:?}"),
    }
}

#[test]
fn unknown_question_ids_are_rejected() {
    let validator = ResponseValidator::standard();
    let mut responses = be_heavy_responses();
    responses.insert(999, Response::Single(0));

    match validator.validate(&responses, false) {
        Err(ValidationViolation::UnknownQuestion(999)) => {}
        other => panic!("expected unknown question, got {other:?}"),
    }
}

#[test]
fn out_of_range_indices_are_rejected() {
    let validator = ResponseValidator::standard();
    let mut responses = be_heavy_responses();
    responses.insert(1, Response::Single(14));

    match validator.validate(&responses, false) {
        Err(ValidationViolation::OptionOutOfRange { question: 1, index: 14 }) => {}
        other => panic!("expected out-of-range, got {other:?}"),
    }
}

#[test]
fn multi_select_enforces_the_selection_cap() {
    let validator = ResponseValidator::standard();
    let mut responses = be_heavy_responses();
    responses.insert(8, Response::Multi(vec![0, 1, 2]));

    match validator.validate(&responses, false) {
        Err(ValidationViolation::TooManySelections { question: 8, max: 2 }) => {}
        other => panic!("expected selection cap, got {other:?}"),
    }
}

#[test]
fn multi_select_rejects_duplicates_and_empty_sets() {
    let validator = ResponseValidator::standard();

    let mut responses = be_heavy_responses();
    responses.insert(8, Response::Multi(vec![1, 1]));
    assert!(matches!(
        validator.validate(&responses, false),
        Err(ValidationViolation::DuplicateSelection { question: 8 })
    ));

    let mut responses = be_heavy_responses();
    responses.insert(8, Response::Multi(Vec::new()));
    assert!(matches!(
        validator.validate(&responses, false),
        Err(ValidationViolation::EmptySelection { question: 8 })
    ));
}

#[test]
fn response_shape_must_match_question_kind() {
    let validator = ResponseValidator::standard();

    let mut responses = be_heavy_responses();
    responses.insert(8, Response::Single(0));
    assert!(matches!(
        validator.validate(&responses, false),
        Err(ValidationViolation::ShapeMismatch { question: 8 })
    ));

    let mut responses = be_heavy_responses();
    responses.insert(1, Response::Multi(vec![0]));
    assert!(matches!(
        validator.validate(&responses, false),
        Err(ValidationViolation::ShapeMismatch { question: 1 })
    ));
}
