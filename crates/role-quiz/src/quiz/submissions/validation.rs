use std::collections::{BTreeMap, BTreeSet};

use super::super::bank;
use super::super::domain::{Question, QuestionId, QuestionKind, Response, ResponseMap};

/// Validation errors raised before a response map reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum ValidationViolation {
    #[error("question {0} is not part of the quiz")]
    UnknownQuestion(QuestionId),
    #[error("question {question} expects a different response shape")]
    ShapeMismatch { question: QuestionId },
    #[error("option index {index} out of range for question {question}")]
    OptionOutOfRange { question: QuestionId, index: usize },
    #[error("question {question} accepts at most {max} selections")]
    TooManySelections { question: QuestionId, max: u8 },
    #[error("question {question} selections must be distinct")]
    DuplicateSelection { question: QuestionId },
    #[error("question {question} requires at least one selection")]
    EmptySelection { question: QuestionId },
    #[error("core question {0} is unanswered")]
    MissingCoreQuestion(QuestionId),
}

/// Guard responsible for producing sanitized response maps. The engine stays
/// safe on unvalidated input, but upstream policy requires every core
/// question answered before a submission is scored and persisted.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    core: Vec<Question>,
    bonus: Vec<Question>,
    bank: Vec<Question>,
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResponseValidator {
    /// Validator over the shipped question bank.
    pub fn standard() -> Self {
        Self::with_banks(bank::core_questions(), bank::bonus_questions())
    }

    pub fn with_banks(core: Vec<Question>, bonus: Vec<Question>) -> Self {
        let mut bank = core.clone();
        bank.extend(bonus.clone());
        Self { core, bonus, bank }
    }

    pub fn core_questions(&self) -> &[Question] {
        &self.core
    }

    pub fn bonus_questions(&self) -> &[Question] {
        &self.bonus
    }

    /// The combined bank in scoring order.
    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    /// Check every response against its question's declared shape. With
    /// `require_core` the full core bank must be answered (submission policy);
    /// without it, partial maps pass (preliminary/bonus rounds).
    pub fn validate(
        &self,
        responses: &ResponseMap,
        require_core: bool,
    ) -> Result<ResponseMap, ValidationViolation> {
        let mut sanitized = BTreeMap::new();

        for (question_id, response) in responses {
            let question = self
                .bank
                .iter()
                .find(|question| question.id == *question_id)
                .ok_or(ValidationViolation::UnknownQuestion(*question_id))?;

            let checked = check_shape(question, response)?;
            sanitized.insert(*question_id, checked);
        }

        if require_core {
            for question in &self.core {
                if !sanitized.contains_key(&question.id) {
                    return Err(ValidationViolation::MissingCoreQuestion(question.id));
                }
            }
        }

        Ok(sanitized)
    }
}

fn check_shape(question: &Question, response: &Response) -> Result<Response, ValidationViolation> {
    match (question.kind, response) {
        (QuestionKind::ForcedChoice | QuestionKind::Scale, Response::Single(index)) => {
            if *index >= question.options.len() {
                return Err(ValidationViolation::OptionOutOfRange {
                    question: question.id,
                    index: *index,
                });
            }
            Ok(Response::Single(*index))
        }
        (QuestionKind::MultiSelect { max_selections }, Response::Multi(indices)) => {
            if indices.is_empty() {
                return Err(ValidationViolation::EmptySelection {
                    question: question.id,
                });
            }
            if indices.len() > max_selections as usize {
                return Err(ValidationViolation::TooManySelections {
                    question: question.id,
                    max: max_selections,
                });
            }

            let distinct: BTreeSet<usize> = indices.iter().copied().collect();
            if distinct.len() != indices.len() {
                return Err(ValidationViolation::DuplicateSelection {
                    question: question.id,
                });
            }

            for index in indices {
                if *index >= question.options.len() {
                    return Err(ValidationViolation::OptionOutOfRange {
                        question: question.id,
                        index: *index,
                    });
                }
            }

            Ok(Response::Multi(indices.clone()))
        }
        _ => Err(ValidationViolation::ShapeMismatch {
            question: question.id,
        }),
    }
}
