use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question identifiers are globally unique across the core and bonus banks;
/// responses are keyed by them alone.
pub type QuestionId = u32;

/// A respondent's (possibly partial) answer set.
pub type ResponseMap = BTreeMap<QuestionId, Response>;

/// The closed set of roles the quiz assigns respondents to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Be,
    Fe,
    Qa,
    Pm,
}

impl Role {
    /// Fixed iteration order used everywhere a deterministic role order is
    /// needed (totals initialization, contribution tie-breaks, stable ranking).
    pub const ALL: [Role; 4] = [Role::Be, Role::Fe, Role::Qa, Role::Pm];

    pub const fn code(self) -> &'static str {
        match self {
            Role::Be => "BE",
            Role::Fe => "FE",
            Role::Qa => "QA",
            Role::Pm => "PM",
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Role::Be => "be",
            Role::Fe => "fe",
            Role::Qa => "qa",
            Role::Pm => "pm",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Role::Be => "Backend Engineer",
            Role::Fe => "Frontend Engineer",
            Role::Qa => "Quality Engineer",
            Role::Pm => "Product Manager",
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Role::Be => {
                "You are happiest designing data models, APIs, and the systems that \
                 keep everything running under load."
            }
            Role::Fe => {
                "You focus on what people see and touch, sweating interaction details \
                 until the product feels right."
            }
            Role::Qa => {
                "You are wired to find what breaks, build safety nets, and keep \
                 regressions out of production."
            }
            Role::Pm => {
                "You are driven by the why: shaping scope, aligning people, and making \
                 sure the right thing ships."
            }
        }
    }
}

/// Per-role integer score vector attached to each answer option.
/// Negative values are permitted by the engine even though the shipped bank
/// does not use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScores {
    pub be: i32,
    pub fe: i32,
    pub qa: i32,
    pub pm: i32,
}

impl RoleScores {
    pub const ZERO: RoleScores = RoleScores::new(0, 0, 0, 0);

    pub const fn new(be: i32, fe: i32, qa: i32, pm: i32) -> Self {
        Self { be, fe, qa, pm }
    }

    pub const fn get(&self, role: Role) -> i32 {
        match role {
            Role::Be => self.be,
            Role::Fe => self.fe,
            Role::Qa => self.qa,
            Role::Pm => self.pm,
        }
    }

    /// Highest single-role value awarded by this vector.
    pub fn max_value(&self) -> i32 {
        Role::ALL
            .iter()
            .map(|role| self.get(*role))
            .max()
            .unwrap_or(0)
    }

    /// First role (in [`Role::ALL`] order) holding the maximum value.
    pub fn leading_role(&self) -> Role {
        let max = self.max_value();
        Role::ALL
            .into_iter()
            .find(|role| self.get(*role) == max)
            .unwrap_or(Role::Be)
    }
}

/// Kind tags mirror the three question shapes the validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    ForcedChoice,
    MultiSelect { max_selections: u8 },
    Scale,
}

impl QuestionKind {
    pub const fn is_single_select(self) -> bool {
        matches!(self, QuestionKind::ForcedChoice | QuestionKind::Scale)
    }
}

/// One selectable answer: its display text, scoring vector, and the metadata
/// carried into skill profiles and evidence highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub scores: RoleScores,
    pub tags: Vec<String>,
    pub evidence: String,
}

/// A quiz item. Options, scoring vectors, and metadata stay index-aligned by
/// construction because each option owns its own vector and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

/// A respondent's answer to one question. Single-select questions carry one
/// zero-based option index; multi-select carries up to two distinct indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Single(usize),
    Multi(Vec<usize>),
}

/// Primary-role assignment: a single role, or a hybrid pair on a qualifying tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    Single(Role),
    Hybrid(Role, Role),
}

impl RoleAssignment {
    pub fn label(&self) -> String {
        match self {
            RoleAssignment::Single(role) => role.code().to_string(),
            RoleAssignment::Hybrid(first, second) => {
                format!("{} + {}", first.code(), second.code())
            }
        }
    }

    pub fn includes(&self, role: Role) -> bool {
        match self {
            RoleAssignment::Single(primary) => *primary == role,
            RoleAssignment::Hybrid(first, second) => *first == role || *second == role,
        }
    }
}
