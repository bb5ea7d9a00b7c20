use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::super::domain::ResponseMap;

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Inbound payload: who answered and what they answered. Shapes are checked
/// by the [`ResponseValidator`](super::validation::ResponseValidator) before
/// the engine ever sees the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmissionRequest {
    pub respondent: String,
    #[serde(default)]
    pub team: Option<String>,
    pub responses: ResponseMap,
}

/// Request metadata persisted alongside a submission. The raw origin is never
/// stored, only its hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata {
    pub user_agent: Option<String>,
    pub origin_hash: Option<String>,
}

impl RequestMetadata {
    pub fn from_parts(user_agent: Option<String>, origin: Option<&str>) -> Self {
        Self {
            user_agent,
            origin_hash: origin.map(hash_origin),
        }
    }
}

fn hash_origin(origin: &str) -> String {
    let digest = Sha256::digest(origin.as_bytes());
    digest.iter().fold(String::new(), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    })
}
