use serde::{Deserialize, Serialize};

use crate::models::domain::EntityLabel;

/// A candidate question: one sentence paired with one entity found inside
/// it. Whether a seed survives depends on question construction and the
/// batch-level answer-uniqueness rule.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Seed {
    pub sentence: String,
    pub answer: String,
    pub label: EntityLabel,
}

impl Seed {
    pub fn new(sentence: &str, answer: &str, label: EntityLabel) -> Self {
        Seed {
            sentence: sentence.to_string(),
            answer: answer.to_string(),
            label,
        }
    }
}
