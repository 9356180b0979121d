use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::EntityLabel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty is keyed purely off the answer's entity label: numeric and
    /// temporal answers are easy to spot, people and places take some
    /// reading, everything else requires real recall.
    pub fn for_label(label: EntityLabel) -> Self {
        match label {
            EntityLabel::Date
            | EntityLabel::Cardinal
            | EntityLabel::Percent
            | EntityLabel::Money => Difficulty::Easy,
            EntityLabel::Person | EntityLabel::Gpe => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// A fully assembled multiple-choice question. `options` holds the correct
/// answer and 2–3 distractors in shuffled order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Mcq {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: String,
}

impl Mcq {
    pub fn new(question: String, options: Vec<String>, answer: String, label: EntityLabel) -> Self {
        Mcq {
            id: Uuid::new_v4().to_string(),
            question,
            options,
            answer,
            difficulty: Difficulty::for_label(label),
            question_type: label.question_type(),
        }
    }
}
