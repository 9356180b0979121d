use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    constants::generic_distractors::generic_distractors,
    models::domain::{EntityLabel, EntityMap},
};

pub const MAX_DISTRACTORS: usize = 3;
const MAX_PHRASE_WORDS: usize = 3;

/// Builds up to three wrong answers for the given correct answer, in order
/// of plausibility: same-label entities from the document first, then short
/// key phrases, then the built-in generic table. The correct answer and any
/// already-chosen distractor are excluded case-insensitively at every stage.
/// Ordering within the result carries no meaning; options are shuffled
/// downstream.
pub fn synthesize_distractors<R: Rng>(
    rng: &mut R,
    answer: &str,
    label: EntityLabel,
    entities: &EntityMap,
    key_phrases: &[String],
) -> Vec<String> {
    let answer_lower = answer.to_lowercase();
    let mut distractors: Vec<String> = Vec::new();

    let same_label: Vec<String> = entities
        .of_label(label)
        .iter()
        .filter(|e| e.to_lowercase() != answer_lower)
        .cloned()
        .collect();
    distractors.extend(same_label.choose_multiple(rng, MAX_DISTRACTORS).cloned());

    if distractors.len() < MAX_DISTRACTORS {
        let chosen: HashSet<String> = distractors.iter().map(|d| d.to_lowercase()).collect();
        let phrase_candidates: Vec<String> = key_phrases
            .iter()
            .filter(|p| p.split_whitespace().count() <= MAX_PHRASE_WORDS)
            .filter(|p| {
                let lower = p.to_lowercase();
                lower != answer_lower && !chosen.contains(&lower)
            })
            .cloned()
            .collect();
        let needed = MAX_DISTRACTORS - distractors.len();
        distractors.extend(phrase_candidates.choose_multiple(rng, needed).cloned());
    }

    if distractors.len() < MAX_DISTRACTORS {
        let chosen: HashSet<String> = distractors.iter().map(|d| d.to_lowercase()).collect();
        let generic_candidates: Vec<String> = generic_distractors(label)
            .iter()
            .filter(|g| {
                let lower = g.to_lowercase();
                lower != answer_lower && !chosen.contains(&lower)
            })
            .map(|g| g.to_string())
            .collect();
        let needed = MAX_DISTRACTORS - distractors.len();
        distractors.extend(generic_candidates.choose_multiple(rng, needed).cloned());
    }

    distractors.truncate(MAX_DISTRACTORS);
    distractors
}
