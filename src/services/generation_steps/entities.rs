use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    models::domain::{EntityLabel, EntityMap, Seed},
    nlp::Analysis,
};

const MAX_ENTITY_CHARS: usize = 50;
const MAX_SENTENCE_CHARS: usize = 300;
pub const MIN_SENTENCE_CHARS: usize = 10;

// Entity texts are restricted to word characters, whitespace, hyphens,
// periods, commas, and apostrophes. Anything else is noise from extraction.
static DISALLOWED_ENTITY_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-\.\,\']").expect("entity charset pattern is valid"));

fn acceptable_entity_text(text: &str) -> bool {
    let chars = text.chars().count();
    chars > 1 && chars <= MAX_ENTITY_CHARS && !DISALLOWED_ENTITY_CHARS.is_match(text)
}

/// Collects all recognized entities into a per-label map, dropping unknown
/// labels and malformed spans.
pub fn build_entity_map(analysis: &Analysis) -> EntityMap {
    let mut map = EntityMap::new();

    for sentence in &analysis.sentences {
        for entity in &sentence.entities {
            let Some(label) = EntityLabel::from_engine(&entity.label) else {
                continue;
            };
            let text = entity.text.trim();
            if acceptable_entity_text(text) {
                map.insert(label, text);
            }
        }
    }

    map
}

/// Pairs each qualifying sentence with each entity inside it, yielding one
/// candidate seed per pair. Sentences that are too short or too long carry
/// no seeds at all.
pub fn collect_seeds(analysis: &Analysis) -> Vec<Seed> {
    let mut seeds = Vec::new();

    for sentence in &analysis.sentences {
        let text = sentence.text.trim();
        let chars = text.chars().count();
        if chars < MIN_SENTENCE_CHARS || chars > MAX_SENTENCE_CHARS {
            continue;
        }

        for entity in &sentence.entities {
            let Some(label) = EntityLabel::from_engine(&entity.label) else {
                continue;
            };
            let answer = entity.text.trim();
            if answer.chars().count() > 1 {
                seeds.push(Seed::new(text, answer, label));
            }
        }
    }

    seeds
}
