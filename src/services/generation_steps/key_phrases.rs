use std::collections::{HashMap, HashSet};

use crate::nlp::Analysis;

const MAX_KEY_PHRASES: usize = 100;
const MIN_TOKEN_CHARS: usize = 4;

// Reporting verbs and connectives that make useless distractors.
const NOUN_BLOCKLIST: &[&str] = &["said", "says", "according", "including"];
const VERB_BLOCKLIST: &[&str] = &["is", "are", "was", "were", "have", "has", "had"];

/// Harvests candidate key phrases (noun chunks, content nouns, content
/// verbs) and ranks them by frequency, most-frequent first. Ties keep their
/// first-occurrence order. At most 100 phrases survive per analysis.
pub fn rank_key_phrases(analysis: &Analysis) -> Vec<String> {
    let mut harvested: Vec<String> = Vec::new();

    for chunk in &analysis.noun_chunks {
        let text = chunk.text.trim();
        let words = text.split_whitespace().count();
        if (2..=5).contains(&words)
            && text.chars().count() > 3
            && chunk.root_pos != "PRON"
            && chunk.root_pos != "DET"
        {
            harvested.push(text.to_string());
        }
    }

    for token in &analysis.tokens {
        if (token.pos == "NOUN" || token.pos == "PROPN")
            && token.text.chars().count() >= MIN_TOKEN_CHARS
            && !token.is_stop
            && token.is_alpha
            && !NOUN_BLOCKLIST.contains(&token.text.to_lowercase().as_str())
        {
            harvested.push(token.text.clone());
        }
    }

    for token in &analysis.tokens {
        if token.pos == "VERB"
            && token.text.chars().count() >= MIN_TOKEN_CHARS
            && !token.is_stop
            && !VERB_BLOCKLIST.contains(&token.text.to_lowercase().as_str())
        {
            harvested.push(token.text.clone());
        }
    }

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (first_seen, phrase) in harvested.iter().enumerate() {
        let entry = counts.entry(phrase).or_insert((0, first_seen));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(phrase, (count, first_seen))| (phrase, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(MAX_KEY_PHRASES)
        .map(|(phrase, _, _)| phrase.to_string())
        .collect()
}

/// Removes later duplicates from a merged phrase list, keeping the first
/// occurrence in place.
pub fn dedup_preserving_order(phrases: &mut Vec<String>) {
    let mut seen = HashSet::new();
    phrases.retain(|phrase| seen.insert(phrase.clone()));
}
