use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::{
    errors::AppResult,
    models::domain::{EntityMap, Mcq},
    nlp::NlpEngine,
    services::generation_steps::{
        build_entity_map, collect_seeds, dedup_preserving_order, rank_key_phrases, select_mcqs,
    },
};

// Analysis requests are capped so a large book does not hit the engine in
// one shot. Chunk failures are logged and skipped.
const ANALYSIS_CHUNK_CHARS: usize = 1_000_000;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DISALLOWED_TEXT_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\w\s\.\,\!\?\;\:\-\$\[\]"'/]"#).expect("text charset pattern is valid")
});

/// Collapses whitespace and strips characters that tend to confuse sentence
/// segmentation in text pulled from PDFs.
fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUNS.replace_all(text.trim(), " ");
    DISALLOWED_TEXT_CHARS.replace_all(&collapsed, "").into_owned()
}

/// Splits on char boundaries into chunks of at most `max_chars` characters.
fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut chars_in_chunk = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_chunk == max_chars {
            chunks.push(&text[chunk_start..byte_idx]);
            chunk_start = byte_idx;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }
    if chars_in_chunk > 0 {
        chunks.push(&text[chunk_start..]);
    }

    chunks
}

/// Drives the whole generation pipeline: clean and chunk the text, run each
/// chunk through the NLP engine, merge the harvested entities, key phrases,
/// and seeds, then select and shuffle the final question batch.
pub struct McqService {
    nlp: Arc<dyn NlpEngine>,
}

impl McqService {
    pub fn new(nlp: Arc<dyn NlpEngine>) -> Self {
        Self { nlp }
    }

    pub async fn nlp_available(&self) -> bool {
        self.nlp.is_available().await
    }

    pub async fn generate(&self, text: &str, num_questions: usize) -> AppResult<Vec<Mcq>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let cleaned = clean_text(text);
        let mut entity_map = EntityMap::new();
        let mut key_phrases: Vec<String> = Vec::new();
        let mut seeds = Vec::new();

        for chunk in split_chunks(&cleaned, ANALYSIS_CHUNK_CHARS) {
            let analysis = match self.nlp.analyze(chunk).await {
                Ok(analysis) => analysis,
                Err(err) => {
                    log::warn!("skipping chunk after analysis failure: {}", err);
                    continue;
                }
            };

            entity_map.merge(build_entity_map(&analysis));
            key_phrases.extend(rank_key_phrases(&analysis));
            seeds.extend(collect_seeds(&analysis));
        }
        dedup_preserving_order(&mut key_phrases);

        log::info!(
            "harvested {} entities, {} key phrases, {} candidate seeds",
            entity_map.total_entities(),
            key_phrases.len(),
            seeds.len()
        );

        let mut rng = rand::rng();
        let mut mcqs = select_mcqs(&mut rng, seeds, &entity_map, &key_phrases, num_questions);
        mcqs.shuffle(&mut rng);

        log::info!("generated {} questions", mcqs.len());
        Ok(mcqs)
    }
}
