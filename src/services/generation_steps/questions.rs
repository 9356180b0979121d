use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use regex::Regex;

use crate::{
    constants::question_templates::{
        question_templates, BLANK_MARKER, CONTEXT_PLACEHOLDER, FILL_IN_BLANK_PREFIX,
    },
    models::domain::{EntityMap, Mcq, Seed},
    services::generation_steps::synthesize_distractors,
};

pub const MIN_DISTRACTORS: usize = 2;

const CONTEXT_EXCERPT_CHARS: usize = 100;

/// Replaces the first case-insensitive occurrence of the answer in the
/// sentence with the blank marker. Returns None when the answer does not
/// appear verbatim (such seeds are skipped, never fatal).
fn blank_out_answer(sentence: &str, answer: &str) -> Option<String> {
    let pattern = Regex::new(&format!("(?i){}", regex::escape(answer))).ok()?;
    if !pattern.is_match(sentence) {
        return None;
    }
    Some(pattern.replacen(sentence, 1, BLANK_MARKER).into_owned())
}

pub fn create_fill_in_blank<R: Rng>(
    rng: &mut R,
    seed: &Seed,
    entities: &EntityMap,
    key_phrases: &[String],
) -> Option<Mcq> {
    let blanked = blank_out_answer(&seed.sentence, &seed.answer)?;
    let question = format!("{}{}", FILL_IN_BLANK_PREFIX, blanked);
    assemble(rng, question, seed, entities, key_phrases)
}

/// Direct templated question. Only labels with a template set can produce
/// one; the rest return None and rely on fill-in-the-blank.
pub fn create_direct_question<R: Rng>(
    rng: &mut R,
    seed: &Seed,
    entities: &EntityMap,
    key_phrases: &[String],
) -> Option<Mcq> {
    let templates = question_templates(seed.label)?;
    let template = templates.choose(rng)?;

    let question = if template.contains(CONTEXT_PLACEHOLDER) {
        let excerpt: String = seed.sentence.chars().take(CONTEXT_EXCERPT_CHARS).collect();
        template.replace(CONTEXT_PLACEHOLDER, &excerpt)
    } else {
        template.to_string()
    };

    assemble(rng, question, seed, entities, key_phrases)
}

fn assemble<R: Rng>(
    rng: &mut R,
    question: String,
    seed: &Seed,
    entities: &EntityMap,
    key_phrases: &[String],
) -> Option<Mcq> {
    let distractors = synthesize_distractors(rng, &seed.answer, seed.label, entities, key_phrases);
    if distractors.len() < MIN_DISTRACTORS {
        return None;
    }

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(seed.answer.clone());
    options.extend(distractors);
    options.shuffle(rng);

    Some(Mcq::new(question, options, seed.answer.clone(), seed.label))
}
