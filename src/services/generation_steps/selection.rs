use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    models::domain::{EntityLabel, EntityMap, Mcq, Seed},
    services::generation_steps::{create_direct_question, create_fill_in_blank},
};

/// Labels are drained in this order so a batch leads with the question
/// types that read most naturally. Labels not listed only surface through
/// the fallback pass.
pub const LABEL_PRIORITY: [EntityLabel; 8] = [
    EntityLabel::Person,
    EntityLabel::Org,
    EntityLabel::Gpe,
    EntityLabel::Date,
    EntityLabel::Event,
    EntityLabel::Product,
    EntityLabel::Money,
    EntityLabel::Percent,
];

/// Turns candidate seeds into at most `requested` questions. Seeds are
/// shuffled up front, answers are used at most once per batch
/// (case-insensitive), and a seed that cannot produce a question is skipped
/// rather than failing the batch. Exhausting the seeds before reaching
/// `requested` is normal and returns a short batch.
pub fn select_mcqs<R: Rng>(
    rng: &mut R,
    mut seeds: Vec<Seed>,
    entities: &EntityMap,
    key_phrases: &[String],
    requested: usize,
) -> Vec<Mcq> {
    let mut mcqs = Vec::new();
    let mut used_answers: HashSet<String> = HashSet::new();
    seeds.shuffle(rng);

    'priority: for label in LABEL_PRIORITY {
        if mcqs.len() >= requested {
            break;
        }
        for seed in seeds.iter().filter(|s| s.label == label) {
            if mcqs.len() >= requested {
                break 'priority;
            }
            let answer_key = seed.answer.to_lowercase();
            if used_answers.contains(&answer_key) {
                continue;
            }

            let mcq = create_fill_in_blank(rng, seed, entities, key_phrases)
                .or_else(|| create_direct_question(rng, seed, entities, key_phrases));

            if let Some(mcq) = mcq {
                used_answers.insert(answer_key);
                mcqs.push(mcq);
            }
        }
    }

    // Any remaining slots take whatever label is left, fill-in-the-blank only.
    for seed in &seeds {
        if mcqs.len() >= requested {
            break;
        }
        let answer_key = seed.answer.to_lowercase();
        if used_answers.contains(&answer_key) {
            continue;
        }

        if let Some(mcq) = create_fill_in_blank(rng, seed, entities, key_phrases) {
            used_answers.insert(answer_key);
            mcqs.push(mcq);
        }
    }

    mcqs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn einstein_seeds() -> Vec<Seed> {
        vec![
            Seed::new(
                "Albert Einstein was born in Ulm.",
                "Albert Einstein",
                EntityLabel::Person,
            ),
            Seed::new(
                "Albert Einstein was born in Ulm.",
                "Ulm",
                EntityLabel::Gpe,
            ),
            Seed::new(
                "He won the Nobel Prize in 1921.",
                "1921",
                EntityLabel::Date,
            ),
        ]
    }

    #[test]
    fn stops_at_the_requested_count() {
        let mcqs = select_mcqs(&mut rng(), einstein_seeds(), &EntityMap::new(), &[], 2);
        assert_eq!(mcqs.len(), 2);
    }

    #[test]
    fn returns_fewer_when_seeds_run_out() {
        let mcqs = select_mcqs(&mut rng(), einstein_seeds(), &EntityMap::new(), &[], 10);
        assert_eq!(mcqs.len(), 3);
    }

    #[test]
    fn answers_are_unique_case_insensitively() {
        let mut seeds = einstein_seeds();
        seeds.push(Seed::new(
            "ALBERT EINSTEIN developed relativity.",
            "ALBERT EINSTEIN",
            EntityLabel::Person,
        ));

        for seed_value in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed_value);
            let mcqs = select_mcqs(&mut rng, seeds.clone(), &EntityMap::new(), &[], 10);

            let mut answers: Vec<String> =
                mcqs.iter().map(|m| m.answer.to_lowercase()).collect();
            answers.sort();
            answers.dedup();
            assert_eq!(answers.len(), mcqs.len());
        }
    }

    #[test]
    fn seed_with_absent_answer_is_skipped_not_fatal() {
        let seeds = vec![
            // Answer never appears in the sentence and MONEY has no
            // templates, so this seed can produce nothing.
            Seed::new(
                "The grant was generous.",
                "$5,000,000",
                EntityLabel::Money,
            ),
            Seed::new(
                "He won the Nobel Prize in 1921.",
                "1921",
                EntityLabel::Date,
            ),
        ];

        let mcqs = select_mcqs(&mut rng(), seeds, &EntityMap::new(), &[], 5);
        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "1921");
    }

    #[test]
    fn unprioritized_labels_come_through_the_fallback_pass() {
        let seeds = vec![Seed::new(
            "The Mona Lisa hangs in the Louvre.",
            "The Mona Lisa",
            EntityLabel::WorkOfArt,
        )];

        let mcqs = select_mcqs(&mut rng(), seeds, &EntityMap::new(), &[], 1);
        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].question_type, "work_of_art");
        assert!(mcqs[0].question.contains("______"));
    }

    #[test]
    fn direct_question_used_when_blank_fails_for_templated_label() {
        // PERSON answer absent from the sentence: fill-in-the-blank fails
        // but the direct-question template set still applies.
        let seeds = vec![Seed::new(
            "The discovery changed physics forever.",
            "Marie Curie",
            EntityLabel::Person,
        )];

        let mcqs = select_mcqs(&mut rng(), seeds, &EntityMap::new(), &[], 1);
        assert_eq!(mcqs.len(), 1);
        assert!(!mcqs[0].question.contains("______"));
        assert_eq!(mcqs[0].answer, "Marie Curie");
    }

    #[test]
    fn requested_zero_returns_empty() {
        let mcqs = select_mcqs(&mut rng(), einstein_seeds(), &EntityMap::new(), &[], 0);
        assert!(mcqs.is_empty());
    }
}
