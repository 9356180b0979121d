use crate::nlp::{Analysis, AnalyzedSentence, NounChunk, RawEntity, Token};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn entity(text: &str, label: &str) -> RawEntity {
        RawEntity {
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    pub fn sentence(text: &str, entities: Vec<RawEntity>) -> AnalyzedSentence {
        AnalyzedSentence {
            text: text.to_string(),
            entities,
        }
    }

    pub fn token(text: &str, pos: &str) -> Token {
        Token {
            text: text.to_string(),
            pos: pos.to_string(),
            is_stop: false,
            is_alpha: true,
        }
    }

    /// Canonical smoke-test document: two sentences, three entities.
    pub fn einstein_analysis() -> Analysis {
        Analysis {
            sentences: vec![
                sentence(
                    "Albert Einstein was born in Ulm.",
                    vec![entity("Albert Einstein", "PERSON"), entity("Ulm", "GPE")],
                ),
                sentence(
                    "He won the Nobel Prize in 1921.",
                    vec![entity("1921", "DATE")],
                ),
            ],
            noun_chunks: vec![NounChunk {
                text: "the Nobel Prize".to_string(),
                root_pos: "PROPN".to_string(),
            }],
            tokens: vec![token("Einstein", "PROPN"), token("born", "VERB")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_einstein_fixture_shape() {
        let analysis = einstein_analysis();
        assert_eq!(analysis.sentences.len(), 2);
        assert_eq!(analysis.sentences[0].entities.len(), 2);
        assert_eq!(analysis.noun_chunks.len(), 1);
    }
}
