pub mod spacy_client;

pub use spacy_client::SpacyClient;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// One analyzed chunk of text, as returned by the external NLP engine.
/// Sentence segmentation, POS tagging, and named-entity recognition all
/// happen on the engine side; this crate only filters and samples.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Analysis {
    pub sentences: Vec<AnalyzedSentence>,
    #[serde(default)]
    pub noun_chunks: Vec<NounChunk>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnalyzedSentence {
    pub text: String,
    #[serde(default)]
    pub entities: Vec<RawEntity>,
}

/// An entity span with the engine's label string (e.g. `PERSON`, `NORP`).
/// Unknown labels are dropped during harvesting.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawEntity {
    pub text: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NounChunk {
    pub text: String,
    pub root_pos: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Token {
    pub text: String,
    pub pos: String,
    pub is_stop: bool,
    pub is_alpha: bool,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NlpEngine: Send + Sync {
    async fn analyze(&self, text: &str) -> AppResult<Analysis>;

    /// Whether the engine can currently serve requests. Handlers reject
    /// with 503 before any generation work when this is false.
    async fn is_available(&self) -> bool;
}
