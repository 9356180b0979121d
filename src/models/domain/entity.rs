use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named-entity categories the generator knows how to build questions around.
/// Anything else coming back from the analysis engine is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Date,
    Money,
    Percent,
    Cardinal,
    Event,
    Product,
    WorkOfArt,
    Law,
    Language,
}

impl EntityLabel {
    /// Parses an engine-side label string (spaCy convention, e.g. `PERSON`).
    pub fn from_engine(label: &str) -> Option<Self> {
        match label {
            "PERSON" => Some(EntityLabel::Person),
            "ORG" => Some(EntityLabel::Org),
            "GPE" => Some(EntityLabel::Gpe),
            "DATE" => Some(EntityLabel::Date),
            "MONEY" => Some(EntityLabel::Money),
            "PERCENT" => Some(EntityLabel::Percent),
            "CARDINAL" => Some(EntityLabel::Cardinal),
            "EVENT" => Some(EntityLabel::Event),
            "PRODUCT" => Some(EntityLabel::Product),
            "WORK_OF_ART" => Some(EntityLabel::WorkOfArt),
            "LAW" => Some(EntityLabel::Law),
            "LANGUAGE" => Some(EntityLabel::Language),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Event => "EVENT",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
        }
    }

    /// Lowercased label, used as the question `type` on the wire.
    pub fn question_type(&self) -> String {
        self.as_str().to_lowercase()
    }
}

/// Entities harvested from a document, grouped by label. Texts are
/// deduplicated per label case-insensitively; the first-seen casing is kept
/// for display.
#[derive(Clone, Debug, Default)]
pub struct EntityMap {
    entries: HashMap<EntityLabel, Vec<String>>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: EntityLabel, text: &str) {
        let texts = self.entries.entry(label).or_default();
        if !texts.iter().any(|t| t.to_lowercase() == text.to_lowercase()) {
            texts.push(text.to_string());
        }
    }

    pub fn of_label(&self, label: EntityLabel) -> &[String] {
        self.entries.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn merge(&mut self, other: EntityMap) {
        for (label, texts) in other.entries {
            for text in texts {
                self.insert(label, &text);
            }
        }
    }

    pub fn total_entities(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
