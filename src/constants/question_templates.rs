use crate::models::domain::EntityLabel;

/// Marker substituted for the answer span in fill-in-the-blank questions.
pub const BLANK_MARKER: &str = "______";

pub const FILL_IN_BLANK_PREFIX: &str = "Fill in the blank: ";

/// Placeholder replaced with a sentence excerpt when a template needs context.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Direct-question templates, per label. Labels without templates cannot
/// produce a direct question and fall through to fill-in-the-blank only.
pub fn question_templates(label: EntityLabel) -> Option<&'static [&'static str]> {
    match label {
        EntityLabel::Person => Some(&[
            "Who is mentioned in the following context: '{context}...'?",
            "Which person is associated with the described situation?",
            "Who is the key individual mentioned?",
        ]),
        EntityLabel::Org => Some(&[
            "Which organization is mentioned in this context?",
            "What company or institution is referenced?",
            "Which organization is being discussed?",
        ]),
        EntityLabel::Gpe => Some(&[
            "Which location is mentioned in this context?",
            "What place is being referenced?",
            "Which geographical location is discussed?",
        ]),
        EntityLabel::Date => Some(&[
            "When did this event occur?",
            "What is the time period mentioned?",
            "Which date is referenced?",
        ]),
        _ => None,
    }
}
