use crate::models::domain::EntityLabel;

/// Built-in fallback answers used when a document does not supply enough
/// same-label entities or key phrases to fill out an option list.
pub fn generic_distractors(label: EntityLabel) -> &'static [&'static str] {
    match label {
        EntityLabel::Person => &[
            "Albert Einstein",
            "Marie Curie",
            "Isaac Newton",
            "Charles Darwin",
            "Leonardo da Vinci",
        ],
        EntityLabel::Org => &[
            "Harvard University",
            "Stanford University",
            "MIT",
            "Oxford University",
            "Cambridge University",
        ],
        EntityLabel::Gpe => &[
            "United States",
            "United Kingdom",
            "Germany",
            "France",
            "Japan",
            "China",
            "India",
        ],
        EntityLabel::Date => &["1990", "2000", "2010", "1985", "1995", "2005", "2015"],
        EntityLabel::Money => &["$1,000", "$5,000", "$10,000", "$500", "$2,000"],
        EntityLabel::Percent => &["25%", "50%", "75%", "10%", "30%", "60%", "90%"],
        EntityLabel::Cardinal => &["100", "500", "1000", "50", "200", "300", "750"],
        EntityLabel::Event => &[
            "World War II",
            "Industrial Revolution",
            "Renaissance",
            "Cold War",
        ],
        EntityLabel::Product => &["iPhone", "Windows", "Android", "MacBook"],
        EntityLabel::WorkOfArt => &[
            "Mona Lisa",
            "The Starry Night",
            "The Scream",
            "Guernica",
        ],
        EntityLabel::Law | EntityLabel::Language => &[],
    }
}
