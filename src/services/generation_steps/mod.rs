pub mod distractors;
pub mod entities;
pub mod key_phrases;
pub mod questions;
pub mod selection;

pub use distractors::synthesize_distractors;
pub use entities::{build_entity_map, collect_seeds};
pub use key_phrases::{dedup_preserving_order, rank_key_phrases};
pub use questions::{create_direct_question, create_fill_in_blank};
pub use selection::select_mcqs;
