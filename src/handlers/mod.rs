pub mod question_handler;

pub use question_handler::{
    generate_from_pdf, generate_from_text, health_check, health_check_live, health_check_ready,
};
