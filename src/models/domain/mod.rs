pub mod entity;
pub mod mcq;
pub mod seed;

pub use entity::{EntityLabel, EntityMap};
pub use mcq::{Difficulty, Mcq};
pub use seed::Seed;
