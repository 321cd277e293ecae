//! Letterhead extraction module.

pub mod normalizer;
mod parser;
pub mod rules;

pub use normalizer::normalize_lines;
pub use parser::LetterParser;
