//! Patch parsing and language detection.

mod language;
mod patch;

pub use language::detect_language;
pub use patch::parse_patch;
