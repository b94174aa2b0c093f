//! Input resolution and reading

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::read_texts;
pub use glob_resolver::resolve_patterns;
