//! Resume inputs: per-category keyword lists and text extraction.

pub mod extractor;
pub mod keywords;

pub use extractor::{extract_or_empty, PlainTextExtractor, TextExtractor};
pub use keywords::{keywords_for, known_categories};
