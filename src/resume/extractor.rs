use std::{fs, path::Path};

use crate::errors::{NextStepError, NextStepResult};

/// Capability that turns a resume document into raw text.
///
/// Implementations may fail (corrupt PDF, missing file, remote parser down);
/// callers go through [`extract_or_empty`] so matching still runs.
pub trait TextExtractor {
    fn extract(&self, source: &Path) -> NextStepResult<String>;
}

/// Reads UTF-8 text files and normalises them to uppercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, source: &Path) -> NextStepResult<String> {
        let bytes = fs::read(source)?;
        let text = String::from_utf8(bytes).map_err(|_| {
            NextStepError::Extraction(format!("{} is not UTF-8 text", source.display()))
        })?;
        Ok(text.to_uppercase())
    }
}

/// Runs the extractor, degrading to an empty string on failure.
pub fn extract_or_empty(extractor: &dyn TextExtractor, source: &Path) -> String {
    match extractor.extract(source) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(source = %source.display(), error = %err, "resume extraction failed");
            String::new()
        }
    }
}
