use serde::{Deserialize, Serialize};

use crate::resume::keywords_for;

/// Keyword gap analysis result. `found` and `missing` keep the order of the
/// keyword list and never overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeywordMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub match_percentage: f64,
}

impl KeywordMatch {
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

pub struct ResumeService;

impl ResumeService {
    /// Case-insensitive substring test of every keyword against the text.
    ///
    /// Keywords repeated in the list (ignoring case) are considered once.
    pub fn match_keywords<S: AsRef<str>>(resume_text: &str, keywords: &[S]) -> KeywordMatch {
        let haystack = resume_text.to_lowercase();
        let mut seen: Vec<String> = Vec::with_capacity(keywords.len());
        let mut result = KeywordMatch::default();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            let needle = keyword.to_lowercase();
            if seen.contains(&needle) {
                continue;
            }
            seen.push(needle.clone());
            if haystack.contains(&needle) {
                result.found.push(keyword.to_string());
            } else {
                result.missing.push(keyword.to_string());
            }
        }

        if result.total() > 0 {
            result.match_percentage = result.found.len() as f64 / result.total() as f64 * 100.0;
        }
        result
    }

    /// Matches against the built-in list for `category`.
    pub fn match_category(resume_text: &str, category: &str) -> KeywordMatch {
        Self::match_keywords(resume_text, keywords_for(category))
    }
}
