// Stopword configuration - the function-word set excluded from cleaned output
//
// Modeled as an explicit value passed into the cleaner rather than ambient
// global state, so tests can supply their own sets.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// High-frequency function words removed during cleaning
const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "he", "she", "it", "they",
    "that", "this", "with", "as", "for", "of", "in", "on", "at", "to", "by", "from", "about",
    "not",
];

/// Error types for stopword configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StopwordError {
    /// The stopword file could not be read
    #[error("Failed to read stopword file: {0}")]
    ReadError(String),
    /// The stopword file was not a JSON array of strings
    #[error("Failed to parse stopword file: {0}")]
    ParseError(String),
}

/// Immutable, case-insensitive stopword set
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().map(|w| w.to_string()))
    }
}

impl StopwordSet {
    /// Build a set from arbitrary words; membership is case-insensitive
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a replacement set from a JSON array of strings
    pub fn from_json_file(path: &Path) -> Result<Self, StopwordError> {
        let content =
            fs::read_to_string(path).map_err(|e| StopwordError::ReadError(e.to_string()))?;

        let words: Vec<String> =
            serde_json::from_str(&content).map_err(|e| StopwordError::ParseError(e.to_string()))?;

        crate::info!("Loaded {} stopwords from {:?}", words.len(), path);
        Ok(Self::new(words))
    }

    /// True if the word's lowercase form is in the set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "stopwords_test.rs"]
mod tests;
