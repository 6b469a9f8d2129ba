// Dictionary loader - parses the CMU Pronunciation Dictionary into an
// in-memory word -> pronunciation-variants map
//
// The resource is Latin-1 encoded plain text, one entry per line: the word,
// then its ARPAbet phonemes, whitespace-separated. Alternate pronunciations
// repeat the word with a parenthetical numeric marker, e.g. "WORD(2)".

use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Comment lines in the dictionary start with this prefix
const COMMENT_PREFIX: &str = ";;;";

/// Matches the parenthetical variant marker on a word, e.g. the "(2)" in "WORD(2)"
static VARIANT_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\d+\)").unwrap());

/// One pronunciation: an ordered sequence of ARPAbet phoneme tokens
pub type Pronunciation = Vec<String>;

/// Error types for dictionary loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary resource could not be read
    #[error("Failed to read pronunciation dictionary: {0}")]
    Unreadable(String),
}

/// Read-only mapping from word to its pronunciation variants, in the order
/// they appeared in the source resource
#[derive(Debug, Default)]
pub struct PronunciationDict {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl PronunciationDict {
    /// Load the dictionary from a Latin-1 encoded file.
    ///
    /// An unreadable resource is propagated to the caller; a missing
    /// dictionary breaks every downstream lookup, so the CLI treats this as
    /// fatal. Malformed lines are skipped, never fatal.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        crate::debug!("Loading pronunciation dictionary from {:?}", path);

        let bytes = fs::read(path)
            .map_err(|e| DictionaryError::Unreadable(format!("{:?}: {}", path, e)))?;
        // Latin-1: every byte maps to the code point of equal value
        let text: String = bytes.iter().map(|&b| b as char).collect();

        let dict = Self::parse(&text);
        crate::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    /// Parse dictionary text into a mapping.
    ///
    /// Comment lines and lines without any phoneme field are skipped. The
    /// variant marker is stripped from the word so all pronunciations of a
    /// word collapse under one key, appended in file order.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();

        for line in text.lines() {
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let phonemes: Pronunciation = fields.map(str::to_string).collect();
            if phonemes.is_empty() {
                crate::debug!("Skipping malformed dictionary line: {:?}", line);
                continue;
            }
            let key = VARIANT_MARKER.replace_all(word, "").into_owned();
            entries.entry(key).or_default().push(phonemes);
        }

        Self { entries }
    }

    /// Look up a word by exact match. Callers are expected to uppercase
    /// first; no fuzzy or prefix matching is done.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words in the dictionary
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
