// Phonetic transformer - rewrites cleaned transcript text as ARPAbet phoneme
// sequences via dictionary lookup

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionary::{FirstVariant, PronunciationDict, VariantSelector};

/// A sentence ends at . ! or ? followed by whitespace
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Word tokens are alphanumeric runs; everything else separates and is dropped
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Transformer that maps each word token to its pronunciation
pub struct PhoneticTransformer {
    selector: Box<dyn VariantSelector>,
}

impl Default for PhoneticTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticTransformer {
    /// Create a transformer using the first-listed-variant policy
    pub fn new() -> Self {
        Self::with_selector(Box::new(FirstVariant))
    }

    /// Create a transformer with a custom variant-selection strategy
    pub fn with_selector(selector: Box<dyn VariantSelector>) -> Self {
        Self { selector }
    }

    /// Transform cleaned text into one flat line of phoneme tokens.
    ///
    /// Tokens found in the dictionary are replaced by the selected variant's
    /// phonemes joined with spaces; unknown tokens pass through uppercased.
    /// Sentence boundaries are not preserved in the output.
    pub fn transform(&self, text: &str, dict: &PronunciationDict) -> String {
        split_sentences(text)
            .iter()
            .map(|sentence| self.transform_sentence(sentence, dict))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn transform_sentence(&self, sentence: &str, dict: &PronunciationDict) -> String {
        WORD.find_iter(sentence)
            .map(|m| {
                let word = m.as_str().to_uppercase();
                match dict.lookup(&word).and_then(|v| self.selector.select(v)) {
                    Some(phonemes) => phonemes.join(" "),
                    None => word,
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split text into sentence units at punctuation boundaries; the terminating
/// punctuation mark stays with its sentence
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        // the punctuation mark is a single byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
#[path = "phonemizer_test.rs"]
mod tests;
