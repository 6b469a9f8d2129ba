// cha2arpa - converts CHAT conversational transcripts into cleaned text and
// ARPAbet phonetic transcriptions using the CMU Pronunciation Dictionary

pub mod batch;
pub mod cleaner;
pub mod dictionary;
pub mod phonemizer;
pub mod stopwords;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
