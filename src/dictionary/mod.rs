// Pronunciation dictionary module - loads the CMU dictionary and selects
// pronunciation variants for words

mod loader;
mod selector;

pub use loader::{DictionaryError, Pronunciation, PronunciationDict};
pub use selector::{FirstVariant, VariantSelector};
