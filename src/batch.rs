// Batch driver - walks an input tree of transcript files and writes cleaned
// and phonetic artifacts to mirrored output trees
//
// A single file's failure never aborts the batch; it is logged and counted.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cleaner::TranscriptCleaner;
use crate::dictionary::PronunciationDict;
use crate::phonemizer::PhoneticTransformer;

/// Extension written for both output artifacts
const OUTPUT_EXTENSION: &str = "txt";

/// Error types for per-file batch processing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BatchError {
    /// Input transcript could not be read
    #[error("Failed to read {path:?}: {message}")]
    Read { path: PathBuf, message: String },
    /// Output artifact could not be written
    #[error("Failed to write {path:?}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Counts for one batch run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Files cleaned and transformed successfully
    pub processed: usize,
    /// Files whose cleaned output was empty; no artifacts written
    pub skipped: usize,
    /// Files that failed to read or write
    pub failed: usize,
}

/// Batch processor tying the cleaner and transformer to the filesystem
pub struct BatchProcessor<'a> {
    cleaner: &'a TranscriptCleaner,
    transformer: &'a PhoneticTransformer,
    dict: &'a PronunciationDict,
    extension: String,
}

impl<'a> BatchProcessor<'a> {
    /// Create a processor for input files with the given extension
    pub fn new(
        cleaner: &'a TranscriptCleaner,
        transformer: &'a PhoneticTransformer,
        dict: &'a PronunciationDict,
        extension: &str,
    ) -> Self {
        Self {
            cleaner,
            transformer,
            dict,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Walk `input_root` recursively and process every matching transcript,
    /// mirroring the directory structure under the two output roots.
    pub fn process_tree(
        &self,
        input_root: &Path,
        clean_root: &Path,
        phonetic_root: &Path,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        let entries = WalkDir::new(input_root).into_iter().filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                crate::error!("Failed to walk input tree: {}", e);
                None
            }
        });

        for entry in entries {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            // walkdir only yields paths under input_root, so this cannot fail
            let Ok(relative) = path.strip_prefix(input_root) else {
                continue;
            };

            match self.process_file(path, relative, clean_root, phonetic_root) {
                Ok(true) => summary.processed += 1,
                Ok(false) => {
                    crate::debug!("No content after cleaning, skipping {:?}", path);
                    summary.skipped += 1;
                }
                Err(e) => {
                    crate::error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Process one transcript. Returns Ok(false) when the cleaned text is
    /// empty and no artifacts were written.
    fn process_file(
        &self,
        path: &Path,
        relative: &Path,
        clean_root: &Path,
        phonetic_root: &Path,
    ) -> Result<bool, BatchError> {
        crate::debug!("Processing {:?}", path);

        let raw = fs::read_to_string(path).map_err(|e| BatchError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let cleaned = self.cleaner.clean(&raw);
        if cleaned.is_empty() {
            return Ok(false);
        }
        let phonetic = self.transformer.transform(&cleaned, self.dict);

        let out_name = relative.with_extension(OUTPUT_EXTENSION);
        write_artifact(&clean_root.join(&out_name), &cleaned)?;
        write_artifact(&phonetic_root.join(&out_name), &phonetic)?;

        Ok(true)
    }
}

/// Write one output file, creating parent directories as needed
fn write_artifact(path: &Path, content: &str) -> Result<(), BatchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BatchError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    fs::write(path, content).map_err(|e| BatchError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
