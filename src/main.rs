// cha2arpa CLI - converts a tree of CHAT transcript files into cleaned text
// and ARPAbet phonetic transcriptions

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;

use cha2arpa::batch::BatchProcessor;
use cha2arpa::cleaner::TranscriptCleaner;
use cha2arpa::dictionary::PronunciationDict;
use cha2arpa::phonemizer::PhoneticTransformer;
use cha2arpa::stopwords::StopwordSet;

#[derive(Debug, Parser)]
#[command(
    name = "cha2arpa",
    version,
    about = "Convert CHAT transcripts into cleaned text and ARPAbet phonetic transcriptions"
)]
struct Cli {
    /// Directory containing input transcript files
    input_dir: PathBuf,

    /// Path to the CMU Pronunciation Dictionary (Latin-1 text)
    #[arg(long)]
    dict: PathBuf,

    /// Output root for cleaned text files
    #[arg(long, default_value = "clean")]
    clean_dir: PathBuf,

    /// Output root for phonetic transcription files
    #[arg(long, default_value = "transformed")]
    phonetic_dir: PathBuf,

    /// Input file extension to process
    #[arg(long, default_value = "cha")]
    extension: String,

    /// JSON array file replacing the built-in stopword set
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let stopwords = match &cli.stopwords {
        Some(path) => match StopwordSet::from_json_file(path) {
            Ok(set) => set,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => StopwordSet::default(),
    };

    // A missing dictionary breaks every downstream lookup, so bail out now
    let dict = match PronunciationDict::load(&cli.dict) {
        Ok(dict) => dict,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let cleaner = TranscriptCleaner::new(stopwords);
    let transformer = PhoneticTransformer::new();
    let processor = BatchProcessor::new(&cleaner, &transformer, &dict, &cli.extension);

    info!("Processing {:?}", cli.input_dir);
    let summary = processor.process_tree(&cli.input_dir, &cli.clean_dir, &cli.phonetic_dir);
    info!(
        "Done: {} processed, {} skipped, {} failed",
        summary.processed, summary.skipped, summary.failed
    );
}
