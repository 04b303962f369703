//! CLI argument parsing for the booktag binary.

use std::path::PathBuf;

use clap::Parser;

/// Assign topics to books based on their descriptions
///
/// Reads a book catalog CSV, classifies each description against a fixed
/// topic vocabulary through an OpenAI-compatible API, and appends one
/// result row per book. Interrupted runs resume from the last written row.
#[derive(Parser, Debug)]
#[command(name = "booktag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV file containing book descriptions
    pub input_file: PathBuf,

    /// Path to the output CSV file where topics will be saved
    pub output_file: PathBuf,

    /// Path to the text file containing the list of topics, one per line
    pub topics_file: PathBuf,

    /// Model used for classification
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// API base URL
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub base_url: String,

    /// Maximum attempts per record, including the first
    #[arg(long, default_value_t = 5)]
    pub max_retries: u32,

    /// Maximum cleaned-description length submitted for classification
    #[arg(long, default_value_t = 1000)]
    pub max_description_chars: usize,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}
