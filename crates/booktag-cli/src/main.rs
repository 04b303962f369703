//! booktag — assign vocabulary topics to book catalog records.
//!
//! # Usage
//!
//! ```bash
//! OPENAI_API_KEY=sk-... booktag books.csv topics_out.csv topics.txt
//! ```
//!
//! The output file doubles as the checkpoint: rerunning with the same
//! arguments resumes after its last row. Exit code is 0 on full or
//! partial completion (per-record failures are logged and retried on the
//! next run) and non-zero on fatal configuration or credential errors.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use booktag_classify::{ApiClassifier, ApiClassifierConfig};
use booktag_pipeline::{BatchRunner, RunConfig};
use booktag_types::Vocabulary;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Resolve the credential before touching any input; a missing key
    // fails the run up front rather than after a partial pass.
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY is not set; the classification service credential is required")?;

    let vocabulary = Vocabulary::load(&cli.topics_file)?;
    info!(
        topics = vocabulary.len(),
        path = %cli.topics_file.display(),
        "loaded topic vocabulary"
    );

    let mut config = ApiClassifierConfig::openai(api_key, cli.model);
    config.base_url = cli.base_url;
    config.max_retries = cli.max_retries;
    let classifier = ApiClassifier::new(config)?;

    let runner = BatchRunner::new(
        classifier,
        vocabulary,
        RunConfig {
            max_description_chars: cli.max_description_chars,
        },
    );

    let summary = runner.run(&cli.input_file, &cli.output_file).await?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        output = %cli.output_file.display(),
        "processing completed"
    );

    Ok(())
}
