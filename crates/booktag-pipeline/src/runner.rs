//! The batch driver.

use std::path::Path;

use tracing::{error, info};

use booktag_classify::{parse_topics, prepare_description, Classifier};
use booktag_types::{TaggedRecord, Vocabulary};

use crate::checkpoint;
use crate::error::PipelineError;
use crate::input;
use crate::output::ResultWriter;

/// Batch run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum cleaned-description length submitted for classification
    pub max_description_chars: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_description_chars: 1000,
        }
    }
}

/// Outcome counts for one batch pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records classified and written this run
    pub processed: usize,
    /// Records skipped because the checkpoint already covered them
    pub skipped: usize,
    /// Records that failed classification and were left for a later run
    pub failed: usize,
}

/// Drives the full batch pass: resolve the checkpoint, walk the input in
/// order, classify each remaining record, and append-and-flush one output
/// row per record.
pub struct BatchRunner<C: Classifier> {
    classifier: C,
    vocabulary: Vocabulary,
    config: RunConfig,
}

impl<C: Classifier> BatchRunner<C> {
    /// Create a runner owning the classifier and vocabulary for the run.
    pub fn new(classifier: C, vocabulary: Vocabulary, config: RunConfig) -> Self {
        Self {
            classifier,
            vocabulary,
            config,
        }
    }

    /// The classifier backing this runner.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Run the batch.
    ///
    /// Per-record classification failures are logged and skipped; the
    /// record was never written, so the next run picks it up again. Fatal
    /// errors (credential, malformed request) abort immediately, leaving
    /// the output valid and resumable.
    pub async fn run(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<RunSummary, PipelineError> {
        let output_path = output_path.as_ref();

        let checkpoint = checkpoint::last_processed_id(output_path)?;
        if let Some(id) = checkpoint.as_deref() {
            info!(checkpoint = %id, "resuming after last processed id");
        }

        let records = input::read_records(input_path)?;
        let start = checkpoint::resume_position(&records, checkpoint.as_deref());

        let mut writer = ResultWriter::open(output_path)?;
        let mut summary = RunSummary {
            skipped: start,
            ..RunSummary::default()
        };

        for record in &records[start..] {
            info!(id = %record.id, "processing record");

            let text = prepare_description(record, self.config.max_description_chars);
            let raw = match self.classifier.classify(&text, &self.vocabulary).await {
                Ok(raw) => raw,
                Err(e) if e.is_fatal() => {
                    error!(id = %record.id, error = %e, "fatal classification error, aborting batch");
                    return Err(e.into());
                }
                Err(e) => {
                    error!(
                        id = %record.id,
                        error = %e,
                        "classification failed, leaving record for a later run"
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            let topics = parse_topics(&raw, &self.vocabulary);
            writer.append(&TaggedRecord::new(record.id.clone(), topics))?;
            summary.processed += 1;
        }

        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "batch complete"
        );
        Ok(summary)
    }
}
