//! Pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

use booktag_classify::ClassifyError;
use booktag_types::VocabularyError;

/// Errors that abort a batch run.
///
/// Per-record classification failures never surface here; the driver logs
/// and skips those. Everything below leaves the output file in a valid,
/// resumable state.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Missing or empty topics file
    #[error("configuration error: {0}")]
    Config(#[from] VocabularyError),

    /// Input catalog could not be read
    #[error("failed to read input catalog {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Prior output could not be scanned for the checkpoint
    #[error("failed to resolve checkpoint from {}: {source}", .path.display())]
    Checkpoint {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output row could not be appended or flushed
    #[error("failed to append to output file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Fatal classification error (bad credential, malformed request)
    #[error("classification error: {0}")]
    Classify(#[from] ClassifyError),
}
