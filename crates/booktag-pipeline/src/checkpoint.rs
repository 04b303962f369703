//! Resume-point resolution from prior output.
//!
//! The checkpoint is not stored anywhere on its own: it is the id of the
//! last data row in the output file. Output rows are appended strictly in
//! input order, so that single id fully determines where to resume.

use std::path::Path;

use tracing::warn;

use booktag_types::BookRecord;

use crate::error::PipelineError;

/// Scan prior output for the id of the last completed row.
///
/// A missing, zero-byte, or header-only file means no checkpoint. The
/// scan tolerates a torn trailing row from a crash mid-write; whatever id
/// is readable last wins.
pub fn last_processed_id(path: impl AsRef<Path>) -> Result<Option<String>, PipelineError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| PipelineError::Checkpoint {
            path: path.to_path_buf(),
            source,
        })?;

    let mut last = None;
    for row in reader.records() {
        let row = row.map_err(|source| PipelineError::Checkpoint {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(id) = row.get(0).filter(|id| !id.is_empty()) {
            last = Some(id.to_string());
        }
    }
    Ok(last)
}

/// Index of the first input record still to process.
///
/// Skips everything up to and including the checkpoint id. When the
/// checkpoint id does not occur in the input, input and output have
/// diverged; all rows are processed, matching how the upstream export is
/// rebuilt from scratch in that case.
pub fn resume_position(records: &[BookRecord], checkpoint: Option<&str>) -> usize {
    let Some(checkpoint_id) = checkpoint else {
        return 0;
    };

    match records.iter().position(|r| r.id == checkpoint_id) {
        Some(position) => position + 1,
        None => {
            warn!(
                checkpoint = %checkpoint_id,
                "checkpoint id not found in input, processing all rows"
            );
            0
        }
    }
}
