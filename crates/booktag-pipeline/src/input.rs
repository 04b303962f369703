//! Input catalog reading.

use std::path::Path;

use booktag_types::BookRecord;

use crate::error::PipelineError;

/// Read the whole input catalog in on-disk row order.
///
/// Row order defines processing order and must match the order the output
/// was appended in; resume correctness depends on it. Catalogs are small
/// enough to hold in memory, which also lets the driver locate the
/// checkpoint row before any classification work starts.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<BookRecord>, PipelineError> {
    let path = path.as_ref();
    let input_error = |source| PipelineError::Input {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(input_error)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(input_error)?);
    }
    Ok(records)
}
