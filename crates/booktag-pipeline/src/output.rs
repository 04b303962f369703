//! Append-only output writing.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use booktag_types::TaggedRecord;

use crate::error::PipelineError;

const HEADER: [&str; 2] = ["id", "topics"];

/// Append-only writer for classification results.
///
/// Opens the output file in append mode, writing the header only when the
/// file is empty; a pre-existing file keeps its header and rows untouched.
/// Every appended row is flushed before control returns, so completed work
/// survives a crash and the trailing row is always a valid checkpoint.
pub struct ResultWriter {
    writer: csv::Writer<std::fs::File>,
    path: PathBuf,
}

impl ResultWriter {
    /// Open the output file for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref().to_path_buf();
        let output_error = |path: &PathBuf, source: csv::Error| PipelineError::Output {
            path: path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| output_error(&path, e.into()))?;
        let needs_header = file
            .metadata()
            .map_err(|e| output_error(&path, e.into()))?
            .len()
            == 0;

        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let mut result = Self { writer, path };

        if needs_header {
            result.write_row(HEADER)?;
            result.flush()?;
        }
        Ok(result)
    }

    /// Append one result row and flush it immediately.
    pub fn append(&mut self, record: &TaggedRecord) -> Result<(), PipelineError> {
        let topics = record.joined_topics();
        self.write_row([record.id.as_str(), topics.as_str()])?;
        self.flush()
    }

    fn write_row<I, F>(&mut self, row: I) -> Result<(), PipelineError>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|source| PipelineError::Output {
                path: self.path.clone(),
                source,
            })
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        self.writer.flush().map_err(|e| PipelineError::Output {
            path: self.path.clone(),
            source: e.into(),
        })
    }
}
