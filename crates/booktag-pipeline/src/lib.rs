//! # booktag-pipeline
//!
//! Batch orchestration for topic classification:
//! - Input catalog reading in on-disk row order
//! - Checkpoint resolution from the trailing output row, enabling resume
//! - Append-and-flush output writing so a crash loses at most the record
//!   in flight
//! - The `BatchRunner` driver with per-record failure recovery

pub mod checkpoint;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;

pub use checkpoint::{last_processed_id, resume_position};
pub use error::PipelineError;
pub use input::read_records;
pub use output::ResultWriter;
pub use runner::{BatchRunner, RunConfig, RunSummary};
