//! # booktag-classify
//!
//! Everything that talks to (or stands in for) the classification service:
//! - Description cleanup: HTML stripping and prompt input preparation
//! - The `Classifier` trait and the OpenAI-compatible `ApiClassifier`
//!   with bounded exponential-backoff retry
//! - Parsing of the service's free-text answer into vocabulary topics
//! - `MockClassifier` for tests that must not touch the network

pub mod api;
pub mod error;
pub mod mock;
pub mod parse;
pub mod retry;
pub mod text;

pub use api::{ApiClassifier, ApiClassifierConfig, Classifier};
pub use error::ClassifyError;
pub use mock::MockClassifier;
pub use parse::parse_topics;
pub use retry::retry_delay;
pub use text::{clean_html, prepare_description};
