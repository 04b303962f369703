//! # booktag-types
//!
//! Shared domain types for the booktag pipeline.
//!
//! This crate defines the core data structures used throughout the system:
//! - `BookRecord`: an immutable input catalog row
//! - `TaggedRecord`: one classification result, ready for append
//! - `Vocabulary`: the closed, ordered set of allowed topic labels

pub mod record;
pub mod vocabulary;

pub use record::{BookRecord, TaggedRecord};
pub use vocabulary::{Vocabulary, VocabularyError};
