//! The closed topic vocabulary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading the topic vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The topics file could not be read
    #[error("failed to read topics file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The topics file yielded zero topics
    #[error("topics file {} contains no topics", .path.display())]
    Empty { path: PathBuf },
}

/// The fixed, closed list of labels a book may be tagged with.
///
/// Loaded once at startup and read-only thereafter. Order is the file
/// order; lookups are case-insensitive and resolve to the vocabulary's
/// own casing.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    topics: Vec<String>,
    by_folded: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from an iterator of topic strings.
    ///
    /// Entries are trimmed; blank and case-insensitive duplicate entries
    /// are dropped. First-seen order is preserved.
    pub fn from_topics<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut by_folded = HashMap::new();
        for topic in topics {
            let topic = topic.as_ref().trim();
            if topic.is_empty() {
                continue;
            }
            let folded = topic.to_lowercase();
            if by_folded.contains_key(&folded) {
                continue;
            }
            by_folded.insert(folded, ordered.len());
            ordered.push(topic.to_string());
        }
        Self {
            topics: ordered,
            by_folded,
        }
    }

    /// Load the vocabulary from a plain-text file, one topic per line.
    ///
    /// Fails when the file is missing or yields zero topics; both are
    /// terminal configuration errors for a batch run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let vocabulary = Self::from_topics(content.lines());
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(vocabulary)
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// True when the vocabulary holds no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topics in load order.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Resolve a candidate label to the vocabulary's canonical casing.
    ///
    /// Matching is case-insensitive; candidates outside the vocabulary
    /// resolve to `None`.
    pub fn canonical(&self, candidate: &str) -> Option<&str> {
        self.by_folded
            .get(&candidate.trim().to_lowercase())
            .map(|&index| self.topics[index].as_str())
    }

    /// True when the candidate is a vocabulary member (case-insensitive).
    pub fn contains(&self, candidate: &str) -> bool {
        self.canonical(candidate).is_some()
    }

    /// Topics joined for embedding into a prompt.
    pub fn joined(&self, separator: &str) -> String {
        self.topics.join(separator)
    }
}
