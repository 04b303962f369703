//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One row of the input catalog.
///
/// Records are immutable inputs; the pipeline never writes them back.
/// Missing `title`/`description` cells deserialize as empty strings so a
/// sparse catalog row does not fail the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    /// Stable unique identifier, kept as a string regardless of source type
    pub id: String,

    /// Book title
    #[serde(default)]
    pub title: String,

    /// Raw description, may contain markup
    #[serde(default)]
    pub description: String,

    /// Precomputed alternate description, preferred when non-blank
    #[serde(default)]
    pub ai_description: Option<String>,
}

impl BookRecord {
    /// The description text to classify: `ai_description` when present and
    /// non-blank, otherwise `description`.
    pub fn preferred_description(&self) -> &str {
        match self.ai_description.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => &self.description,
        }
    }
}

/// One classification result row.
///
/// Created once per record and immediately appended to the output file;
/// never updated in place. Every topic is a vocabulary member in the
/// vocabulary's own casing, with no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggedRecord {
    /// Matches a `BookRecord::id`
    pub id: String,

    /// Assigned topics; may legitimately be empty
    pub topics: Vec<String>,
}

impl TaggedRecord {
    /// Create a new result row.
    pub fn new(id: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            id: id.into(),
            topics,
        }
    }

    /// Topics joined into the single delimited output field.
    pub fn joined_topics(&self) -> String {
        self.topics.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_description_falls_back() {
        let record = BookRecord {
            id: "1".to_string(),
            title: "A Title".to_string(),
            description: "plain description".to_string(),
            ai_description: None,
        };
        assert_eq!(record.preferred_description(), "plain description");
    }

    #[test]
    fn test_preferred_description_prefers_ai() {
        let record = BookRecord {
            id: "1".to_string(),
            title: "A Title".to_string(),
            description: "plain description".to_string(),
            ai_description: Some("generated description".to_string()),
        };
        assert_eq!(record.preferred_description(), "generated description");
    }

    #[test]
    fn test_preferred_description_ignores_blank_ai() {
        let record = BookRecord {
            id: "1".to_string(),
            title: "A Title".to_string(),
            description: "plain description".to_string(),
            ai_description: Some("   ".to_string()),
        };
        assert_eq!(record.preferred_description(), "plain description");
    }

    #[test]
    fn test_joined_topics() {
        let row = TaggedRecord::new("7", vec!["History".to_string(), "Fiction".to_string()]);
        assert_eq!(row.joined_topics(), "History, Fiction");

        let empty = TaggedRecord::new("8", Vec::new());
        assert_eq!(empty.joined_topics(), "");
    }
}
