//! Mock classifier for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use booktag_types::Vocabulary;

use crate::api::Classifier;
use crate::error::ClassifyError;

/// Scripted classifier that never touches the network.
///
/// Answers are consumed in seed order, one per non-empty classification
/// call. Blank input short-circuits like the real client: no scripted
/// answer is consumed and the call is not counted.
#[derive(Default)]
pub struct MockClassifier {
    answers: Mutex<VecDeque<Result<String, ClassifyError>>>,
    calls: AtomicUsize,
}

impl MockClassifier {
    /// Create an empty mock; calls answer with an empty string until seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw answer for the next call.
    pub fn push_answer(&self, answer: impl Into<String>) {
        self.answers
            .lock()
            .expect("mock answers mutex poisoned")
            .push_back(Ok(answer.into()));
    }

    /// Queue an error for the next call.
    pub fn push_error(&self, error: ClassifyError) {
        self.answers
            .lock()
            .expect("mock answers mutex poisoned")
            .push_back(Err(error));
    }

    /// Number of non-empty classification calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(
        &self,
        text: &str,
        _vocabulary: &Vocabulary,
    ) -> Result<String, ClassifyError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .expect("mock answers mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_topics(["History", "Fiction"])
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mock = MockClassifier::new();
        mock.push_answer("Fiction");
        mock.push_answer("History");

        assert_eq!(mock.classify("a", &vocabulary()).await.unwrap(), "Fiction");
        assert_eq!(mock.classify("b", &vocabulary()).await.unwrap(), "History");
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_short_circuits_blank_text() {
        let mock = MockClassifier::new();
        mock.push_answer("Fiction");

        assert_eq!(mock.classify("", &vocabulary()).await.unwrap(), "");
        assert_eq!(mock.calls(), 0);
        // The scripted answer is still queued for the next real call
        assert_eq!(mock.classify("a", &vocabulary()).await.unwrap(), "Fiction");
    }

    #[tokio::test]
    async fn test_mock_scripted_error() {
        let mock = MockClassifier::new();
        mock.push_error(ClassifyError::RetriesExhausted { attempts: 5 });

        let result = mock.classify("a", &vocabulary()).await;
        assert!(matches!(
            result,
            Err(ClassifyError::RetriesExhausted { attempts: 5 })
        ));
    }

    #[tokio::test]
    async fn test_mock_defaults_to_empty_answer() {
        let mock = MockClassifier::new();
        assert_eq!(mock.classify("a", &vocabulary()).await.unwrap(), "");
        assert_eq!(mock.calls(), 1);
    }
}
