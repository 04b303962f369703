//! OpenAI-compatible classification client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use booktag_types::Vocabulary;

use crate::error::ClassifyError;
use crate::retry::retry_delay;

/// A classification backend.
///
/// Given prepared description text and the topic vocabulary, returns the
/// service's raw textual answer; `parse::parse_topics` turns that into
/// vocabulary members. Implementations must not contact any backend for
/// blank input text — an empty answer is returned directly instead.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one description against the vocabulary.
    async fn classify(&self, text: &str, vocabulary: &Vocabulary)
        -> Result<String, ClassifyError>;
}

/// Configuration for the API classifier.
#[derive(Debug, Clone)]
pub struct ApiClassifierConfig {
    /// API base URL (e.g., "https://api.openai.com/v1")
    pub base_url: String,

    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// API key
    pub api_key: SecretString,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum attempts per record, including the first
    pub max_retries: u32,

    /// Backoff base delay; doubles per retry
    pub base_delay: Duration,

    /// Backoff delay ceiling
    pub max_delay: Duration,

    /// Completion token bound; topic lists are short
    pub max_tokens: u32,
}

impl ApiClassifierConfig {
    /// Create config for the OpenAI API.
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            api_key: SecretString::from(api_key.into()),
            timeout: Duration::from_secs(60),
            max_retries: 5,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(60),
            max_tokens: 100,
        }
    }
}

/// Classifier backed by an OpenAI-compatible chat-completions endpoint.
pub struct ApiClassifier {
    client: Client,
    config: ApiClassifierConfig,
}

impl ApiClassifier {
    /// Create a new API classifier.
    pub fn new(config: ApiClassifierConfig) -> Result<Self, ClassifyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifyError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Call the service with bounded exponential-backoff retry.
    ///
    /// Transient failures (rate limit, timeout, 5xx) are retried up to
    /// `max_retries` total attempts; anything else surfaces immediately.
    async fn call_with_retry(&self, prompt: &str) -> Result<String, ClassifyError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, "calling classification service");

            match self.request_completion(prompt).await {
                Ok(answer) => return Ok(answer),
                Err(e) if e.is_transient() => {
                    if attempt >= self.config.max_retries {
                        error!(error = %e, attempts = attempt, "retry budget exhausted");
                        return Err(ClassifyError::RetriesExhausted { attempts: attempt });
                    }

                    let delay =
                        retry_delay(attempt - 1, self.config.base_delay, self.config.max_delay);
                    warn!(
                        error = %e,
                        retry_in_ms = delay.as_millis() as u64,
                        "classification call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Make a single chat-completions request.
    async fn request_completion(&self, prompt: &str) -> Result<String, ClassifyError> {
        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage<'a>>,
            max_tokens: u32,
        }

        #[derive(Serialize)]
        struct ChatMessage<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatChoiceMessage,
        }

        #[derive(Deserialize)]
        struct ChatChoiceMessage {
            content: String,
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClassifyError::InvalidResponse("no choices in response".to_string()))
    }
}

#[async_trait]
impl Classifier for ApiClassifier {
    async fn classify(
        &self,
        text: &str,
        vocabulary: &Vocabulary,
    ) -> Result<String, ClassifyError> {
        // Nothing to classify; spending a service call on an empty
        // description would only invite a hallucinated answer.
        if text.trim().is_empty() {
            debug!("empty description, skipping service call");
            return Ok(String::new());
        }

        let prompt = build_prompt(text, vocabulary);
        self.call_with_retry(&prompt).await
    }
}

/// Build the topic-selection prompt.
fn build_prompt(description: &str, vocabulary: &Vocabulary) -> String {
    format!(
        "Based on the following book description, choose the most relevant topics from the \
         provided topic list. Select between 3 and 10 topics that best match the book's \
         description. Make sure to only pick topics from the provided list that are \
         clearly applicable, and avoid including irrelevant ones.\n\n\
         Description: {description}\n\n\
         Topics List: {topics}\n\n\
         Return the chosen topics as a comma-separated list without any additional text.",
        topics = vocabulary.joined(", ")
    )
}

/// Map a non-success HTTP status to an error class.
fn service_error(status: StatusCode, body: String) -> ClassifyError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ClassifyError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ClassifyError::Auth(format!("HTTP {status}: {body}"))
        }
        StatusCode::REQUEST_TIMEOUT => ClassifyError::Transient(format!("HTTP {status}")),
        s if s.is_server_error() => ClassifyError::Transient(format!("HTTP {status}: {body}")),
        _ => ClassifyError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map a transport-level failure; all of these are worth retrying.
fn transport_error(e: reqwest::Error) -> ClassifyError {
    if e.is_timeout() {
        ClassifyError::Transient(format!("request timed out: {e}"))
    } else {
        ClassifyError::Transient(format!("transport failure: {e}"))
    }
}
