//! Classification error types.

use thiserror::Error;

/// Errors raised by classification clients.
///
/// The batch driver routes on the two predicates below: transient errors
/// are retried inside the client, fatal errors abort the whole batch, and
/// everything else is a per-record failure that is logged and skipped.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Service signalled rate limiting (HTTP 429)
    #[error("classification service rate limit exceeded")]
    RateLimited,

    /// Timeout, connection failure, or 5xx-class service failure
    #[error("transient classification service failure: {0}")]
    Transient(String),

    /// Credential rejected by the service (HTTP 401/403)
    #[error("classification service rejected the credential: {0}")]
    Auth(String),

    /// Request the service will never accept (HTTP 4xx other than 429)
    #[error("classification request rejected: {0}")]
    InvalidRequest(String),

    /// Successful response whose body could not be decoded
    #[error("unusable classification response: {0}")]
    InvalidResponse(String),

    /// Transient failures persisted through the whole retry budget
    #[error("classification failed after {attempts} attempts")]
    RetriesExhausted {
        /// Total attempts made, including the first
        attempts: u32,
    },

    /// Client could not be constructed
    #[error("invalid classifier configuration: {0}")]
    Config(String),
}

impl ClassifyError {
    /// True for failures expected to resolve on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transient(_))
    }

    /// True for failures that will recur identically on retry.
    ///
    /// The driver aborts the batch on these; continuing would spend the
    /// remaining quota on calls certain to fail the same way.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Auth(_) | Self::InvalidRequest(_) | Self::Config(_)
        )
    }
}
