//! Classifier types: the `Classify` seam and its errors.

use verdict::{CheckRequest, CheckResponse};

/// Errors produced while talking to the upstream classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never completed.
    #[error("classifier request failed: {0}")]
    Request(String),

    /// The classifier answered with an error status.
    #[error("classifier error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// A success body that did not decode as a check result.
    #[error("classifier response parse failed: {0}")]
    Parse(String),
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Ready(CheckResponse),
    /// Upstream model still loading.
    Loading,
}

/// Classify article text.
///
/// Object-safe so `AppState` can hold `Arc<dyn Classify>` and tests can swap
/// in a mock.
#[async_trait::async_trait]
pub trait Classify: Send + Sync {
    /// Classify one request.
    async fn classify(&self, request: &CheckRequest) -> Result<Classification, ClassifierError>;

    /// Whether the classifier can serve requests yet.
    async fn ready(&self) -> bool;
}
