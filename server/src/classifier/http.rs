//! HTTP classifier client.
//!
//! The upstream speaks the same `/api/check` contract the browser uses, so
//! replies are interpreted with `verdict::interpret_response`.

use std::time::Duration;

use verdict::{CHECK_ENDPOINT, CheckOutcome, CheckRequest, interpret_response};

use super::types::{Classification, ClassifierError, Classify};
use crate::config::ClassifierConfig;

pub struct HttpClassifier {
    http: reqwest::Client,
    base_url: String,
    health_path: String,
}

impl HttpClassifier {
    /// Build a client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ClassifierError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), health_path: config.health_path.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_url(&self) -> String {
        format!("{}{CHECK_ENDPOINT}", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }
}

#[async_trait::async_trait]
impl Classify for HttpClassifier {
    async fn classify(&self, request: &CheckRequest) -> Result<Classification, ClassifierError> {
        let resp = self
            .http
            .post(self.check_url())
            .json(request)
            .send()
            .await
            .map_err(|e| ClassifierError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ClassifierError::Request(e.to_string()))?;
        classification_from_reply(status, &body)
    }

    async fn ready(&self) -> bool {
        match self.http.get(self.health_url()).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, url = %self.health_url(), "classifier health probe failed");
                false
            }
        }
    }
}

/// Map an upstream status and body onto a [`Classification`].
pub(crate) fn classification_from_reply(status: u16, body: &str) -> Result<Classification, ClassifierError> {
    match interpret_response(status, body) {
        Ok(CheckOutcome::Verdict(response)) => Ok(Classification::Ready(response)),
        Ok(CheckOutcome::NotReady) => Ok(Classification::Loading),
        Ok(CheckOutcome::Rejected { status, message }) => Err(ClassifierError::Upstream { status, message }),
        Err(e) => Err(ClassifierError::Parse(e.to_string())),
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
