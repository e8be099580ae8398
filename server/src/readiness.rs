//! Background readiness probe for the upstream classifier.
//!
//! Until the classifier answers its health check, `/api/check` replies 202 so
//! the browser shows the "model still loading" notice instead of an error.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::classifier::Classify;
use crate::state::AppState;

/// Spawn the probe. Returns `None` when no classifier is configured.
pub fn spawn_readiness_probe(state: AppState, interval: Duration) -> Option<JoinHandle<u32>> {
    let classifier = state.classifier.clone()?;
    Some(tokio::spawn(async move { wait_until_ready(classifier.as_ref(), &state, interval).await }))
}

/// Poll `classifier.ready()` until it succeeds, then mark `state` ready.
///
/// Returns the number of probes made.
pub async fn wait_until_ready(classifier: &dyn Classify, state: &AppState, interval: Duration) -> u32 {
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        if classifier.ready().await {
            state.mark_ready();
            tracing::info!(attempts, "classifier ready");
            return attempts;
        }
        tracing::debug!(attempts, "classifier not ready yet");
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
#[path = "readiness_test.rs"]
mod tests;
