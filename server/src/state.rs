//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional upstream classifier and a readiness flag flipped once
//! by the readiness probe.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::classifier::Classify;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `CLASSIFIER_URL` is not configured.
    pub classifier: Option<Arc<dyn Classify>>,
    ready: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(classifier: Option<Arc<dyn Classify>>) -> Self {
        Self { classifier, ready: Arc::new(AtomicBool::new(false)) }
    }

    /// Whether the classifier has answered its readiness probe.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
