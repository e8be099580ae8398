use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::*;
use crate::state::test_helpers::{MockClassifier, test_app_state, test_app_state_with};

#[tokio::test]
async fn probe_marks_ready_on_first_success() {
    let mock = Arc::new(MockClassifier::ready_after(0));
    let state = test_app_state_with(mock.clone(), false);
    let attempts = wait_until_ready(mock.as_ref(), &state, Duration::from_millis(1)).await;
    assert_eq!(attempts, 1);
    assert!(state.is_ready());
}

#[tokio::test]
async fn probe_retries_until_classifier_answers() {
    let mock = Arc::new(MockClassifier::ready_after(3));
    let state = test_app_state_with(mock.clone(), false);
    let attempts = wait_until_ready(mock.as_ref(), &state, Duration::from_millis(1)).await;
    assert_eq!(attempts, 4);
    assert_eq!(mock.probes.load(Ordering::SeqCst), 4);
    assert!(state.is_ready());
}

#[tokio::test]
async fn spawned_probe_completes() {
    let mock = Arc::new(MockClassifier::ready_after(1));
    let state = test_app_state_with(mock, false);
    let handle = spawn_readiness_probe(state.clone(), Duration::from_millis(1)).unwrap();
    assert_eq!(handle.await.unwrap(), 2);
    assert!(state.is_ready());
}

#[tokio::test]
async fn no_probe_without_classifier() {
    assert!(spawn_readiness_probe(test_app_state(), Duration::from_millis(1)).is_none());
}
