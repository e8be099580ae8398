use std::sync::Arc;

use super::*;
use super::test_helpers::{MockClassifier, test_app_state, test_app_state_with};

#[test]
fn new_state_is_not_ready() {
    assert!(!test_app_state().is_ready());
}

#[test]
fn mark_ready_is_visible_through_clones() {
    let state = test_app_state();
    let clone = state.clone();
    clone.mark_ready();
    assert!(state.is_ready());
}

#[test]
fn state_without_classifier_has_none() {
    assert!(test_app_state().classifier.is_none());
}

#[test]
fn test_helper_respects_ready_flag() {
    let mock = Arc::new(MockClassifier::ready_after(0));
    assert!(test_app_state_with(mock.clone(), true).is_ready());
    assert!(!test_app_state_with(mock, false).is_ready());
}
