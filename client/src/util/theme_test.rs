#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn toggle_follows_checked_state() {
    assert_eq!(toggle(true), Theme::Cyber);
    assert_eq!(toggle(false), Theme::Modern);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Modern);
    apply(Theme::Cyber);
}
