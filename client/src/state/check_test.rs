use futures::executor::block_on;
use verdict::Verdict;

use super::*;
use crate::net::api::submit_check;
use crate::net::api::test_helpers::MockTransport;

/// Run the full submit path the way the page does.
fn run_submit(state: &mut CheckState, transport: &MockTransport) -> Completion {
    let request = match state.begin_submission() {
        Ok(request) => request,
        Err(notice) => return Completion::Notice(notice.to_owned()),
    };
    assert!(state.busy);
    assert_eq!(state.trigger_label(), BUSY_LABEL);
    let result = block_on(submit_check(transport, &request));
    state.complete(result)
}

fn filled_state() -> CheckState {
    CheckState { text: "  Scientists discover water on Mars  ".to_owned(), source: " nasa.gov ".to_owned(), ..CheckState::default() }
}

fn assert_idle(state: &CheckState) {
    assert!(!state.busy);
    assert_eq!(state.trigger_label(), IDLE_LABEL);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn default_state_is_idle_and_hidden() {
    let state = CheckState::default();
    assert_idle(&state);
    assert!(!state.result_visible);
    assert!(state.result.is_none());
    assert_eq!(state.lang, LangHint::Auto);
}

#[test]
fn whitespace_only_text_never_reaches_the_transport() {
    let transport = MockTransport::replying(200, "{}");
    let mut state = CheckState { text: "   \n  ".to_owned(), ..CheckState::default() };
    let completion = run_submit_allow_idle(&mut state, &transport);
    assert_eq!(completion, Completion::Notice(EMPTY_TEXT_NOTICE.to_owned()));
    assert_eq!(transport.call_count(), 0);
    assert_idle(&state);
}

fn run_submit_allow_idle(state: &mut CheckState, transport: &MockTransport) -> Completion {
    match state.begin_submission() {
        Ok(request) => state.complete(block_on(submit_check(transport, &request))),
        Err(notice) => Completion::Notice(notice.to_owned()),
    }
}

#[test]
fn begin_submission_sends_trimmed_fields() {
    let transport = MockTransport::replying(200, r#"{"label":"real","final_score":0.9}"#);
    let mut state = filled_state();
    state.lang = LangHint::En;
    run_submit(&mut state, &transport);
    let sent = &transport.requests.borrow()[0];
    assert_eq!(sent.text, "Scientists discover water on Mars");
    assert_eq!(sent.source.as_deref(), Some("nasa.gov"));
    assert_eq!(sent.lang, Some(LangHint::En));
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn not_ready_keeps_result_hidden_and_restores_idle() {
    let transport = MockTransport::replying(202, "");
    let mut state = filled_state();
    let completion = run_submit(&mut state, &transport);
    assert_eq!(completion, Completion::Notice(NOT_READY_NOTICE.to_owned()));
    assert!(!state.result_visible);
    assert!(state.result.is_none());
    assert_idle(&state);
}

#[test]
fn rejection_surfaces_server_message() {
    let transport = MockTransport::replying(500, r#"{"message":"classifier exploded"}"#);
    let mut state = filled_state();
    let completion = run_submit(&mut state, &transport);
    assert_eq!(completion, Completion::Notice("خطأ: classifier exploded".to_owned()));
    assert!(!state.result_visible);
    assert_idle(&state);
}

#[test]
fn rejection_without_message_uses_generic_text() {
    let transport = MockTransport::replying(500, "{}");
    let mut state = filled_state();
    let completion = run_submit(&mut state, &transport);
    assert_eq!(completion, Completion::Notice("خطأ: Server Error".to_owned()));
    assert_idle(&state);
}

#[test]
fn transport_failure_surfaces_connection_notice() {
    let transport = MockTransport::failing("Failed to fetch");
    let mut state = filled_state();
    let completion = run_submit(&mut state, &transport);
    assert_eq!(completion, Completion::Notice("خطأ في الاتصال: Failed to fetch".to_owned()));
    assert_idle(&state);
}

#[test]
fn malformed_success_body_surfaces_connection_notice() {
    let transport = MockTransport::replying(200, "not json");
    let mut state = filled_state();
    let Completion::Notice(notice) = run_submit(&mut state, &transport) else {
        panic!("expected notice");
    };
    assert!(notice.starts_with("خطأ في الاتصال: "));
    assert!(!state.result_visible);
    assert_idle(&state);
}

#[test]
fn success_renders_and_shows_result() {
    let transport = MockTransport::replying(
        200,
        r#"{"label":"fake","p_fake":0.4,"final_score":0.873,"evidence":[],"top_terms":[["x",1]]}"#,
    );
    let mut state = filled_state();
    let completion = run_submit(&mut state, &transport);
    assert_eq!(completion, Completion::Rendered);
    assert!(state.result_visible);
    let view = state.result.as_ref().unwrap();
    assert_eq!(view.verdict, Verdict::Fake);
    assert_eq!(view.confidence, "87%");
    assert_eq!(view.p_fake, "0.40");
    assert_eq!(view.source_score, "-");
    assert_idle(&state);
}

#[test]
fn failure_after_success_keeps_previous_result() {
    let mut state = filled_state();
    run_submit(&mut state, &MockTransport::replying(200, r#"{"label":"real","final_score":0.5}"#));
    run_submit(&mut state, &MockTransport::replying(202, ""));
    assert!(state.result_visible);
    assert_eq!(state.result.as_ref().unwrap().verdict, Verdict::Real);
}

// =============================================================
// Clear / summary
// =============================================================

#[test]
fn clear_resets_inputs_and_hides_result() {
    let mut state = filled_state();
    run_submit(&mut state, &MockTransport::replying(200, r#"{"label":"real","final_score":0.5}"#));
    state.clear();
    assert!(state.text.is_empty());
    assert!(state.source.is_empty());
    assert!(!state.result_visible);
}

#[test]
fn clear_does_not_cancel_in_flight_request() {
    let mut state = filled_state();
    let request = state.begin_submission().unwrap();
    state.clear();
    assert!(state.busy);
    let result = block_on(submit_check(&MockTransport::replying(200, r#"{"label":"fake","final_score":0.7}"#), &request));
    assert_eq!(state.complete(result), Completion::Rendered);
    assert!(state.result_visible);
    assert_idle(&state);
}

#[test]
fn summary_is_none_before_any_render() {
    assert_eq!(CheckState::default().summary(), None);
}

#[test]
fn summary_formats_label_and_confidence() {
    let mut state = filled_state();
    run_submit(&mut state, &MockTransport::replying(200, r#"{"label":"fake","final_score":0.873}"#));
    assert_eq!(state.summary().unwrap(), "النتيجة: ⛔ مزيف (FAKE)\nنسبة الثقة: 87%");
}
