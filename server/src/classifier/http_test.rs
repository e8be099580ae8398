use super::*;
use crate::config::ClassifierTimeouts;

fn config(base_url: &str) -> ClassifierConfig {
    ClassifierConfig {
        base_url: base_url.to_owned(),
        health_path: "/healthz".to_owned(),
        timeouts: ClassifierTimeouts { request_secs: 5, connect_secs: 1 },
        probe_interval_secs: 1,
    }
}

#[test]
fn urls_join_base_and_paths() {
    let classifier = HttpClassifier::from_config(&config("http://classifier:5000")).unwrap();
    assert_eq!(classifier.base_url(), "http://classifier:5000");
    assert_eq!(classifier.check_url(), "http://classifier:5000/api/check");
    assert_eq!(classifier.health_url(), "http://classifier:5000/healthz");
}

#[test]
fn success_reply_becomes_ready_classification() {
    let result = classification_from_reply(200, r#"{"label":"fake","p_fake":0.9,"final_score":0.9}"#).unwrap();
    let Classification::Ready(resp) = result else {
        panic!("expected ready classification");
    };
    assert_eq!(resp.label, "fake");
}

#[test]
fn not_ready_reply_becomes_loading() {
    assert_eq!(classification_from_reply(202, "{}").unwrap(), Classification::Loading);
}

#[test]
fn error_reply_keeps_status_and_message() {
    let err = classification_from_reply(500, r#"{"message":"model crashed"}"#).unwrap_err();
    assert!(matches!(err, ClassifierError::Upstream { status: 500, ref message } if message == "model crashed"));
}

#[test]
fn malformed_success_reply_is_a_parse_error() {
    let err = classification_from_reply(200, "nope").unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}

#[tokio::test]
async fn unreachable_classifier_is_not_ready() {
    // Nothing listens on the loopback discard port.
    let classifier = HttpClassifier::from_config(&config("http://127.0.0.1:9")).unwrap();
    assert!(!classifier.ready().await);
}
