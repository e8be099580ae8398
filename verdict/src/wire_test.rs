use super::*;

// =============================================================
// CheckRequest
// =============================================================

#[test]
fn from_input_trims_text_and_source() {
    let req = CheckRequest::from_input("  breaking news  ", "  bbc.com ", LangHint::En).unwrap();
    assert_eq!(req.text, "breaking news");
    assert_eq!(req.source.as_deref(), Some("bbc.com"));
    assert_eq!(req.lang, Some(LangHint::En));
}

#[test]
fn from_input_rejects_whitespace_only_text() {
    assert!(CheckRequest::from_input("   \n\t ", "bbc.com", LangHint::Auto).is_none());
    assert!(CheckRequest::from_input("", "", LangHint::Auto).is_none());
}

#[test]
fn from_input_drops_blank_source() {
    let req = CheckRequest::from_input("text", "   ", LangHint::Auto).unwrap();
    assert_eq!(req.source, None);
}

#[test]
fn check_request_serializes_expected_shape() {
    let req = CheckRequest::from_input("hello", "cnn.com", LangHint::Ar).unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "hello", "source": "cnn.com", "lang": "ar" }));
}

#[test]
fn check_request_omits_absent_hints() {
    let req = CheckRequest { text: "hello".to_owned(), source: None, lang: None };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "hello" }));
}

// =============================================================
// LangHint
// =============================================================

#[test]
fn lang_hint_parse_matches_wire_values() {
    for hint in LangHint::ALL {
        assert_eq!(LangHint::parse(hint.as_str()), Some(hint));
    }
    assert_eq!(LangHint::parse("fr"), None);
}

#[test]
fn lang_hint_default_is_auto() {
    assert_eq!(LangHint::default(), LangHint::Auto);
}

// =============================================================
// CheckResponse
// =============================================================

#[test]
fn check_response_decodes_full_payload() {
    let body = r#"{
        "label": "fake",
        "p_fake": 0.91,
        "final_score": 0.873,
        "source_score": 0.1,
        "evidence": [["Some headline", 0.42, "unrelated"]],
        "top_terms": [["DeepLearning_Analysis", 0.91], ["claim", "high"]]
    }"#;
    let resp: CheckResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.label, "fake");
    assert!((resp.p_fake - 0.91).abs() < f64::EPSILON);
    assert!((resp.final_score - 0.873).abs() < f64::EPSILON);
    assert_eq!(resp.source_score, Some(0.1));
    assert_eq!(resp.evidence.len(), 1);
    assert_eq!(resp.evidence[0].title, "Some headline");
    assert_eq!(resp.evidence[0].stance, "unrelated");
    assert_eq!(resp.top_terms[0].weight, Weight::Number(0.91));
    assert_eq!(resp.top_terms[1].weight, Weight::Text("high".to_owned()));
}

#[test]
fn check_response_defaults_missing_fields() {
    let resp: CheckResponse = serde_json::from_str(r#"{"label":"real","final_score":0.5}"#).unwrap();
    assert!(resp.p_fake.abs() < f64::EPSILON);
    assert_eq!(resp.source_score, None);
    assert!(resp.evidence.is_empty());
    assert!(resp.top_terms.is_empty());
}

#[test]
fn check_response_treats_null_collections_as_empty() {
    let resp: CheckResponse =
        serde_json::from_str(r#"{"label":null,"p_fake":null,"final_score":0.2,"evidence":null,"top_terms":null,"source_score":null}"#)
            .unwrap();
    assert_eq!(resp.label, "");
    assert!(resp.evidence.is_empty());
    assert!(resp.top_terms.is_empty());
    assert_eq!(resp.source_score, None);
}

#[test]
fn evidence_item_encodes_as_positional_array() {
    let item = EvidenceItem { title: "t".to_owned(), similarity: 0.5, stance: "agree".to_owned() };
    assert_eq!(serde_json::to_value(&item).unwrap(), serde_json::json!(["t", 0.5, "agree"]));
}

#[test]
fn evidence_item_rejects_object_form() {
    let err = serde_json::from_str::<EvidenceItem>(r#"{"title":"t","similarity":0.5,"stance":"x"}"#);
    assert!(err.is_err());
}

// =============================================================
// Weight display
// =============================================================

#[test]
fn weight_display_prints_integral_numbers_without_fraction() {
    assert_eq!(Weight::Number(1.0).to_string(), "1");
    assert_eq!(Weight::Number(0.0).to_string(), "0");
    assert_eq!(Weight::Number(-3.0).to_string(), "-3");
}

#[test]
fn weight_display_prints_fractions_in_shortest_form() {
    assert_eq!(Weight::Number(0.87).to_string(), "0.87");
    assert_eq!(Weight::Number(0.1).to_string(), "0.1");
}

#[test]
fn weight_display_uses_exponent_form_outside_plain_range() {
    assert_eq!(Weight::Number(1e21).to_string(), "1e+21");
    assert_eq!(Weight::Number(1.5e21).to_string(), "1.5e+21");
    assert_eq!(Weight::Number(1e-7).to_string(), "1e-7");
    assert_eq!(Weight::Number(-2.5e-7).to_string(), "-2.5e-7");
}

#[test]
fn weight_display_keeps_plain_form_at_range_edges() {
    assert_eq!(Weight::Number(1e20).to_string(), "100000000000000000000");
    assert_eq!(Weight::Number(0.000_001).to_string(), "0.000001");
}

#[test]
fn weight_display_passes_text_through() {
    assert_eq!(Weight::Text("<b>x</b>".to_owned()).to_string(), "<b>x</b>");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_loading_serializes_status_and_message() {
    let json = serde_json::to_value(ErrorBody::loading()).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "loading", "message": "Model is still loading..." }));
}

#[test]
fn error_body_accepts_unrelated_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
    assert_eq!(body, ErrorBody::default());
}

#[test]
fn check_response_non_string_label_decodes_as_empty() {
    for body in [r#"{"label": 1}"#, r#"{"label": true}"#, r#"{"label": null}"#, r#"{"label": ["fake"]}"#] {
        let resp: CheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.label, "", "body {body}");
    }
}
