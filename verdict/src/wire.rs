//! Wire DTOs for the `/api/check` exchange.
//!
//! DESIGN
//! ======
//! The classifier replies with positional tuples for evidence and terms
//! (`[title, similarity, stance]`, `[term, weight]`). Those are decoded into
//! named structs through serde `from`/`into` conversions so callers never
//! index into arrays. Missing and `null` collections both decode as empty.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Language hint sent alongside the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangHint {
    /// Let the classifier detect the language.
    #[default]
    Auto,
    /// Arabic.
    Ar,
    /// English.
    En,
}

impl LangHint {
    /// Every hint in display order.
    pub const ALL: [Self; 3] = [Self::Auto, Self::Ar, Self::En];

    /// Wire value of the hint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "auto" => Some(Self::Auto),
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Auto => "تلقائي (Auto)",
            Self::Ar => "العربية (Arabic)",
            Self::En => "English",
        }
    }
}

/// Body of `POST /api/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Article text. Callers send it trimmed and non-empty.
    pub text: String,
    /// Publishing domain hint, e.g. `"bbc.com"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Language hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<LangHint>,
}

impl CheckRequest {
    /// Build a request from raw form values.
    ///
    /// Text and source are trimmed; an empty source is dropped. Returns `None`
    /// when the trimmed text is empty.
    #[must_use]
    pub fn from_input(text: &str, source: &str, lang: LangHint) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let source = source.trim();
        Some(Self {
            text: text.to_owned(),
            source: (!source.is_empty()).then(|| source.to_owned()),
            lang: Some(lang),
        })
    }
}

/// Successful classification result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// `"fake"`, `"suspicious"`, or anything else (treated as real).
    /// Non-string labels decode as empty.
    #[serde(default, deserialize_with = "label_or_empty")]
    pub label: String,
    /// Probability-like fake score.
    #[serde(default, deserialize_with = "null_as_default")]
    pub p_fake: f64,
    /// Aggregate confidence in `[0, 1]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub final_score: f64,
    /// Credibility of the cited publishing domain, when known.
    #[serde(default)]
    pub source_score: Option<f64>,
    /// Retrieved articles supporting or contradicting the text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence: Vec<EvidenceItem>,
    /// Keyword/weight pairs explaining the classification.
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_terms: Vec<TermWeight>,
}

/// One retrieved article. Encoded on the wire as `[title, similarity, stance]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, String)", into = "(String, f64, String)")]
pub struct EvidenceItem {
    pub title: String,
    /// Similarity to the submitted text in `[0, 1]`.
    pub similarity: f64,
    /// Received but not displayed.
    pub stance: String,
}

impl From<(String, f64, String)> for EvidenceItem {
    fn from((title, similarity, stance): (String, f64, String)) -> Self {
        Self { title, similarity, stance }
    }
}

impl From<EvidenceItem> for (String, f64, String) {
    fn from(item: EvidenceItem) -> Self {
        (item.title, item.similarity, item.stance)
    }
}

/// One explanatory keyword. Encoded on the wire as `[term, weight]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Weight)", into = "(String, Weight)")]
pub struct TermWeight {
    pub term: String,
    pub weight: Weight,
}

impl From<(String, Weight)> for TermWeight {
    fn from((term, weight): (String, Weight)) -> Self {
        Self { term, weight }
    }
}

impl From<TermWeight> for (String, Weight) {
    fn from(tw: TermWeight) -> Self {
        (tw.term, tw.weight)
    }
}

/// Term weight as sent by the classifier: a number or a preformatted string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(f64),
    Text(String),
}

impl fmt::Display for Weight {
    /// Numbers print in shortest form (`1`, `0.87`), strings verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Error/status body returned with non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable state, e.g. `"loading"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable message surfaced to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self { status: None, message: Some(message.into()) }
    }

    #[must_use]
    pub fn loading() -> Self {
        Self { status: Some("loading".to_owned()), message: Some("Model is still loading...".to_owned()) }
    }
}

/// Number text as a browser prints it: plain decimals in `[1e-6, 1e21)`,
/// exponent form with an explicit sign outside it.
fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = v.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let sci = format!("{v:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    if v.is_finite() && v.fract() == 0.0 {
        return format!("{v:.0}");
    }
    v.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn label_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(label) => Ok(label),
        _ => Ok(String::new()),
    }
}
