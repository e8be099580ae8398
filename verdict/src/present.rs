//! Result rendering: classification result to display text.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser page and the CLI both show the same label, score, evidence,
//! and term text. Everything here is pure so re-rendering one response always
//! yields the same view.
//!
//! Evidence titles come from third-party articles and are inserted into the
//! page as markup, so they pass through [`escape_html`] first. Term text is
//! carried verbatim.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use crate::wire::CheckResponse;

/// Placeholder shown when no evidence articles were found.
pub const NO_EVIDENCE_TEXT: &str =
    "لم يتم العثور على مقالات مشابهة في المصادر الموثوقة (تم الاعتماد على تحليل الذكاء الاصطناعي).";

/// Placeholder shown when the classifier returned no terms.
pub const NO_TERMS_TEXT: &str = "—";

/// Placeholder for an unknown source-credibility score.
pub const MISSING_SCORE_TEXT: &str = "-";

const EVIDENCE_HEADING: &str = "📰 مصدر موثوق";
const SIMILARITY_PREFIX: &str = "تطابق: ";

/// Categorical verdict. Any label other than `fake`/`suspicious` is `Real`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Fake,
    Suspicious,
    Real,
}

impl Verdict {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "fake" => Self::Fake,
            "suspicious" => Self::Suspicious,
            _ => Self::Real,
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Fake => "⛔",
            Self::Suspicious => "⚠️",
            Self::Real => "✅",
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Fake => "مزيف (FAKE)",
            Self::Suspicious => "مشبوه (SUSPICIOUS)",
            Self::Real => "حقيقي (REAL)",
        }
    }

    /// CSS color for the label.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Fake => "#ef4444",
            Self::Suspicious => "#f59e0b",
            Self::Real => "#16a34a",
        }
    }
}

/// One evidence list entry.
#[derive(Clone, Debug, PartialEq)]
pub enum EvidenceEntry {
    Match {
        /// Title with markup-significant characters escaped.
        title_html: String,
        /// Similarity as a one-decimal percentage, e.g. `"87.3%"`.
        similarity: String,
        stance: String,
    },
    /// No similar articles were found.
    NoneFound,
}

impl EvidenceEntry {
    /// Inner markup of the list item.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Match { title_html, similarity, .. } => format!(
                "<div class=\"evidence-item__head\"><strong>{EVIDENCE_HEADING}</strong>\
                 <small>{SIMILARITY_PREFIX}{similarity}</small></div>\
                 <a href=\"#\" class=\"evidence-item__title\">{title_html}</a>"
            ),
            Self::NoneFound => NO_EVIDENCE_TEXT.to_owned(),
        }
    }
}

/// One keyword list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermEntry {
    Term { term: String, weight: String },
    Placeholder,
}

/// Display-ready projection of a [`CheckResponse`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub verdict: Verdict,
    /// Confidence as a whole percentage, e.g. `"87%"`.
    pub confidence: String,
    /// Fake probability, two decimals.
    pub p_fake: String,
    /// Source credibility, two decimals, or [`MISSING_SCORE_TEXT`].
    pub source_score: String,
    /// Never empty: holds a single `NoneFound` when nothing matched.
    pub evidence: Vec<EvidenceEntry>,
    /// Never empty: holds a single `Placeholder` when no terms came back.
    pub terms: Vec<TermEntry>,
}

impl ResultView {
    /// Icon and label text as shown in the verdict heading.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{} {}", self.verdict.icon(), self.verdict.text())
    }

    /// Two-line plain-text summary used by the clipboard export.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("النتيجة: {}\nنسبة الثقة: {}", self.label_text(), self.confidence)
    }
}

/// Render a classification result.
#[must_use]
pub fn render_result(response: &CheckResponse) -> ResultView {
    let evidence = if response.evidence.is_empty() {
        vec![EvidenceEntry::NoneFound]
    } else {
        response
            .evidence
            .iter()
            .map(|item| EvidenceEntry::Match {
                title_html: escape_html(&item.title),
                similarity: format_similarity(item.similarity),
                stance: item.stance.clone(),
            })
            .collect()
    };

    let terms = if response.top_terms.is_empty() {
        vec![TermEntry::Placeholder]
    } else {
        response
            .top_terms
            .iter()
            .map(|t| TermEntry::Term { term: t.term.clone(), weight: t.weight.to_string() })
            .collect()
    };

    ResultView {
        verdict: Verdict::from_label(&response.label),
        confidence: format_confidence(response.final_score),
        p_fake: format_fixed2(response.p_fake),
        source_score: format_source_score(response.source_score),
        evidence,
        terms,
    }
}

/// Escape `& < > " '` for insertion into markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whole percentage, halves rounded up: `0.873` → `"87%"`.
#[must_use]
pub fn format_confidence(score: f64) -> String {
    format!("{:.0}%", (score * 100.0 + 0.5).floor())
}

/// One-decimal percentage: `0.873` → `"87.3%"`.
#[must_use]
pub fn format_similarity(score: f64) -> String {
    format!("{}%", to_fixed(score * 100.0, 1))
}

#[must_use]
pub fn format_fixed2(value: f64) -> String {
    to_fixed(value, 2)
}

/// Zero, NaN and absent scores all mean "unknown".
#[must_use]
pub fn format_source_score(score: Option<f64>) -> String {
    match score {
        Some(v) if v != 0.0 && !v.is_nan() => format_fixed2(v),
        _ => MISSING_SCORE_TEXT.to_owned(),
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with `digits` decimals.
///
/// Matches the browser's `toFixed`: the exact binary value is rounded to the
/// nearest decimal and an exact tie goes away from zero (`0.625` → `"0.63"`).
/// Rust's formatter breaks ties toward the even digit, so ties are handled
/// here and everything else is left to it.
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    let nearest = format!("{value:.digits$}");
    if !value.is_finite() {
        return nearest;
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return nearest;
    };
    let (kept, rest) = frac.split_at(digits);
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return nearest;
    }

    let mut magnitude: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    let mut carry = true;
    for digit in magnitude.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        magnitude.insert(0, b'1');
    }

    let split = magnitude.len() - digits;
    let mut out = String::with_capacity(magnitude.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(magnitude[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(magnitude[split..].iter().map(|&b| char::from(b)));
    }
    out
}
