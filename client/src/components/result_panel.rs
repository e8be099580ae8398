//! Result region: verdict label, scores, evidence, and keyword terms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `ResultView` produced by the renderer. Evidence rows are set as
//! markup because their titles arrive pre-escaped; term rows are text nodes.

use leptos::html::Section;
use leptos::prelude::*;
use verdict::present::NO_TERMS_TEXT;
use verdict::{EvidenceEntry, ResultView, TermEntry};

use crate::state::check::CheckState;
use crate::util::clipboard;

#[component]
pub fn ResultPanel(section_ref: NodeRef<Section>) -> impl IntoView {
    let check = expect_context::<RwSignal<CheckState>>();

    let hidden = move || !check.with(|s| s.result_visible);
    let with_view = move |f: fn(&ResultView) -> String| check.with(|s| s.result.as_ref().map(f).unwrap_or_default());

    let label_text = move || with_view(ResultView::label_text);
    let label_color = move || with_view(|v| v.verdict.color().to_owned());
    let confidence = move || with_view(|v| v.confidence.clone());
    let p_fake = move || with_view(|v| v.p_fake.clone());
    let source_score = move || with_view(|v| v.source_score.clone());

    let evidence_rows = move || {
        check.with(|s| s.result.as_ref().map(|v| v.evidence.clone()).unwrap_or_default())
            .into_iter()
            .map(|entry| {
                let class = if matches!(entry, EvidenceEntry::NoneFound) {
                    "evidence-item evidence-item--empty"
                } else {
                    "evidence-item"
                };
                view! { <li class=class inner_html=entry.to_html()></li> }
            })
            .collect_view()
    };

    let term_rows = move || {
        check.with(|s| s.result.as_ref().map(|v| v.terms.clone()).unwrap_or_default())
            .into_iter()
            .map(|entry| match entry {
                TermEntry::Term { term, weight } => view! {
                    <li class="term-item">
                        <span>{term}</span>
                        " "
                        <small>"(" {weight} ")"</small>
                    </li>
                }
                .into_any(),
                TermEntry::Placeholder => view! { <li class="term-item">{NO_TERMS_TEXT}</li> }.into_any(),
            })
            .collect_view()
    };

    let on_copy = move |_| {
        check.with_untracked(|s| {
            clipboard::copy_summary(s);
        });
    };

    view! {
        <section class="result" class:hidden=hidden node_ref=section_ref>
            <h2 class="result__label" style:color=label_color>{label_text}</h2>
            <div class="result__scores">
                <div class="result__score">
                    <span>"نسبة الثقة"</span>
                    <strong>{confidence}</strong>
                </div>
                <div class="result__score">
                    <span>"احتمال التزييف (p_fake)"</span>
                    <strong>{p_fake}</strong>
                </div>
                <div class="result__score">
                    <span>"موثوقية المصدر"</span>
                    <strong>{source_score}</strong>
                </div>
            </div>
            <h3>"الأدلة (Evidence)"</h3>
            <ul class="evidence-list">{evidence_rows}</ul>
            <h3>"الكلمات المفتاحية (Terms)"</h3>
            <ul class="terms-list">{term_rows}</ul>
            <button class="btn" type="button" on:click=on_copy>"نسخ النتيجة (Copy)"</button>
        </section>
    }
}
