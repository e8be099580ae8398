//! Article input form with check and clear actions.

use leptos::prelude::*;
use verdict::LangHint;

use crate::state::check::CheckState;

/// Text, source, and language inputs bound to `CheckState`.
///
/// `on_check` runs the submission controller; clearing is handled here since
/// it only touches local state.
#[component]
pub fn CheckForm(on_check: Callback<()>) -> impl IntoView {
    let check = expect_context::<RwSignal<CheckState>>();

    let busy = move || check.with(|s| s.busy);
    let trigger_label = move || check.with(CheckState::trigger_label);

    let on_lang_change = move |ev: leptos::ev::Event| {
        let lang = LangHint::parse(&event_target_value(&ev)).unwrap_or_default();
        check.update(|s| s.lang = lang);
    };

    view! {
        <div class="check-form">
            <textarea
                class="check-form__text"
                rows="8"
                placeholder="الصق نص الخبر هنا..."
                prop:value=move || check.with(|s| s.text.clone())
                on:input=move |ev| check.update(|s| s.text = event_target_value(&ev))
            ></textarea>
            <div class="check-form__row">
                <input
                    class="check-form__source"
                    type="text"
                    placeholder="مصدر الخبر (مثال: bbc.com)"
                    prop:value=move || check.with(|s| s.source.clone())
                    on:input=move |ev| check.update(|s| s.source = event_target_value(&ev))
                />
                <select class="check-form__lang" on:change=on_lang_change>
                    {LangHint::ALL
                        .into_iter()
                        .map(|hint| {
                            view! {
                                <option
                                    value=hint.as_str()
                                    selected=move || check.with(|s| s.lang == hint)
                                >
                                    {hint.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="check-form__actions">
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=busy
                    on:click=move |_| on_check.run(())
                >
                    {trigger_label}
                </button>
                <button class="btn" type="button" on:click=move |_| check.update(CheckState::clear)>
                    "مسح (Clear)"
                </button>
            </div>
        </div>
    }
}
