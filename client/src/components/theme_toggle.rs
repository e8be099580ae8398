//! Checkbox switching between the modern and cyber themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let next = theme::toggle(event_target_checked(&ev));
        ui.update(|u| u.theme = next);
    };

    view! {
        <label class="theme-toggle">
            <input
                type="checkbox"
                prop:checked=move || ui.get().theme.is_cyber()
                on:change=on_change
            />
            <span class="theme-toggle__label">"Cyber"</span>
        </label>
    }
}
