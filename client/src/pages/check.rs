//! News check page: form, submission controller, and result region.

use leptos::html::Section;
use leptos::prelude::*;

use crate::components::{check_form::CheckForm, result_panel::ResultPanel, theme_toggle::ThemeToggle};
use crate::state::check::CheckState;
use crate::util::notice;

#[component]
pub fn CheckPage() -> impl IntoView {
    let check = expect_context::<RwSignal<CheckState>>();
    let result_ref = NodeRef::<Section>::new();

    // One request per click. `complete` restores the idle trigger on every
    // path, including transport errors.
    let on_check = Callback::new(move |()| {
        let request = match check.try_update(CheckState::begin_submission) {
            Some(Ok(request)) => request,
            Some(Err(message)) => {
                notice::show(message);
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{BrowserTransport, submit_check};
            use crate::state::check::Completion;

            let result = submit_check(&BrowserTransport, &request).await;
            if let Err(e) = &result {
                log::error!("check request failed: {e}");
            }
            match check.try_update(|s| s.complete(result)) {
                Some(Completion::Rendered) => {
                    request_animation_frame(move || crate::util::scroll::smooth_into_view(result_ref));
                }
                Some(Completion::Notice(message)) => notice::show(&message),
                None => {}
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    view! {
        <main class="check-page">
            <header class="check-page__header">
                <h1>"🕵️ كاشف الأخبار المزيفة"</h1>
                <ThemeToggle/>
            </header>
            <CheckForm on_check=on_check/>
            <ResultPanel section_ref=result_ref/>
        </main>
    }
}
