//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::check::CheckPage;
use crate::state::{check::CheckState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class=UiState::default().theme.class_name()>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the check and UI state contexts and mounts the check page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let check = RwSignal::new(CheckState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(check);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/newscheck.css"/>
        <Title text="كاشف الأخبار المزيفة"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CheckPage/>
            </Routes>
        </Router>
    }
}
