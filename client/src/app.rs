//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::console::ConsolePage;
use crate::state::{hospitals::HospitalsState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and roster contexts, restores the persisted token
/// once mounted in the browser, and routes `/` to the console.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let hospitals = RwSignal::new(HospitalsState::default());

    provide_context(session);
    provide_context(hospitals);

    // localStorage only exists in the browser; SSR renders the pending state.
    Effect::new(move || {
        if session.with_untracked(|s| s.restored) {
            return;
        }
        session.update(|s| s.restore(&crate::util::storage::BrowserTokenStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mediqlo-console.css"/>
        <Title text="Mediqlo Super Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
