//! View router: login when signed out, dashboard when a token is held.

use leptos::prelude::*;
use tenants::View;

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let current = Memo::new(move |_| session.with(SessionState::current_view));

    move || match current.get() {
        None => view! { <div class="console-loading"><p>"Loading..."</p></div> }.into_any(),
        Some(View::Login) => view! { <LoginPage/> }.into_any(),
        Some(View::Dashboard) => view! { <DashboardPage/> }.into_any(),
    }
}
