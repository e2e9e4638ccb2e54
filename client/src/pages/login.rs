//! Super admin login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&email_value, &password_value).await;
                match tenants::outcome::login_outcome(result) {
                    tenants::LoginOutcome::SignedIn(token) => {
                        log::info!("super admin signed in");
                        session.update(|s| s.sign_in(&crate::util::storage::BrowserTokenStore, token));
                    }
                    tenants::LoginOutcome::NoToken => {
                        log::warn!("login succeeded without a token");
                    }
                    tenants::LoginOutcome::Failed(message) => error.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Mediqlo"</h1>
                <p class="login-card__subtitle">"Super Admin Login"</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-message login-message--error">{move || error.get()}</div>
                    </Show>
                    <label class="sr-only" for="email-address">"Email address"</label>
                    <input
                        id="email-address"
                        name="email"
                        class="login-input"
                        type="email"
                        required
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="sr-only" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="login-input"
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
