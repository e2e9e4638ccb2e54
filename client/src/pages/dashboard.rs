//! Dashboard page listing hospital tenants with feature toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while a token is held. Fetches the tenant list whenever the
//! token changes, applies feature toggles optimistically, and signs out when
//! the backend rejects the token.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use leptos::prelude::*;
use tenants::Hospital;
#[cfg(any(test, feature = "hydrate"))]
use tenants::{HospitalRoster, PendingToggle, Rollback};

use crate::components::hospital_table::{HospitalTable, ToggleRequest};
use crate::state::hospitals::HospitalsState;
use crate::state::session::SessionState;
use crate::util::storage::BrowserTokenStore;

pub(crate) const EMPTY_ROSTER: &str = "No hospitals registered yet.";
pub(crate) const LOADING: &str = "Loading hospitals...";

/// End the session locally and drop the roster. No backend call.
pub(crate) fn sign_out(session: RwSignal<SessionState>, hospitals: RwSignal<HospitalsState>) {
    session.update(|s| s.sign_out(&BrowserTokenStore));
    hospitals.update(HospitalsState::reset);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let hospitals = expect_context::<RwSignal<HospitalsState>>();

    let token = Memo::new(move |_| session.with(SessionState::token));

    Effect::new(move || {
        let Some(token) = token.get() else {
            return;
        };
        hospitals.update(HospitalsState::start_loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_hospitals(&token).await;
            if let Err(e) = &result {
                log::warn!("hospital list fetch failed: {e}");
            }
            let outcome = tenants::outcome::list_outcome(result);
            let mut must_sign_out = false;
            hospitals.update(|s| must_sign_out = s.apply_list(outcome));
            if must_sign_out {
                sign_out(session, hospitals);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_toggle = Callback::new(move |(hospital_id, key, enabled): ToggleRequest| {
        let mut pending = None;
        hospitals.update(|s| pending = s.roster.begin_toggle(&hospital_id, key, enabled));
        let Some(pending) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = token.get_untracked() else {
                hospitals.update(|s| {
                    s.roster.rollback(pending);
                });
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_feature(&token, &hospital_id, key, enabled).await {
                    Ok(updated) => hospitals.update(|s| {
                        s.roster.commit(updated);
                    }),
                    Err(e) => {
                        log::error!("{} {hospital_id}/{key}: {e}", tenants::outcome::UPDATE_FAILED);
                        hospitals.update(|s| {
                            revert_failed_toggle(&mut s.roster, pending, crate::util::notify::alert);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
    });

    let on_logout = move |_| sign_out(session, hospitals);

    let records = Signal::derive(move || hospitals.with(visible_records));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 class="dashboard-page__title">"Super Admin Dashboard"</h1>
                <span class="dashboard-page__spacer"></span>
                <button class="btn dashboard-page__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="dashboard-page__main">
                <h2>"Registered Hospitals"</h2>
                <Show when=move || hospitals.with(|s| s.loading)>
                    <p class="dashboard-page__status">{LOADING}</p>
                </Show>
                <Show when=move || hospitals.with(|s| s.error.is_some())>
                    <p class="dashboard-page__error">
                        {move || hospitals.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || hospitals.with(HospitalsState::ready)>
                    <Show
                        when=move || records.with(|r| !r.is_empty())
                        fallback=|| view! { <p class="dashboard-page__status">{EMPTY_ROSTER}</p> }
                    >
                        <HospitalTable records=records on_toggle=on_toggle/>
                    </Show>
                </Show>
            </main>
        </div>
    }
}

/// Tell the operator, then undo the optimistic change.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn revert_failed_toggle(
    roster: &mut HospitalRoster,
    pending: PendingToggle,
    notify: impl FnOnce(&str),
) -> Rollback {
    notify(tenants::outcome::TOGGLE_REVERTED);
    roster.rollback(pending)
}

/// Records currently shown, in roster order.
pub(crate) fn visible_records(state: &HospitalsState) -> Vec<Arc<Hospital>> {
    state.roster.records().to_vec()
}
