//! Tenant table with per-feature toggle columns.
//!
//! The contact and address columns appear only when some record carries
//! those details, so one table serves both backend record shapes.

#[cfg(test)]
#[path = "hospital_table_test.rs"]
mod hospital_table_test;

use std::sync::Arc;

use leptos::prelude::*;
use tenants::{FeatureKey, Hospital};

use crate::components::feature_toggle::FeatureToggle;

/// Arguments passed to the toggle callback: tenant id, feature, new value.
pub type ToggleRequest = (String, FeatureKey, bool);

/// Whether the contact/address columns should render.
pub fn show_contact_columns(records: &[Arc<Hospital>]) -> bool {
    records
        .iter()
        .any(|h| h.contact.is_some() || h.address.is_some())
}

/// Secondary line under the tenant name: code and status, when known.
pub fn name_caption(hospital: &Hospital) -> Option<String> {
    let parts: Vec<&str> = [hospital.hospital_code.as_deref(), hospital.status_label()]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

#[component]
pub fn HospitalTable(
    #[prop(into)] records: Signal<Vec<Arc<Hospital>>>,
    on_toggle: Callback<ToggleRequest>,
) -> impl IntoView {
    let with_contact = move || records.with(|r| show_contact_columns(r));

    view! {
        <div class="hospital-table">
            <table class="hospital-table__grid">
                <thead>
                    <tr>
                        <th scope="col">"Hospital Name"</th>
                        <th scope="col">"Date Registered"</th>
                        <Show when=with_contact>
                            <th scope="col">"Contact"</th>
                            <th scope="col">"Address"</th>
                        </Show>
                        {FeatureKey::COLUMNS
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <th scope="col" class="hospital-table__feature">{key.label()}</th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let show_contact = with_contact();
                        records
                            .get()
                            .into_iter()
                            .map(|hospital| hospital_row(hospital, show_contact, on_toggle))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn hospital_row(
    hospital: Arc<Hospital>,
    show_contact: bool,
    on_toggle: Callback<ToggleRequest>,
) -> impl IntoView {
    let caption = name_caption(&hospital);
    let contact = hospital
        .contact
        .as_ref()
        .map(tenants::Contact::summary)
        .unwrap_or_default();
    let address = hospital
        .address
        .as_ref()
        .map(tenants::Address::summary)
        .unwrap_or_default();

    let toggles = FeatureKey::COLUMNS
        .into_iter()
        .map(|key| {
            let id = hospital.id.clone();
            let on_change = Callback::new(move |enabled: bool| {
                on_toggle.run((id.clone(), key, enabled));
            });
            view! {
                <td class="hospital-table__feature">
                    <FeatureToggle
                        hospital_id=hospital.id.clone()
                        feature=key
                        checked=hospital.feature(key)
                        on_change=on_change
                    />
                </td>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>
                <div class="hospital-table__name">{hospital.name.clone()}</div>
                {caption.map(|text| view! { <div class="hospital-table__caption">{text}</div> })}
            </td>
            <td class="hospital-table__date">{hospital.registered_on()}</td>
            {show_contact.then(|| view! {
                <td class="hospital-table__contact">{contact}</td>
                <td class="hospital-table__address">{address}</td>
            })}
            {toggles}
        </tr>
    }
}
