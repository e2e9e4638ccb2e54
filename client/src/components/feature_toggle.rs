//! Switch-style checkbox for one tenant feature.

#[cfg(test)]
#[path = "feature_toggle_test.rs"]
mod feature_toggle_test;

use leptos::prelude::*;
use tenants::FeatureKey;

/// DOM id of the checkbox for `hospital_id`/`key`.
pub fn toggle_input_id(hospital_id: &str, key: FeatureKey) -> String {
    format!("{hospital_id}-{}", key.as_str())
}

#[component]
pub fn FeatureToggle(
    hospital_id: String,
    feature: FeatureKey,
    checked: bool,
    on_change: Callback<bool>,
) -> impl IntoView {
    let input_id = toggle_input_id(&hospital_id, feature);

    view! {
        <label class="feature-toggle" for=input_id.clone() title=feature.label()>
            <input
                type="checkbox"
                id=input_id.clone()
                class="feature-toggle__input"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="feature-toggle__track"></span>
            <span class="feature-toggle__dot"></span>
        </label>
    }
}
