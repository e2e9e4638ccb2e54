use super::*;
use tenants::{FeatureKey, ListOutcome, Rollback};

fn loaded() -> HospitalsState {
    let hospitals: Vec<Hospital> = serde_json::from_value(serde_json::json!([
        { "_id": "a", "name": "Alpha", "createdAt": "2024-01-01T00:00:00Z" },
        { "_id": "b", "name": "Beta", "createdAt": "2024-01-02T00:00:00Z" }
    ]))
    .expect("hospitals");
    let mut state = HospitalsState::default();
    state.apply_list(ListOutcome::Loaded(hospitals));
    state
}

#[test]
fn visible_records_follow_roster_order() {
    let state = loaded();
    let ids: Vec<String> = visible_records(&state).iter().map(|h| h.id.clone()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn optimistic_toggle_is_visible_before_network_completes() {
    let mut state = loaded();
    let pending = state.roster.begin_toggle("b", FeatureKey::Appointments, true);
    assert!(pending.is_some());
    let visible = visible_records(&state);
    assert!(visible[1].feature(FeatureKey::Appointments));
    assert!(Arc::ptr_eq(&visible[0], &state.roster.records()[0]));
}

#[test]
fn failed_toggle_alerts_then_restores_roster() {
    let mut state = loaded();
    let before: Vec<Hospital> = state.roster.records().iter().map(|h| (**h).clone()).collect();
    let pending = state
        .roster
        .begin_toggle("a", FeatureKey::Billing, true)
        .expect("pending");
    assert!(state.roster.records()[0].feature(FeatureKey::Billing));

    let mut shown = Vec::new();
    let rollback = revert_failed_toggle(&mut state.roster, pending, |msg| shown.push(msg.to_owned()));

    assert_eq!(rollback, Rollback::Restored);
    assert_eq!(shown, ["Could not update feature settings. Reverting change."]);
    let after: Vec<Hospital> = state.roster.records().iter().map(|h| (**h).clone()).collect();
    assert_eq!(after, before);
}

#[test]
fn status_messages_match_console_copy() {
    assert_eq!(LOADING, "Loading hospitals...");
    assert_eq!(EMPTY_ROSTER, "No hospitals registered yet.");
}
