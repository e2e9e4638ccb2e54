use super::*;

fn feature_shaped() -> serde_json::Value {
    serde_json::json!({
        "_id": "665f1c2e9b1e8a0012ab34cd",
        "hospitalCode": "HSP-001",
        "name": "St. Mary General",
        "isActive": true,
        "features": {
            "appointments": true,
            "patientManagement": false,
            "doctorManagement": true,
            "departmentManagement": false,
            "billing": false,
            "reporting": false
        },
        "createdAt": "2024-03-07T09:15:00.000Z",
        "updatedAt": "2024-05-01T10:00:00.000Z"
    })
}

#[test]
fn deserializes_feature_shaped_record() {
    let hospital: Hospital = serde_json::from_value(feature_shaped()).expect("hospital");
    assert_eq!(hospital.id, "665f1c2e9b1e8a0012ab34cd");
    assert_eq!(hospital.hospital_code.as_deref(), Some("HSP-001"));
    assert!(hospital.feature(FeatureKey::Appointments));
    assert!(!hospital.feature(FeatureKey::PatientManagement));
    assert!(hospital.contact.is_none());
}

#[test]
fn deserializes_contact_shaped_record_without_features() {
    let hospital: Hospital = serde_json::from_value(serde_json::json!({
        "_id": "h2",
        "name": "Lakeside Clinic",
        "createdAt": "2023-11-20T00:00:00Z",
        "contact": { "name": "Dr. Rao", "email": "admin@lakeside.test", "phone": "555-0100" },
        "address": { "street": "1 Shore Rd", "city": "Duluth", "state": "MN", "postalCode": "55802" }
    }))
    .expect("hospital");
    assert_eq!(hospital.features, FeatureFlags::default());
    assert!(!hospital.feature(FeatureKey::Appointments));
    assert_eq!(
        hospital.contact.as_ref().map(Contact::summary).as_deref(),
        Some("Dr. Rao · admin@lakeside.test · 555-0100")
    );
    assert_eq!(
        hospital.address.as_ref().map(Address::summary).as_deref(),
        Some("1 Shore Rd, Duluth, MN, 55802")
    );
}

#[test]
fn with_feature_copies_record_and_changes_one_key() {
    let hospital: Hospital = serde_json::from_value(feature_shaped()).expect("hospital");
    let next = hospital.with_feature(FeatureKey::PatientManagement, true);
    assert!(next.feature(FeatureKey::PatientManagement));
    assert!(!hospital.feature(FeatureKey::PatientManagement));
    assert_eq!(next.name, hospital.name);
    assert_eq!(next.feature(FeatureKey::Appointments), hospital.feature(FeatureKey::Appointments));
}

#[test]
fn registration_date_is_month_day_year() {
    assert_eq!(format_registration_date("2024-03-07T09:15:00.000Z"), "3/7/2024");
    assert_eq!(format_registration_date("2023-12-25T23:59:59+00:00"), "12/25/2023");
}

#[test]
fn registration_date_uses_utc_calendar_day() {
    assert_eq!(format_registration_date("2024-01-01T23:30:00-05:00"), "1/2/2024");
    assert_eq!(format_registration_date("2024-01-02T01:00:00+03:00"), "1/1/2024");
}

#[test]
fn null_features_and_created_at_read_as_defaults() {
    let hospital: Hospital = serde_json::from_value(serde_json::json!({
        "_id": "h3",
        "name": "Harbor Hospital",
        "features": null,
        "createdAt": null
    }))
    .expect("hospital");
    assert_eq!(hospital.features, FeatureFlags::default());
    assert!(!hospital.feature(FeatureKey::Billing));
    assert_eq!(hospital.registered_on(), "");
}

#[test]
fn registration_date_falls_back_to_raw_value() {
    assert_eq!(format_registration_date("yesterday"), "yesterday");
    assert_eq!(format_registration_date(""), "");
}

#[test]
fn status_label_reflects_active_flag() {
    let mut hospital: Hospital = serde_json::from_value(feature_shaped()).expect("hospital");
    assert_eq!(hospital.status_label(), Some("Active"));
    hospital.is_active = Some(false);
    assert_eq!(hospital.status_label(), Some("Inactive"));
    hospital.is_active = None;
    assert_eq!(hospital.status_label(), None);
}

#[test]
fn summary_skips_blank_parts() {
    let contact = Contact {
        name: Some("  ".to_owned()),
        email: Some("ops@example.test".to_owned()),
        phone: None,
    };
    assert_eq!(contact.summary(), "ops@example.test");
}
