use super::*;

#[test]
fn input_id_joins_hospital_and_feature_key() {
    assert_eq!(
        toggle_input_id("665f1c2e", FeatureKey::DepartmentManagement),
        "665f1c2e-departmentManagement"
    );
}
