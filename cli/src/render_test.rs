use super::*;

fn hospital(id: &str, name: &str, appointments: bool) -> Hospital {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "name": name,
        "createdAt": "2024-03-07T09:15:00.000Z",
        "features": { "appointments": appointments }
    }))
    .expect("hospital")
}

#[test]
fn table_has_header_and_one_row_per_hospital() {
    let hospitals = [hospital("a1", "Alpha", true), hospital("b2", "Beta Medical", false)];
    let table = hospitals_table(&hospitals);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("Patient Mgt."));
    assert!(lines[1].contains("Alpha"));
    assert!(lines[1].contains("3/7/2024"));
}

#[test]
fn columns_are_aligned() {
    let hospitals = [hospital("a1", "A", true), hospital("b2", "Much Longer Name", false)];
    let table = hospitals_table(&hospitals);
    let lines: Vec<&str> = table.lines().collect();
    let col = lines[0].find("REGISTERED").expect("header");
    assert_eq!(lines[1].find("3/7/2024"), Some(col));
    assert_eq!(lines[2].find("3/7/2024"), Some(col));
}

#[test]
fn empty_roster_renders_header_only() {
    let table = hospitals_table(std::iter::empty());
    assert_eq!(table.lines().count(), 1);
}

#[test]
fn feature_summary_lists_all_keys() {
    let summary = feature_summary(&hospital("a", "A", true));
    assert!(summary.starts_with("appointments=on patientManagement=off"));
    assert!(summary.ends_with("reporting=off"));
}
