//! Plain-text tenant table for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use tenants::{FeatureKey, Hospital};

const ON: &str = "on";
const OFF: &str = "-";

/// Render tenants as an aligned table: id, name, registration date, then one
/// column per dashboard feature.
pub fn hospitals_table<'a>(hospitals: impl IntoIterator<Item = &'a Hospital>) -> String {
    let mut rows: Vec<Vec<String>> = vec![
        ["ID", "NAME", "REGISTERED"]
            .into_iter()
            .map(str::to_owned)
            .chain(FeatureKey::COLUMNS.iter().map(|key| key.label().to_owned()))
            .collect(),
    ];
    for hospital in hospitals {
        let mut row = vec![
            hospital.id.clone(),
            hospital.name.clone(),
            hospital.registered_on(),
        ];
        row.extend(
            FeatureKey::COLUMNS
                .iter()
                .map(|key| (if hospital.feature(*key) { ON } else { OFF }).to_owned()),
        );
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// One-line summary of every known feature on a record.
pub fn feature_summary(hospital: &Hospital) -> String {
    FeatureKey::ALL
        .iter()
        .map(|key| format!("{}={}", key.as_str(), if hospital.feature(*key) { ON } else { "off" }))
        .collect::<Vec<_>>()
        .join(" ")
}
