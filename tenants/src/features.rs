//! Recognized per-tenant feature switches.
//!
//! The backend stores features as a flat JSON object of `key -> bool`. The
//! console only knows a fixed set of keys, but any extra keys the backend
//! sends are kept so a round trip never drops them.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A product capability that can be switched on or off for one tenant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    Appointments,
    PatientManagement,
    DoctorManagement,
    DepartmentManagement,
    Billing,
    Reporting,
}

impl FeatureKey {
    /// Every key the backend feature schema defines.
    pub const ALL: [Self; 6] = [
        Self::Appointments,
        Self::PatientManagement,
        Self::DoctorManagement,
        Self::DepartmentManagement,
        Self::Billing,
        Self::Reporting,
    ];

    /// Keys rendered as toggle columns on the dashboard, in column order.
    pub const COLUMNS: [Self; 4] = [
        Self::Appointments,
        Self::PatientManagement,
        Self::DoctorManagement,
        Self::DepartmentManagement,
    ];

    /// Wire name used in the backend `features` object.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::PatientManagement => "patientManagement",
            Self::DoctorManagement => "doctorManagement",
            Self::DepartmentManagement => "departmentManagement",
            Self::Billing => "billing",
            Self::Reporting => "reporting",
        }
    }

    /// Short column header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Appointments => "Appointments",
            Self::PatientManagement => "Patient Mgt.",
            Self::DoctorManagement => "Doctor Mgt.",
            Self::DepartmentManagement => "Dept. Mgt.",
            Self::Billing => "Billing",
            Self::Reporting => "Reporting",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`FeatureKey`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature `{0}`; expected one of: appointments, patientManagement, doctorManagement, departmentManagement, billing, reporting")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureKey {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownFeature(trimmed.to_owned()))
    }
}

/// Feature switches for one tenant, keyed by wire name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<String, bool>);

impl FeatureFlags {
    /// Whether `key` is enabled. Keys the backend omitted read as disabled.
    #[must_use]
    pub fn is_enabled(&self, key: FeatureKey) -> bool {
        self.0.get(key.as_str()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: FeatureKey, enabled: bool) {
        self.0.insert(key.as_str().to_owned(), enabled);
    }

    /// Copy of these flags with `key` set to `enabled`.
    #[must_use]
    pub fn with(&self, key: FeatureKey, enabled: bool) -> Self {
        let mut next = self.clone();
        next.set(key, enabled);
        next
    }
}

impl FromIterator<(FeatureKey, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, enabled)| (key.as_str().to_owned(), enabled))
                .collect(),
        )
    }
}
