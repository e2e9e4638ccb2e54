//! Hospital tenant record as returned by the backend.
//!
//! DESIGN
//! ======
//! One record type covers both dashboard layouts: the feature-toggle table and
//! the contact/address table. Fields only one layout needs are optional, so a
//! backend that sends either shape deserializes into the same struct.

#[cfg(test)]
#[path = "hospital_test.rs"]
mod hospital_test;

use serde::{Deserialize, Deserializer, Serialize};
use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::features::{FeatureFlags, FeatureKey};

/// A registered hospital tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short tenant code assigned at registration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_code: Option<String>,
    /// Whether the tenant is active, if the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: FeatureFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Registration timestamp (ISO 8601).
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Primary contact for a tenant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Postal address for a tenant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Hospital {
    #[must_use]
    pub fn feature(&self, key: FeatureKey) -> bool {
        self.features.is_enabled(key)
    }

    /// Copy of this record with one feature switched.
    #[must_use]
    pub fn with_feature(&self, key: FeatureKey, enabled: bool) -> Self {
        Self {
            features: self.features.with(key, enabled),
            ..self.clone()
        }
    }

    /// Registration date as `M/D/YYYY`, or the raw timestamp if it does not parse.
    #[must_use]
    pub fn registered_on(&self) -> String {
        format_registration_date(&self.created_at)
    }

    /// "Active" / "Inactive", or `None` when the backend did not say.
    #[must_use]
    pub fn status_label(&self) -> Option<&'static str> {
        self.is_active
            .map(|active| if active { "Active" } else { "Inactive" })
    }
}

impl Contact {
    /// Non-empty contact parts joined for a single table cell.
    #[must_use]
    pub fn summary(&self) -> String {
        join_present(&[&self.name, &self.email, &self.phone], " · ")
    }
}

impl Address {
    /// Non-empty address parts joined for a single table cell.
    #[must_use]
    pub fn summary(&self) -> String {
        join_present(
            &[&self.street, &self.city, &self.state, &self.postal_code, &self.country],
            ", ",
        )
    }
}

/// Read an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn join_present(parts: &[&Option<String>], sep: &str) -> String {
    parts
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Format an RFC 3339 timestamp as a US-style calendar date in UTC.
#[must_use]
pub fn format_registration_date(raw: &str) -> String {
    let Ok(ts) = OffsetDateTime::parse(raw.trim(), &Rfc3339) else {
        return raw.to_owned();
    };
    ts.to_offset(UtcOffset::UTC).format(format_description!(
        "[month padding:none]/[day padding:none]/[year]"
    ))
    .unwrap_or_else(|_| raw.to_owned())
}
