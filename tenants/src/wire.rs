//! Request and response bodies exchanged with the backend.
//!
//! Both front ends receive raw response text and decode it here, so the
//! envelope shapes (`{data:{hospitals}}`, `{data:{hospital}}`) live in one place.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::features::{FeatureFlags, FeatureKey};
use crate::hospital::Hospital;

/// `POST /api/auth/login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /api/auth/login` success body. A missing token is not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of a rejected request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse leniently; anything that is not a JSON object with `message` yields no message.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// `PATCH /api/hospitals/:id/features` body, scoped to the flags being changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturePatch {
    pub features: FeatureFlags,
}

impl FeaturePatch {
    /// Patch touching exactly one flag.
    #[must_use]
    pub fn single(key: FeatureKey, enabled: bool) -> Self {
        Self {
            features: std::iter::once((key, enabled)).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct HospitalsData {
    hospitals: Vec<Hospital>,
}

#[derive(Debug, Deserialize)]
struct HospitalData {
    hospital: Hospital,
}

/// Decode a login success body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not JSON.
pub fn decode_login(body: &str) -> Result<LoginResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode `{data:{hospitals:[...]}}`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the envelope or a record does not match.
pub fn decode_hospital_list(body: &str) -> Result<Vec<Hospital>, ApiError> {
    serde_json::from_str::<DataEnvelope<HospitalsData>>(body)
        .map(|envelope| envelope.data.hospitals)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode `{data:{hospital:{...}}}`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the envelope or the record does not match.
pub fn decode_hospital(body: &str) -> Result<Hospital, ApiError> {
    serde_json::from_str::<DataEnvelope<HospitalData>>(body)
        .map(|envelope| envelope.data.hospital)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a raw `(status, body)` pair into the decoded payload or an [`ApiError`].
///
/// # Errors
///
/// Returns [`ApiError::from_status`] for non-2xx statuses, otherwise whatever
/// `decode` returns.
pub fn decode_response<T>(
    status: u16,
    body: &str,
    decode: impl FnOnce(&str) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        decode(body)
    } else {
        Err(ApiError::from_status(status, body))
    }
}
