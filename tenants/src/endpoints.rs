//! Backend endpoint paths and base-URL handling.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Backend used when no `API_URL` is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Normalize a configured base URL: trim whitespace and trailing slashes,
/// falling back to [`DEFAULT_API_URL`] when unset or blank.
#[must_use]
pub fn base_url(configured: Option<&str>) -> String {
    let trimmed = configured
        .map(str::trim)
        .map(|value| value.trim_end_matches('/'))
        .unwrap_or_default();
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[must_use]
pub fn login_url(base: &str) -> String {
    format!("{base}/api/auth/login")
}

#[must_use]
pub fn hospitals_url(base: &str) -> String {
    format!("{base}/api/hospitals")
}

#[must_use]
pub fn hospital_features_url(base: &str, hospital_id: &str) -> String {
    format!("{base}/api/hospitals/{hospital_id}/features")
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
