//! REST API helpers for communicating with the hospital-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; status handling and envelope
//! decoding go through `tenants::wire::decode_response` so the CLI and the
//! browser agree on what counts as a failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tenants::wire::LoginResponse;
use tenants::{ApiError, FeatureKey, Hospital};

#[cfg(any(test, not(feature = "hydrate")))]
fn browser_only() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    Ok((status, body))
}

/// Exchange credentials for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or a non-JSON body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tenants::endpoints::login_url(&crate::config::api_url());
        let payload = tenants::wire::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        tenants::wire::decode_response(status, &body, tenants::wire::decode_login)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(browser_only())
    }
}

/// Fetch every registered tenant via `GET /api/hospitals`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] on 401, otherwise [`ApiError`] for any
/// other failure.
pub async fn fetch_hospitals(token: &str) -> Result<Vec<Hospital>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tenants::endpoints::hospitals_url(&crate::config::api_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &tenants::endpoints::bearer(token))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        tenants::wire::decode_response(status, &body, tenants::wire::decode_hospital_list)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(browser_only())
    }
}

/// Set one feature flag for one tenant via `PATCH /api/hospitals/:id/features`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or a body
/// without `data.hospital`.
pub async fn update_feature(
    token: &str,
    hospital_id: &str,
    key: FeatureKey,
    enabled: bool,
) -> Result<Hospital, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tenants::endpoints::hospital_features_url(&crate::config::api_url(), hospital_id);
        let patch = tenants::wire::FeaturePatch::single(key, enabled);
        let resp = gloo_net::http::Request::patch(&url)
            .header("Authorization", &tenants::endpoints::bearer(token))
            .json(&patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        tenants::wire::decode_response(status, &body, tenants::wire::decode_hospital)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, hospital_id, key, enabled);
        Err(browser_only())
    }
}
