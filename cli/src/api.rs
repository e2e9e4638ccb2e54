//! Backend client over `reqwest`.
//!
//! Mirrors the browser's `net::api` calls. Status handling and envelope
//! decoding are shared through `tenants::wire`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::AUTHORIZATION;
use tenants::wire::{self, FeaturePatch, LoginRequest, LoginResponse};
use tenants::{ApiError, FeatureKey, Hospital, endpoints};

pub struct Backend {
    http: reqwest::Client,
    base_url: String,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read(resp: reqwest::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(transport)?;
    tracing::debug!(status, bytes = body.len(), "backend response");
    Ok((status, body))
}

impl Backend {
    /// Client for the backend at `base_url` (normalized; blank means the default).
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: endpoints::base_url(Some(base_url)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = endpoints::login_url(&self.base_url);
        tracing::debug!(method = "POST", %url, "login");
        let resp = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        wire::decode_response(status, &body, wire::decode_login)
    }

    pub async fn hospitals(&self, token: &str) -> Result<Vec<Hospital>, ApiError> {
        let url = endpoints::hospitals_url(&self.base_url);
        tracing::debug!(method = "GET", %url, "list hospitals");
        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, endpoints::bearer(token))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        wire::decode_response(status, &body, wire::decode_hospital_list)
    }

    pub async fn update_feature(
        &self,
        token: &str,
        hospital_id: &str,
        key: FeatureKey,
        enabled: bool,
    ) -> Result<Hospital, ApiError> {
        let url = endpoints::hospital_features_url(&self.base_url, hospital_id);
        tracing::debug!(method = "PATCH", %url, feature = %key, enabled, "update feature");
        let resp = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, endpoints::bearer(token))
            .json(&FeaturePatch::single(key, enabled))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(resp).await?;
        wire::decode_response(status, &body, wire::decode_hospital)
    }
}
