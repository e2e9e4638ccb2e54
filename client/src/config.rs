//! Build-time configuration for the browser bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL, taken from `API_URL` when the bundle was built.
pub fn api_url() -> String {
    tenants::endpoints::base_url(option_env!("API_URL"))
}
