//! Host configuration from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos options (site root, pkg dir, default address) come from the
//! `cargo-leptos` environment. `PORT` overrides the address and binds on all
//! interfaces, matching container deployments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use leptos::prelude::{LeptosOptions, get_configuration};

use crate::error::ServerError;

pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self {
            addr: resolve_addr(leptos.site_addr, port),
            leptos,
        })
    }
}

/// Parse an optional `PORT` value. Unset or blank means "not overridden".
pub fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}

pub fn resolve_addr(site_addr: SocketAddr, port: Option<u16>) -> SocketAddr {
    match port {
        Some(port) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        None => site_addr,
    }
}
