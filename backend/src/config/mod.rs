//! Central module for application-wide configuration settings.
//!
//! Settings are read from `ITM_*` environment variables. Everything except
//! the client secret has a default matching the development realm.

use std::net::SocketAddr;

use itm_adapters::{Credentials, Realm};
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_IDP_BASE_URL: &str = "http://backend-gateway-client:8080/auth";
pub const DEFAULT_IDP_REALM: &str = "ITM";
pub const DEFAULT_IDP_CLIENT_ID: &str = "backend-gateway-client";
pub const DEFAULT_LOG_FILTER: &str = "info,itm_backend=debug,itm_adapters=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    pub identity: IdentitySettings,
    pub log_filter: String,
}

/// Where the identity provider lives and how this service authenticates to it.
#[derive(Clone)]
pub struct IdentitySettings {
    pub base_url: String,
    pub realm: String,
    pub client_id: String,
    pub client_secret: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for IdentitySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySettings")
            .field("base_url", &self.base_url)
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .field("admin_username", &self.admin_username)
            .finish_non_exhaustive()
    }
}

impl IdentitySettings {
    pub fn realm(&self) -> Realm {
        Realm::new(&self.base_url, &self.realm)
    }

    /// Password grant when an admin user is configured, client credentials otherwise.
    pub fn admin_credentials(&self) -> Credentials {
        match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => Credentials::password(
                &self.client_id,
                &self.client_secret,
                username,
                password,
            ),
            _ => Credentials::client_credentials(&self.client_id, &self.client_secret),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = get("ITM_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                key: "ITM_LISTEN_ADDR",
                reason: err.to_string(),
            })?;

        let admin_username = get("ITM_IDP_ADMIN_USERNAME");
        let admin_password = get("ITM_IDP_ADMIN_PASSWORD");
        if admin_username.is_some() != admin_password.is_some() {
            return Err(ConfigError::Invalid {
                key: "ITM_IDP_ADMIN_USERNAME",
                reason: "admin username and password must be set together".to_string(),
            });
        }

        let identity = IdentitySettings {
            base_url: get("ITM_IDP_BASE_URL").unwrap_or_else(|| DEFAULT_IDP_BASE_URL.to_string()),
            realm: get("ITM_IDP_REALM").unwrap_or_else(|| DEFAULT_IDP_REALM.to_string()),
            client_id: get("ITM_IDP_CLIENT_ID")
                .unwrap_or_else(|| DEFAULT_IDP_CLIENT_ID.to_string()),
            client_secret: get("ITM_IDP_CLIENT_SECRET")
                .ok_or(ConfigError::Missing("ITM_IDP_CLIENT_SECRET"))?,
            admin_username,
            admin_password,
        };

        Ok(Self {
            listen_addr,
            identity,
            log_filter: get("ITM_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
