//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the identity
//! provider: token exchange, admin API calls and response decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The token or introspection endpoint answered with a non-2xx status.
    #[error("failed to get token: {status}")]
    Auth { status: u16 },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    /// Any other non-2xx answer from the admin API.
    #[error("identity provider returned {status} for {operation}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed identity provider response: {0}")]
    Decode(String),
}

pub type AdapterResult<T> = Result<T, AdapterError>;
