//! Bearer token verification.
//!
//! `TokenVerifier` turns a raw bearer token into an `AuthContext`. The
//! production implementation asks the identity provider to introspect the
//! token; tests substitute their own verifier.

use std::sync::Arc;

use async_trait::async_trait;
use itm_adapters::IdentityAdapter;

use super::errors::AuthError;
use super::models::AuthContext;

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthContext, AuthError>;
}

pub struct IntrospectionVerifier {
    adapter: Arc<dyn IdentityAdapter>,
}

impl IntrospectionVerifier {
    pub fn new(adapter: Arc<dyn IdentityAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl TokenVerifier for IntrospectionVerifier {
    async fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        let introspection = self.adapter.introspect(token).await?;
        if !introspection.active {
            return Err(AuthError::InvalidToken);
        }

        let username = introspection
            .username
            .clone()
            .ok_or(AuthError::InvalidToken)?;

        tracing::debug!(username = %username, roles = ?introspection.roles(), "token verified");
        Ok(AuthContext::new(username, introspection.roles().iter().cloned()))
    }
}
