//! OAuth2 token endpoint client.
//!
//! Exchanges [`Credentials`] for an [`AccessToken`] and introspects bearer
//! tokens presented to the backend. Every call is a single POST; nothing is
//! retried or cached.

use reqwest::Client;
use serde_json::Value;

use crate::errors::{AdapterError, AdapterResult};
use crate::models::{AccessToken, Credentials, Realm, TokenIntrospection};

#[derive(Debug, Clone)]
pub struct TokenClient {
    http: Client,
    token_url: String,
    introspection_url: String,
}

impl TokenClient {
    pub fn new(http: Client, realm: &Realm) -> Self {
        Self {
            http,
            token_url: realm.token_url(),
            introspection_url: realm.introspection_url(),
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Runs the grant described by `credentials` and returns the issued token.
    ///
    /// A 2xx body without an `access_token` field yields an empty token rather
    /// than an error; callers that need a usable token must check
    /// [`AccessToken::is_empty`].
    pub async fn acquire_token(&self, credentials: &Credentials) -> AdapterResult<AccessToken> {
        tracing::debug!(
            client_id = %credentials.client_id,
            grant_type = ?credentials.grant_type,
            "requesting access token"
        );

        let response = self
            .http
            .post(&self.token_url)
            .form(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token endpoint rejected credentials");
            return Err(AdapterError::Auth {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let root: Value =
            serde_json::from_str(&body).map_err(|err| AdapterError::Decode(err.to_string()))?;

        let token = access_token_text(&root);
        if token.is_empty() {
            tracing::warn!("token response carried no access_token");
        }
        Ok(AccessToken::new(token))
    }

    /// Asks the provider whether `token` is active and who it belongs to.
    pub async fn introspect(
        &self,
        token: &str,
        client: &Credentials,
    ) -> AdapterResult<TokenIntrospection> {
        let form = [
            ("token", token),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.introspection_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::Auth {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| AdapterError::Decode(err.to_string()))
    }
}

/// Text of the `access_token` field: strings as-is, other scalars (null
/// included) rendered, absent fields and containers empty.
fn access_token_text(root: &Value) -> String {
    match root.get("access_token") {
        Some(Value::String(token)) => token.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => "null".to_string(),
        _ => String::new(),
    }
}
