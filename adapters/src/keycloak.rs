//! Keycloak implementation of the [`IdentityAdapter`] trait.
//!
//! Admin calls authenticate with a token acquired from the service account
//! credentials right before the call. Tokens are not kept between calls.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::{AdapterError, AdapterResult};
use crate::models::{
    AccessToken, Credentials, GroupRepresentation, Realm, RoleRepresentation,
    TokenIntrospection, UserRepresentation,
};
use crate::token::TokenClient;
use crate::IdentityAdapter;

pub struct KeycloakAdapter {
    http: Client,
    realm: Realm,
    tokens: TokenClient,
    admin: Credentials,
}

impl KeycloakAdapter {
    pub fn new(http: Client, realm: Realm, admin: Credentials) -> Self {
        let tokens = TokenClient::new(http.clone(), &realm);
        Self {
            http,
            realm,
            tokens,
            admin,
        }
    }

    /// Uses a fresh `reqwest::Client` with default settings.
    pub fn connect(realm: Realm, admin: Credentials) -> Self {
        Self::new(Client::new(), realm, admin)
    }

    async fn admin_token(&self) -> AdapterResult<AccessToken> {
        self.tokens.acquire_token(&self.admin).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        operation: &'static str,
        resource: String,
    ) -> AdapterResult<T> {
        let token = self.admin_token().await?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let response = check_status(response, operation, resource)?;
        response
            .json()
            .await
            .map_err(|err| AdapterError::Decode(err.to_string()))
    }
}

/// Maps admin API status codes onto [`AdapterError`].
fn check_status(
    response: Response,
    operation: &'static str,
    resource: String,
) -> AdapterResult<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(AdapterError::NotFound(resource)),
        StatusCode::CONFLICT => Err(AdapterError::Conflict(resource)),
        status => {
            tracing::warn!(operation, status = status.as_u16(), "admin API call failed");
            Err(AdapterError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl IdentityAdapter for KeycloakAdapter {
    async fn create_user(&self, user: &UserRepresentation) -> AdapterResult<()> {
        let token = self.admin_token().await?;
        let response = self
            .http
            .post(self.realm.users_url())
            .bearer_auth(token.as_str())
            .json(user)
            .send()
            .await?;

        check_status(response, "create user", format!("user {}", user.username))?;
        tracing::info!(realm = self.realm.name(), username = %user.username, "user created");
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> AdapterResult<UserRepresentation> {
        self.get_json(&self.realm.user_url(id), "get user", format!("user {id}"))
            .await
    }

    async fn realm_roles(&self, id: Uuid) -> AdapterResult<Vec<RoleRepresentation>> {
        let url = format!("{}/role-mappings/realm", self.realm.user_url(id));
        self.get_json(&url, "get realm roles", format!("user {id}"))
            .await
    }

    async fn groups(&self, id: Uuid) -> AdapterResult<Vec<GroupRepresentation>> {
        let url = format!("{}/groups", self.realm.user_url(id));
        self.get_json(&url, "get groups", format!("user {id}")).await
    }

    async fn introspect(&self, token: &str) -> AdapterResult<TokenIntrospection> {
        self.tokens.introspect(token, &self.admin).await
    }
}
