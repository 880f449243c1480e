//! Core `adapters` crate for abstracting identity provider interactions.
//!
//! This crate defines the `IdentityAdapter` trait, which outlines the user
//! and token operations the backend needs from an OIDC provider, and provides
//! the concrete Keycloak implementation together with the token endpoint
//! client.

pub mod errors;
pub mod keycloak;
pub mod models;
pub mod token;

use async_trait::async_trait;
use uuid::Uuid;

pub use errors::{AdapterError, AdapterResult};
pub use keycloak::KeycloakAdapter;
pub use models::{
    AccessToken, CredentialRepresentation, Credentials, GrantType, GroupRepresentation, Realm,
    RealmAccess, RoleRepresentation, TokenIntrospection, UserRepresentation,
};
pub use token::TokenClient;

/// User and token operations backed by an identity provider.
#[async_trait]
pub trait IdentityAdapter: Send + Sync {
    async fn create_user(&self, user: &UserRepresentation) -> AdapterResult<()>;

    async fn get_user(&self, id: Uuid) -> AdapterResult<UserRepresentation>;

    /// Realm roles mapped directly to the user, in provider order.
    async fn realm_roles(&self, id: Uuid) -> AdapterResult<Vec<RoleRepresentation>>;

    /// Groups the user belongs to, in provider order.
    async fn groups(&self, id: Uuid) -> AdapterResult<Vec<GroupRepresentation>>;

    async fn introspect(&self, token: &str) -> AdapterResult<TokenIntrospection>;
}
