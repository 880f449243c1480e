//! User management backed by the identity provider.
//!
//! `UserService` is the seam the HTTP handlers call through. The default
//! implementation translates API models to provider representations and
//! back; handlers never see provider types.

use std::sync::Arc;

use async_trait::async_trait;
use itm_adapters::{CredentialRepresentation, IdentityAdapter, UserRepresentation};
use uuid::Uuid;

use crate::api::user::models::{UserCreateRequest, UserResponse};
use crate::errors::ApiError;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, request: UserCreateRequest) -> Result<(), ApiError>;

    async fn get_user_by_id(&self, id: Uuid) -> Result<UserResponse, ApiError>;
}

pub struct IdentityUserService {
    adapter: Arc<dyn IdentityAdapter>,
}

impl IdentityUserService {
    pub fn new(adapter: Arc<dyn IdentityAdapter>) -> Self {
        Self { adapter }
    }
}

impl From<UserCreateRequest> for UserRepresentation {
    fn from(request: UserCreateRequest) -> Self {
        UserRepresentation {
            id: None,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            enabled: true,
            credentials: vec![CredentialRepresentation::password(request.password)],
        }
    }
}

#[async_trait]
impl UserService for IdentityUserService {
    async fn create_user(&self, request: UserCreateRequest) -> Result<(), ApiError> {
        let user = UserRepresentation::from(request);
        self.adapter.create_user(&user).await?;
        Ok(())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<UserResponse, ApiError> {
        let user = self.adapter.get_user(id).await?;
        let roles = self.adapter.realm_roles(id).await?;
        let groups = self.adapter.groups(id).await?;

        Ok(UserResponse::new(
            user.first_name,
            user.last_name,
            user.email,
            roles.into_iter().map(|role| role.name).collect(),
            groups.into_iter().map(|group| group.name).collect(),
        ))
    }
}
