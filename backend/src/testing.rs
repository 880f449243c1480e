//! In-memory identity provider for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use itm_adapters::{
    AdapterError, AdapterResult, GroupRepresentation, IdentityAdapter, RoleRepresentation,
    TokenIntrospection, UserRepresentation,
};
use uuid::Uuid;

/// Without an introspection result configured, `introspect` fails the way a
/// provider rejecting the service credentials would.
#[derive(Default)]
pub(crate) struct FakeIdentityAdapter {
    users: HashMap<Uuid, UserRepresentation>,
    roles: Vec<RoleRepresentation>,
    groups: Vec<GroupRepresentation>,
    introspection: Option<TokenIntrospection>,
    reject_creates: bool,
    created: Mutex<Vec<UserRepresentation>>,
}

impl FakeIdentityAdapter {
    pub(crate) fn with_user(mut self, id: Uuid, user: UserRepresentation) -> Self {
        self.users.insert(id, user);
        self
    }

    pub(crate) fn with_roles(mut self, roles: impl IntoIterator<Item = RoleRepresentation>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub(crate) fn with_groups(
        mut self,
        groups: impl IntoIterator<Item = GroupRepresentation>,
    ) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    pub(crate) fn with_introspection(mut self, introspection: TokenIntrospection) -> Self {
        self.introspection = Some(introspection);
        self
    }

    pub(crate) fn rejecting_creates(mut self) -> Self {
        self.reject_creates = true;
        self
    }

    pub(crate) fn created(&self) -> Vec<UserRepresentation> {
        self.created.lock().unwrap().clone()
    }

    fn known(&self, id: Uuid) -> AdapterResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(AdapterError::NotFound(format!("user {id}")))
        }
    }
}

#[async_trait]
impl IdentityAdapter for FakeIdentityAdapter {
    async fn create_user(&self, user: &UserRepresentation) -> AdapterResult<()> {
        if self.reject_creates {
            return Err(AdapterError::Conflict(format!("user {}", user.username)));
        }
        self.created.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> AdapterResult<UserRepresentation> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| AdapterError::NotFound(format!("user {id}")))
    }

    async fn realm_roles(&self, id: Uuid) -> AdapterResult<Vec<RoleRepresentation>> {
        self.known(id)?;
        Ok(self.roles.clone())
    }

    async fn groups(&self, id: Uuid) -> AdapterResult<Vec<GroupRepresentation>> {
        self.known(id)?;
        Ok(self.groups.clone())
    }

    async fn introspect(&self, _token: &str) -> AdapterResult<TokenIntrospection> {
        self.introspection
            .clone()
            .ok_or(AdapterError::Auth { status: 401 })
    }
}
