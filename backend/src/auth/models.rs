//! Data structures for authenticated callers.
//!
//! This module defines the roles the API gates on and the `AuthContext`
//! produced by bearer token verification, which handlers receive explicitly
//! through request extensions.

use std::fmt;

/// Realm roles the API knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Moderator => "MODERATOR",
            Role::Admin => "ADMIN",
        }
    }

    /// Whether a raw role claim names this role. Case is ignored and an
    /// optional `ROLE_` prefix is stripped.
    pub fn matches(&self, claim: &str) -> bool {
        let name = match claim.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ROLE_") => &claim[5..],
            _ => claim,
        };
        name.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller behind a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    username: String,
    roles: Vec<String>,
}

impl AuthContext {
    pub fn new<I, S>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|claim| role.matches(claim))
    }
}
