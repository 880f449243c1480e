//! Module for core business logic services.
//!
//! This module encapsulates the services the HTTP handlers delegate to,
//! such as user management backed by the identity provider.

pub mod user_service;

pub use user_service::{IdentityUserService, UserService};
