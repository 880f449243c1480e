//! Module for user management API endpoints.
//!
//! This module exposes creating a user in the identity provider, reading a
//! user with its roles and groups, and echoing the authenticated caller.

pub mod handlers;
pub mod models;
pub mod routes;
