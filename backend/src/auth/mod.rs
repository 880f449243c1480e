//! Authentication module for bearer tokens and role-based access control.
//!
//! This module provides the public interface for verifying bearer tokens
//! issued by the identity provider, the authenticated caller model, and the
//! middleware that gates routes on role claims.

pub mod errors;
pub mod middleware;
pub mod models;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use service::*;
