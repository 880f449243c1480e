//! ITM user gateway backend.
//!
//! An Axum application exposing user management endpoints under
//! `/api/users`. Identity storage and authentication are delegated to an
//! OIDC provider through the `itm-adapters` crate; the router receives its
//! collaborators through [`AppState`] so tests can substitute them.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use axum::{routing::get, Router};

use auth::TokenVerifier;
use services::UserService;

/// Collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserService>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { users, verifier }
    }
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/users", api::user::routes::user_router(state))
        .layer(middleware::trace_layer())
}

async fn root_handler() -> &'static str {
    "Welcome to the ITM user gateway!"
}
