//! Defines the HTTP routes for user management.
//!
//! Every route requires a verified bearer token. Reading a user and the
//! identity echo additionally require the `MODERATOR` role.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers::{create_user, get_user, hello};
use crate::auth::{authenticate, require_moderator};
use crate::AppState;

pub fn user_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_user))
        // Registered before /:id so "hello" is not parsed as an id.
        .route(
            "/hello",
            get(hello).route_layer(middleware::from_fn(require_moderator)),
        )
        .route(
            "/:id",
            get(get_user).route_layer(middleware::from_fn(require_moderator)),
        )
        .layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            authenticate,
        ))
        .with_state(state)
}
