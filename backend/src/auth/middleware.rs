//! Middleware for protecting authenticated routes and handling authorization.
//!
//! `authenticate` validates the bearer token and stores the resulting
//! `AuthContext` in the request extensions; `require_role` and its
//! per-role wrappers reject callers lacking a role claim.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use super::errors::AuthError;
use super::models::{AuthContext, Role};
use super::service::TokenVerifier;

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::InvalidToken)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return Err(AuthError::InvalidToken);
    }
    Ok(token)
}

pub async fn authenticate(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())?.to_owned();
    let caller = verifier.verify(&token).await?;

    tracing::debug!(username = %caller.username(), "request authenticated");
    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

/// Requires `authenticate` to have run earlier in the stack.
pub async fn require_role(role: Role, request: Request, next: Next) -> Result<Response, AuthError> {
    let caller = request
        .extensions()
        .get::<AuthContext>()
        .ok_or(AuthError::MissingToken)?;

    if !caller.has_role(role) {
        tracing::warn!(
            username = %caller.username(),
            roles = ?caller.roles(),
            required = %role,
            "access denied"
        );
        return Err(AuthError::MissingRole(role));
    }

    Ok(next.run(request).await)
}

pub async fn require_moderator(request: Request, next: Next) -> Result<Response, AuthError> {
    require_role(Role::Moderator, request, next).await
}
