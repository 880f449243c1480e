//! Shared fixtures for the backend integration tests.
//!
//! Provides a mocked identity provider token endpoint, token acquisition
//! through the real `TokenClient`, substitutable collaborators for
//! `AppState`, and a helper that drives the router in-process.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use itm_adapters::{AccessToken, Credentials, Realm, TokenClient};
use itm_backend::api::user::models::{UserCreateRequest, UserResponse};
use itm_backend::auth::{AuthContext, AuthError, TokenVerifier};
use itm_backend::errors::ApiError;
use itm_backend::services::UserService;
use itm_backend::{app, AppState};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REALM: &str = "ITM";
pub const TOKEN_PATH: &str = "/auth/realms/ITM/protocol/openid-connect/token";
pub const CLIENT_ID: &str = "backend-gateway-client";
pub const CLIENT_SECRET: &str = "V36inROZmLSxRBAPWPwfAgMkSDorul0z";
pub const ISSUED_TOKEN: &str = "abc123";

pub fn user_credentials() -> Credentials {
    Credentials::password(CLIENT_ID, CLIENT_SECRET, "user", "user")
}

pub fn realm_for(server: &MockServer) -> Realm {
    Realm::new(format!("{}/auth", server.uri()), REALM)
}

/// Starts a provider whose token endpoint issues [`ISSUED_TOKEN`] for the
/// `user`/`user` password grant.
pub async fn identity_provider() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ISSUED_TOKEN,
            "token_type": "Bearer",
            "expires_in": 300
        })))
        .mount(&server)
        .await;
    server
}

/// Acquires a token for the test user; any failure aborts the test.
pub async fn acquire_token(server: &MockServer) -> AccessToken {
    let client = TokenClient::new(reqwest::Client::new(), &realm_for(server));
    match client.acquire_token(&user_credentials()).await {
        Ok(token) => token,
        Err(err) => panic!("Failed to get token: {err}"),
    }
}

/// `UserService` test double returning canned users and recording creates.
#[derive(Default)]
pub struct StubUserService {
    users: HashMap<Uuid, UserResponse>,
    created: Mutex<Vec<UserCreateRequest>>,
}

impl StubUserService {
    pub fn with_user(mut self, id: Uuid, user: UserResponse) -> Self {
        self.users.insert(id, user);
        self
    }

    pub fn created(&self) -> Vec<UserCreateRequest> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn create_user(&self, request: UserCreateRequest) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(request);
        Ok(())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<UserResponse, ApiError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))
    }
}

/// Maps known tokens to callers; unknown tokens are rejected.
#[derive(Default)]
pub struct StaticVerifier {
    callers: HashMap<String, AuthContext>,
}

impl StaticVerifier {
    pub fn with_caller(mut self, token: impl Into<String>, caller: AuthContext) -> Self {
        self.callers.insert(token.into(), caller);
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        self.callers
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

pub fn moderator(username: &str) -> AuthContext {
    AuthContext::new(username, ["ROLE_MODERATOR"])
}

pub fn test_app(users: Arc<StubUserService>, verifier: StaticVerifier) -> Router {
    app(AppState::new(users, Arc::new(verifier)))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

pub fn john_doe_json() -> &'static str {
    r#"{ "username": "john_doe", "firstName": "John", "lastName": "Doe", "email": "john.doe@example.com", "password": "password123" }"#
}
