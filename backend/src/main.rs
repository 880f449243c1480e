//! Main entry point for the ITM user gateway.
//!
//! This file loads configuration, initializes tracing, wires the identity
//! provider adapter into the application state, and serves the Axum router.

use std::sync::Arc;

use itm_adapters::{IdentityAdapter, KeycloakAdapter};
use itm_backend::auth::IntrospectionVerifier;
use itm_backend::config::Settings;
use itm_backend::services::IdentityUserService;
use itm_backend::{app, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    init_tracing(&settings.log_filter);

    tracing::info!(
        realm = %settings.identity.realm,
        base_url = %settings.identity.base_url,
        "using identity provider"
    );

    let adapter: Arc<dyn IdentityAdapter> = Arc::new(KeycloakAdapter::connect(
        settings.identity.realm(),
        settings.identity.admin_credentials(),
    ));
    let state = AppState::new(
        Arc::new(IdentityUserService::new(adapter.clone())),
        Arc::new(IntrospectionVerifier::new(adapter)),
    );

    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!(addr = %settings.listen_addr, "listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
