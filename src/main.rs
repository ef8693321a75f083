//! Team Dashboard
//!
//! A server-rendered CRUD screen for position records kept by a remote REST API.

mod api;
mod auth;
mod client;
mod config;
mod dashboard;
mod errors;
mod models;
mod view;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{FileSession, MemorySession, RedirectSlot, SessionStore};
use client::ResourceClient;
use config::Config;
use dashboard::Dashboard;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub session: Arc<dyn SessionStore>,
    pub redirect: Arc<RedirectSlot>,
}

impl AppState {
    /// Wire the session, navigator, client and dashboard together.
    pub fn new(
        config: &Config,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, errors::DashboardError> {
        let redirect = Arc::new(RedirectSlot::new());

        let client = match config.request_timeout {
            Some(timeout) => ResourceClient::with_timeout(
                timeout,
                config.api_base_url.clone(),
                session.clone(),
                redirect.clone(),
            )?,
            None => ResourceClient::new(
                config.api_base_url.clone(),
                session.clone(),
                redirect.clone(),
            ),
        };

        Ok(Self {
            dashboard: Arc::new(Mutex::new(Dashboard::new(client))),
            session,
            redirect,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Team Dashboard");
    tracing::info!("Positions API: {}", config.api_base_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Pick the token store
    let session: Arc<dyn SessionStore> = match &config.token_path {
        Some(path) => {
            let file = FileSession::new(path.clone());
            tracing::info!("Token file: {:?}", file.path());
            Arc::new(file)
        }
        None => Arc::new(MemorySession::default()),
    };

    if let Some(token) = &config.api_token {
        session.set_token(token)?;
    }

    if session.token().is_none() {
        tracing::warn!("No API token available yet; the dashboard will ask for one");
    }

    let state = AppState::new(&config, session)?;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::show_dashboard))
        .route("/positions", post(api::submit_position))
        .route("/positions/{id}/edit", post(api::edit_position))
        .route("/positions/{id}/delete", post(api::delete_position))
        .route("/cancel", post(api::cancel_edit))
        .route("/login", get(api::login_page).post(api::login_submit))
        .route("/logout", post(api::logout))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
