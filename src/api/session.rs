//! Login and logout endpoints.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use super::{after_action, DASHBOARD_ROUTE};
use crate::view::render_login;
use crate::AppState;

/// Login page query parameters
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub error: Option<String>,
}

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

/// GET /login - Token entry page.
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(render_login(query.error.as_deref()))
}

/// POST /login - Store the token and return to the dashboard.
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let token = form.token.trim();
    if token.is_empty() {
        return Redirect::to("/login?error=missing").into_response();
    }

    if let Err(e) = state.session.set_token(token) {
        tracing::error!("Failed to store token: {}", e);
        return Redirect::to("/login?error=store").into_response();
    }

    let mut dashboard = state.dashboard.lock().await;
    dashboard.unmount();
    // A redirect requested before this login is stale
    state.redirect.take();
    drop(dashboard);

    tracing::info!("Session started");
    Redirect::to(DASHBOARD_ROUTE).into_response()
}

/// POST /logout - End the session.
pub async fn logout(State(state): State<AppState>) -> Response {
    state.dashboard.lock().await.logout();
    after_action(&state)
}
