//! Dashboard page and position actions.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use super::after_action;
use crate::auth::LOGIN_ROUTE;
use crate::models::PositionForm;
use crate::view::render_dashboard;
use crate::AppState;

/// GET / - Render the dashboard, mounting it on first view.
pub async fn show_dashboard(State(state): State<AppState>) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.mount().await;

    if state.redirect.take() {
        return Redirect::to(LOGIN_ROUTE).into_response();
    }

    Html(render_dashboard(&dashboard)).into_response()
}

/// POST /positions - Create or update from the submitted form.
pub async fn submit_position(
    State(state): State<AppState>,
    Form(form): Form<PositionForm>,
) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.set_form(form);
    dashboard.submit().await;
    drop(dashboard);

    after_action(&state)
}

/// POST /positions/:id/edit - Load a record into the form.
pub async fn edit_position(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut dashboard = state.dashboard.lock().await;

    let position = dashboard.find(id).cloned();
    match position {
        Some(position) => dashboard.start_edit(&position),
        None => tracing::warn!("Edit requested for unknown position {}", id),
    }
    drop(dashboard);

    after_action(&state)
}

/// POST /positions/:id/delete - Delete a record.
pub async fn delete_position(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.delete(Some(id)).await;
    drop(dashboard);

    after_action(&state)
}

/// POST /cancel - Leave edit mode.
pub async fn cancel_edit(State(state): State<AppState>) -> Response {
    state.dashboard.lock().await.cancel();
    after_action(&state)
}
