//! Dashboard HTTP routes.
//!
//! Each action locks the dashboard for its whole duration, then answers with a
//! redirect: to the login screen when the action asked for one, otherwise back
//! to the dashboard.

mod positions;
mod session;

pub use positions::*;
pub use session::*;

use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::LOGIN_ROUTE;
use crate::AppState;

/// Route the dashboard is served from.
pub const DASHBOARD_ROUTE: &str = "/";

/// Redirect after an action, honoring any pending login redirect.
fn after_action(state: &AppState) -> Response {
    if state.redirect.take() {
        Redirect::to(LOGIN_ROUTE).into_response()
    } else {
        Redirect::to(DASHBOARD_ROUTE).into_response()
    }
}
