//! Route definitions for the dashboard.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handlers::{self, api};
use crate::state::AppState;

/// Create the dashboard router.
///
/// Public routes (about, login, health, lookups, the staff shell, assets) are
/// reachable without a session. Everything that reads or writes the admin datastore sits behind
/// [`auth::require_session`].
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(handlers::home))
        .route("/participants", get(handlers::participants))
        .route(
            "/participants/{id}/attendance",
            post(handlers::set_attendance),
        )
        .route("/staff/members", get(handlers::staff_members))
        .route("/api/participants", get(api::participants))
        .route("/api/summary", get(api::summary))
        .route("/api/staff", get(api::staff))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/about", get(handlers::about))
        .route("/staff", get(handlers::staff))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .route("/api/lookups", get(api::lookups))
        .merge(protected)
        .nest_service("/assets", ServeDir::new(state.assets_dir()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
