//! Session authentication for the dashboard.
//!
//! Staff sign in with a username and password from the configuration and get
//! a signed session cookie (see [`crate::session`]). Every privileged route
//! sits behind [`require_session`],
//! which attaches a [`Session`] to the request so handlers can prove a session
//! exists before touching the admin datastore.

use axum::{
    Form,
    extract::{Query, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::DashboardError;
use crate::session::SessionSigner;
use crate::state::AppState;
use crate::templates::escape;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "mun_session";

/// Username attached to requests when anonymous access is enabled.
const ANONYMOUS: &str = "anonymous";

/// An established session, inserted into request extensions by the middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

/// Reject requests without a valid session.
///
/// Browser navigation is redirected to the login page; API and HTMX requests
/// get a 401.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(session) = current_session(&state, request.headers()) {
        request.extensions_mut().insert(session);
        return next.run(request).await;
    }

    let path = request.uri().path();
    if path.starts_with("/api/") || request.headers().contains_key("hx-request") {
        tracing::debug!(%path, "Rejected request without session");
        return DashboardError::AuthenticationFailed.into_response();
    }

    let redirect_to = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    Redirect::to(&format!("/login?redirect={}", urlencoding::encode(redirect_to))).into_response()
}

/// Session carried by a request, if any. Public routes use this directly to
/// adapt what they render; privileged routes go through [`require_session`].
pub fn current_session(state: &AppState, headers: &HeaderMap) -> Option<Session> {
    let auth = state.auth();
    let username = if auth.allow_anonymous {
        Some(ANONYMOUS.to_string())
    } else {
        session_from_headers(headers, state.sessions()).filter(|name| auth.has_user(name))
    };
    username.map(|username| Session { username })
}

fn session_from_headers(headers: &HeaderMap, sessions: &SessionSigner) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(extract_session_cookie)
        .and_then(|token| sessions.verify(&token))
}

/// Extract session cookie value from cookie header
fn extract_session_cookie(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        cookie
            .trim()
            .strip_prefix(&format!("{SESSION_COOKIE_NAME}="))
            .map(str::to_string)
    })
}

/// Login page query parameters
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Handler for the login page (GET)
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(login_page_template(
        query.redirect.as_deref(),
        query.error.is_some(),
    ))
}

/// Handler for login form submission (POST)
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, DashboardError> {
    match state.auth().validate_basic_auth(&form.username, &form.password) {
        Some(username) => {
            tracing::info!(%username, "Staff signed in");
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                SESSION_COOKIE_NAME,
                state.sessions().issue(&username)?,
                state.sessions().ttl_seconds()
            );
            let redirect_url = form
                .redirect
                .filter(|r| r.starts_with('/') && !r.starts_with("//"))
                .unwrap_or_else(|| "/".to_string());

            Ok(([(header::SET_COOKIE, cookie)], Redirect::to(&redirect_url)).into_response())
        }
        None => {
            tracing::warn!(username = %form.username, "Failed sign-in");
            let redirect = form
                .redirect
                .map(|r| format!("&redirect={}", urlencoding::encode(&r)))
                .unwrap_or_default();
            Ok(Redirect::to(&format!("/login?error=invalid{redirect}")).into_response())
        }
    }
}

/// Handler for logout
pub async fn logout() -> Response {
    let cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}

fn login_page_template(redirect: Option<&str>, failed: bool) -> String {
    let error_html = if failed {
        r##"<div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-lg text-red-700">
            <i class="fas fa-exclamation-circle"></i> Invalid username or password.
        </div>"##
    } else {
        ""
    };

    let redirect_input = redirect
        .map(|r| format!(r#"<input type="hidden" name="redirect" value="{}">"#, escape(r)))
        .unwrap_or_default();

    let form = format!(
        r##"<div class="max-w-md mx-auto bg-white dark:bg-gray-800 rounded-2xl shadow-xl p-8">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-1">Staff sign in</h2>
            <p class="text-gray-500 dark:text-gray-400 mb-6">Use your secretariat account to access attendance.</p>
            {error_html}
            <form method="POST" action="/login" class="space-y-5">
                {redirect_input}
                {username}
                {password}
                <button type="submit" class="w-full py-3 bg-primary-600 hover:bg-primary-700 text-white font-medium rounded-lg">
                    <i class="fas fa-sign-in-alt"></i> Sign In
                </button>
            </form>
        </div>"##,
        username = crate::templates::input("username", "Username", "text", "", "Username"),
        password = crate::templates::input("password", "Password", "password", "", "Password"),
    );

    crate::templates::layout("Sign in", &form)
}
