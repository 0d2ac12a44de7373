//! Middleware layers: access logging, error containment, bearer auth.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use userhub_auth::TokenService;

use crate::context::AuthenticatedIdentity;

/// Fixed client-facing message for rejected bearer tokens.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Token missing or invalid";

/// Fixed client-facing message for contained failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
}

/// Bearer-token guard applied to protected routes.
///
/// A missing or invalid token short-circuits with the fixed 401 body; the
/// handler is never invoked. The rejection sub-kind stays server-side.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        tracing::warn!("missing or malformed authorization header");
        return unauthorized();
    };

    match state.tokens.validate(token) {
        Ok(claims) => {
            req.extensions_mut()
                .insert(AuthenticatedIdentity::new(claims.sub));
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!(%err, "rejected bearer token");
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
    )
        .into_response()
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}

/// Entry/exit access logging.
///
/// Wraps the whole pipeline so the exit record carries the status actually
/// returned to the client, containment substitutions included.
pub async fn access_log_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    tracing::info!(%method, %path, "incoming request");

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(%method, %path, status, elapsed_ms, "outgoing response");

    response
}

/// Containment hook for panics escaping downstream layers.
///
/// Records the payload server-side and substitutes the fixed 500 body; the
/// client never sees failure internals. This must not fail itself — it only
/// formats and logs.
pub fn handle_panic(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(detail, "unhandled failure caught by containment layer");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
