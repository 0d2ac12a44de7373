//! HTTP application wiring (route table → axum router + middleware pipeline).
//!
//! Layout:
//! - `routes/`: handlers plus the registration-time protection table
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses for expected failures

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_middleware};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use userhub_auth::{CredentialVerifier, TokenService};
use userhub_infra::UserStore;

use crate::middleware::{self, AuthState};

pub mod dto;
pub mod errors;
pub mod routes;

use routes::{Access, Route};

/// Compose the middleware pipeline around a route table.
///
/// Protection is decided here, once, at registration time: protected entries
/// get the bearer guard, public entries bypass it. The wraps then apply, from
/// outermost in: access logging, panic containment, the guard.
pub fn compose(
    table: Vec<Route>,
    tokens: Arc<TokenService>,
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn UserStore>,
) -> Router {
    let auth_state = AuthState {
        tokens: tokens.clone(),
    };

    let mut public = Router::new();
    let mut protected = Router::new();
    for route in table {
        match route.access {
            Access::Public => public = public.route(route.path, route.handlers),
            Access::Protected => protected = protected.route(route.path, route.handlers),
        }
    }

    let protected = protected.layer(axum_middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    // ServiceBuilder applies top-down: the access log observes everything,
    // containment runs before any response is finalized.
    public.merge(protected).layer(
        ServiceBuilder::new()
            .layer(axum_middleware::from_fn(middleware::access_log_middleware))
            .layer(CatchPanicLayer::custom(middleware::handle_panic))
            .layer(Extension(store))
            .layer(Extension(tokens))
            .layer(Extension(verifier)),
    )
}

/// Build the full application (public entrypoint used by `main.rs`).
pub fn build_app(
    tokens: Arc<TokenService>,
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn UserStore>,
) -> Router {
    compose(routes::route_table(), tokens, verifier, store)
}
