//! Login: credential check → signed bearer token.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use userhub_auth::{CredentialVerifier, TokenService};

use crate::app::dto::{LoginRequest, LoginResponse};
use crate::app::errors::json_error;

/// `POST /login` (public).
///
/// Mismatched credentials get a bare 401; a signing failure surfaces as a
/// 500 with the error message.
pub async fn login(
    Extension(tokens): Extension<Arc<TokenService>>,
    Extension(verifier): Extension<Arc<dyn CredentialVerifier>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    if !verifier.verify(&body.username, &body.password) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match tokens.issue(&body.username) {
        Ok(token) => Json(LoginResponse { token }).into_response(),
        Err(err) => {
            tracing::error!(%err, "token issuance failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
