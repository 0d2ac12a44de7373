//! User CRUD handlers (protected; the guard runs before any of these).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use userhub_core::{DomainError, UserId};
use userhub_infra::UserStore;

use crate::app::dto::{CreateUserRequest, ListUsersQuery, UpdateUserRequest, UserResponse};
use crate::app::errors::ApiError;
use crate::context::AuthenticatedIdentity;

pub async fn list_users(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Query(query): Query<ListUsersQuery>,
) -> Json<Vec<UserResponse>> {
    let users = store
        .list(query.search.as_deref())
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Json(users)
}

pub async fn get_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    store
        .get(UserId::new(id))
        .map(UserResponse::from)
        .map(Json)
        .ok_or(ApiError::Domain(DomainError::NotFound))
}

pub async fn create_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let user = store.create(&body.name, &body.email)?;
    tracing::info!(principal = identity.principal(), user_id = user.id.as_u64(), "user created");

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    )
        .into_response())
}

pub async fn update_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    store.update(UserId::new(id), &body.name, &body.email)?;
    tracing::info!(principal = identity.principal(), user_id = id, "user updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    store.delete(UserId::new(id))?;
    tracing::info!(principal = identity.principal(), user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
