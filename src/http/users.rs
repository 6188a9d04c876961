use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Json;

use super::decode_json;
use super::error::{ApiError, ApiResult};
use super::path::id_from_path;
use crate::directory::UserDirectory;
use crate::model::{User, UserCreate, UserId};

pub async fn list_users(State(directory): State<UserDirectory>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(directory.list().await?))
}

/// `GET /users/...`: whatever follows the prefix, extra segments included, is scanned for
/// the id.
pub async fn get_user(
    State(directory): State<UserDirectory>,
    uri: Uri,
) -> ApiResult<Json<User>> {
    lookup_user(&directory, id_from_path(uri.path(), "/users/")).await
}

pub async fn create_user(
    State(directory): State<UserDirectory>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<User>)> {
    let params: UserCreate = decode_json(&body)?;
    let user = directory.create(params).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn lookup_user(directory: &UserDirectory, id: u64) -> ApiResult<Json<User>> {
    directory
        .get(UserId::from(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("user not found"))
}
