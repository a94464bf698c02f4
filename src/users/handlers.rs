use axum::{routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    users::{
        dto::{
            CreateUserRequest, DeleteUserRequest, MessageResponse, PublicUser, UpdateUserRequest,
            UserResponse, USER_NOT_FOUND,
        },
        extractors::{AppJson, DbSession},
        repo_types::User,
    },
};

/// Everything is mounted on `/users/` with the trailing slash; `/users` is
/// not routed and answers 404.
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/",
        post(create_user)
            .get(list_users)
            .put(update_user)
            .delete(delete_user),
    )
}

#[instrument(skip(session, payload))]
pub async fn create_user(
    mut session: DbSession,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let new_user = payload.validate().inspect_err(|_| {
        warn!("create rejected: name or age missing");
    })?;

    let mut tx = session.begin().await?;
    let user = User::insert(&mut tx, &new_user).await?;
    tx.commit().await?;

    info!(user_id = user.id, "user created");
    Ok(Json(UserResponse {
        message: "User created successfully!",
        user: user.into(),
    }))
}

#[instrument(skip(session))]
pub async fn list_users(mut session: DbSession) -> ApiResult<Json<Vec<PublicUser>>> {
    let users = User::list_active(&mut session).await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

/// Overwrites both `name` and `age`; inactive rows are editable too.
#[instrument(skip(session, payload), fields(user_id = ?payload.id))]
pub async fn update_user(
    mut session: DbSession,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let Some(id) = payload.id else {
        return Err(not_found(None));
    };

    // the UPDATE is the first statement so the write lock is taken up front
    let mut tx = session.begin().await?;
    let Some(user) =
        User::update_fields(&mut tx, id, payload.name.as_deref(), payload.age).await?
    else {
        return Err(not_found(Some(id)));
    };
    tx.commit().await?;

    info!(user_id = user.id, active = user.active, "user updated");
    Ok(Json(UserResponse {
        message: "User updated successfully!",
        user: user.into(),
    }))
}

/// Soft delete. Repeating it on an inactive row succeeds again.
#[instrument(skip(session, payload), fields(user_id = ?payload.id))]
pub async fn delete_user(
    mut session: DbSession,
    AppJson(payload): AppJson<DeleteUserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let Some(id) = payload.id else {
        return Err(not_found(None));
    };

    let mut tx = session.begin().await?;
    if !User::deactivate(&mut tx, id).await? {
        return Err(not_found(Some(id)));
    }
    tx.commit().await?;

    info!(user_id = id, "user deactivated");
    Ok(Json(MessageResponse {
        message: "User deleted successfully!",
    }))
}

fn not_found(id: Option<i64>) -> ApiError {
    warn!(?id, "user not found");
    ApiError::NotFound(USER_NOT_FOUND.into())
}
