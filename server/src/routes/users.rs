//! User routes — registration, current user, password change.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use shared::{ChangePassword, RegisterUser, User};

use super::ApiError;
use super::auth::AuthUser;
use crate::services::auth as auth_svc;
use crate::state::AppState;

/// `POST /users/` — create an account. Duplicate usernames are a 400.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if body.username.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "username and password are required"));
    }
    let user = auth_svc::register(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/me` — return the authenticated user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `PUT /users/me/password` — change the caller's password.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ChangePassword>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.new_password.is_empty() {
        return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "new password must not be empty"));
    }
    auth_svc::change_password(&state.pool, auth.user.id, &body.old_password, &body.new_password).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
