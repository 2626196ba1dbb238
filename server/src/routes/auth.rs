//! Auth routes — form login and bearer-token extractors.

use axum::extract::{Form, FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::Json;
use serde::Deserialize;
use shared::{Role, TokenResponse, User};

use super::ApiError;
use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` value.
pub(crate) fn parse_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_bearer)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated administrator. Non-admin sessions are rejected with 403.
pub struct AdminUser {
    pub user: User,
}

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.user.role != Role::Admin {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(Self { user: auth.user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

/// `POST /token` — form-encoded login, returns a bearer token.
pub async fn token(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (_user, token) = auth_svc::login(&state.pool, &form.username, &form.password).await?;
    Ok(Json(TokenResponse { access_token: token, token_type: "bearer".to_owned() }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
