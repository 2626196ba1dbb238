//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST endpoints under a single Axum router with a
//! permissive CORS layer; the SPA is served separately (Trunk dev server or
//! static hosting) and talks to this API with a bearer token.

pub mod admin;
pub mod auth;
pub mod entries;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post, put};
use shared::ApiDetail;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::admin::AdminError;
use crate::services::auth::AuthError;
use crate::services::entry::EntryError;
use crate::services::export::ExportError;
use crate::state::AppState;

// =============================================================================
// ERROR BODY
// =============================================================================

/// Error response carrying the API's `{"detail": "..."}` body shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiDetail { detail: self.detail })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "Incorrect username or password")
            }
            AuthError::UsernameTaken => {
                Self::new(StatusCode::BAD_REQUEST, "Username already registered")
            }
            AuthError::WrongOldPassword => {
                Self::new(StatusCode::BAD_REQUEST, "Old password is incorrect")
            }
            AuthError::Db(e) => {
                tracing::error!(error = %e, "auth database error");
                Self::internal()
            }
        }
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Entry not found"),
            EntryError::Invalid(reason) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, reason),
            EntryError::Database(e) => {
                tracing::error!(error = %e, "entry database error");
                Self::internal()
            }
        }
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::UserNotFound(_) => Self::new(StatusCode::NOT_FOUND, "User not found"),
            AdminError::Database(e) => {
                tracing::error!(error = %e, "admin database error");
                Self::internal()
            }
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::InvalidMonth => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid export month")
            }
            ExportError::Workbook(e) => {
                tracing::error!(error = %e, "workbook build failed");
                Self::internal()
            }
            ExportError::Database(e) => {
                tracing::error!(error = %e, "export database error");
                Self::internal()
            }
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router with all API routes.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/token", post(auth::token))
        .route("/users/", post(users::register))
        .route("/users/me", get(users::me))
        .route("/users/me/password", put(users::change_password))
        .route("/entries/", get(entries::list).post(entries::create))
        .route(
            "/entries/{id}",
            put(entries::update).delete(entries::delete_entry),
        )
        .route("/entries/stats/monthly", get(entries::stats_monthly))
        .route("/admin/summary", get(admin::summary))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", delete(admin::delete_user))
        .route("/admin/rates", get(admin::list_rates).post(admin::upsert_rate))
        .route("/admin/export", get(admin::export))
        .route("/export/month", get(admin::export_month))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers;

    #[tokio::test]
    async fn router_builds_without_route_conflicts() {
        // Axum panics at router construction time on conflicting routes.
        let _ = app(test_helpers::test_app_state());
    }

    #[test]
    fn api_error_carries_detail_body() {
        let err = ApiError::new(StatusCode::BAD_REQUEST, "Username already registered");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn entry_not_found_maps_to_404() {
        let err: ApiError = EntryError::NotFound(42).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn entry_validation_maps_to_422() {
        let err: ApiError = EntryError::Invalid("amount must be a positive number of hours").into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn login_failure_maps_to_401_with_detail_message() {
        let err: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.detail, "Incorrect username or password");
    }
}
