//! Admin routes — summary, user management, rates, spreadsheet export.

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use shared::{AnnualRate, Summary, User};

use super::ApiError;
use super::auth::AdminUser;
use crate::services::{admin as admin_svc, export};
use crate::state::AppState;

/// `GET /admin/summary` — aggregate snapshot for the admin dashboard.
pub async fn summary(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<Summary>, ApiError> {
    Ok(Json(admin_svc::summary(&state.pool).await?))
}

/// `GET /admin/users` — every account, ordered by username.
pub async fn list_users(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(admin_svc::list_users(&state.pool).await?))
}

/// `DELETE /admin/users/{id}` — remove a user; their entries cascade.
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    admin_svc::delete_user(&state.pool, user_id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /admin/rates` — configured €/hour rates, ascending year.
pub async fn list_rates(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<AnnualRate>>, ApiError> {
    Ok(Json(admin_svc::list_rates(&state.pool).await?))
}

/// `POST /admin/rates` — create or update the rate for one year.
pub async fn upsert_rate(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<AnnualRate>,
) -> Result<Json<AnnualRate>, ApiError> {
    Ok(Json(admin_svc::upsert_rate(&state.pool, body).await?))
}

// =============================================================================
// EXPORT
// =============================================================================

fn spreadsheet_response(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (CONTENT_TYPE, export::EXPORT_CONTENT_TYPE.to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// `GET /admin/export` — full dataset as an XLSX download.
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> Result<Response, ApiError> {
    let rows = export::fetch_rows(&state.pool, None).await?;
    let bytes = export::build_workbook(&rows)?;
    Ok(spreadsheet_response(bytes, &export::export_filename(None)))
}

#[derive(Deserialize)]
pub struct MonthExportQuery {
    pub year: i32,
    pub month: u8,
}

/// `GET /export/month?year=&month=` — one calendar month as an XLSX download.
pub async fn export_month(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<MonthExportQuery>,
) -> Result<Response, ApiError> {
    let month = Some((query.year, query.month));
    let rows = export::fetch_rows(&state.pool, month).await?;
    let bytes = export::build_workbook(&rows)?;
    Ok(spreadsheet_response(bytes, &export::export_filename(month)))
}
