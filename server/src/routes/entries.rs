//! Work-entry routes — CRUD plus the monthly stats projection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use shared::{MonthlyStat, WorkEntry, WorkEntryPayload};
use time::OffsetDateTime;

use super::ApiError;
use super::auth::AuthUser;
use crate::services::entry;
use crate::state::AppState;

fn today() -> time::Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Deserialize)]
pub struct EntriesQuery {
    pub year: Option<i32>,
    pub month: Option<u8>,
}

/// `GET /entries/?year=&month=` — the caller's entries, newest date first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<Vec<WorkEntry>>, ApiError> {
    let entries = entry::list_entries(&state.pool, auth.user.id, query.year, query.month).await?;
    Ok(Json(entries))
}

/// `POST /entries/` — log a new entry for the caller.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<WorkEntryPayload>,
) -> Result<(StatusCode, Json<WorkEntry>), ApiError> {
    let created = entry::create_entry(&state.pool, auth.user.id, &payload, today()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /entries/{id}` — replace an owned entry.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<i64>,
    Json(payload): Json<WorkEntryPayload>,
) -> Result<Json<WorkEntry>, ApiError> {
    let updated = entry::update_entry(&state.pool, auth.user.id, entry_id, &payload, today()).await?;
    Ok(Json(updated))
}

/// `DELETE /entries/{id}` — delete an owned entry; missing ids are a 404.
pub async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    entry::delete_entry(&state.pool, auth.user.id, entry_id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /entries/stats/monthly` — six months of hours/euros, oldest first.
pub async fn stats_monthly(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MonthlyStat>>, ApiError> {
    let stats = entry::monthly_stats(&state.pool, auth.user.id, today()).await?;
    Ok(Json(stats))
}
