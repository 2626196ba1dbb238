//! REST API helpers for communicating with the server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the bearer token on
//! every authenticated request. Non-browser builds get stubs returning
//! `None`/error so the crate compiles and tests run natively.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error strings
//! prefer the server's `{"detail": ...}` body and fall back to a generic
//! "<what> failed: <status>" message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use shared::{
    AnnualRate, ChangePassword, MonthlyStat, Summary, TokenResponse, User, WorkEntry,
    WorkEntryPayload,
};

#[cfg(any(test, feature = "csr"))]
use std::fmt::Write;

// =============================================================================
// PURE HELPERS (testable without a browser)
// =============================================================================

#[cfg(any(test, feature = "csr"))]
pub(crate) fn url_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn login_form_body(username: &str, password: &str) -> String {
    format!("username={}&password={}", url_encode(username), url_encode(password))
}

#[cfg(feature = "csr")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn entries_endpoint(year: Option<i32>, month: Option<u8>) -> String {
    match (year, month) {
        (Some(y), Some(m)) => format!("/entries/?year={y}&month={m}"),
        (Some(y), None) => format!("/entries/?year={y}"),
        _ => "/entries/".to_owned(),
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn entry_endpoint(id: i64) -> String {
    format!("/entries/{id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn admin_user_endpoint(id: i64) -> String {
    format!("/admin/users/{id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn month_export_endpoint(year: i32, month: u8) -> String {
    format!("/export/month?year={year}&month={month}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

// =============================================================================
// TRANSPORT (browser only)
// =============================================================================

#[cfg(feature = "csr")]
async fn error_detail(resp: gloo_net::http::Response, what: &str) -> String {
    let status = resp.status();
    match resp.json::<shared::ApiDetail>().await {
        Ok(body) if !body.detail.is_empty() => body.detail,
        _ => request_failed_message(what, status),
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, token: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, what).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
async fn post_json<B, T>(url: &str, token: &str, body: &B, what: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, what).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
async fn put_json<B, T>(url: &str, token: &str, body: &B, what: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::put(url)
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, what).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
async fn delete_req(url: &str, token: &str, what: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, what).await);
    }
    Ok(())
}

#[cfg(feature = "csr")]
async fn fetch_binary(url: &str, token: &str, what: &str) -> Result<Vec<u8>, String> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_detail(resp, what).await);
    }
    resp.binary().await.map_err(|e| e.to_string())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /token` — form-encoded login. Returns the bearer token envelope.
///
/// # Errors
///
/// Returns the server's `detail` message (e.g. wrong credentials) or a
/// transport error string.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/token")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(username, password))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp, "login").await);
        }
        resp.json::<TokenResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /users/me` — resolve the bearer token to a user.
/// Returns `None` for a missing/expired session or outside the browser.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "csr")]
    {
        get_json::<User>("/users/me", token, "session").await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        None
    }
}

/// `PUT /users/me/password` — change the caller's password.
///
/// # Errors
///
/// Returns the server's `detail` (e.g. wrong old password) or a transport
/// error string.
pub async fn change_password(token: &str, old_password: &str, new_password: &str) -> Result<(), String> {
    let body = ChangePassword {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let _: serde_json::Value =
            put_json("/users/me/password", token, &body, "password change").await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, body);
        Err("not available outside the browser".to_owned())
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// `GET /entries/?year=&month=` — the caller's entries.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn list_entries(token: &str, year: Option<i32>, month: Option<u8>) -> Result<Vec<WorkEntry>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(&entries_endpoint(year, month), token, "entries").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, year, month);
        Err("not available outside the browser".to_owned())
    }
}

/// `POST /entries/` — log a new entry.
///
/// # Errors
///
/// Returns an error string if the request fails or validation rejects it.
pub async fn create_entry(token: &str, payload: &WorkEntryPayload) -> Result<WorkEntry, String> {
    #[cfg(feature = "csr")]
    {
        post_json("/entries/", token, payload, "save entry").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err("not available outside the browser".to_owned())
    }
}

/// `PUT /entries/{id}` — replace an owned entry.
///
/// # Errors
///
/// Returns an error string if the request fails or the entry is gone.
pub async fn update_entry(token: &str, id: i64, payload: &WorkEntryPayload) -> Result<WorkEntry, String> {
    #[cfg(feature = "csr")]
    {
        put_json(&entry_endpoint(id), token, payload, "update entry").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err("not available outside the browser".to_owned())
    }
}

/// `DELETE /entries/{id}` — delete an owned entry.
///
/// # Errors
///
/// Returns an error string if the request fails; deleting an id that is
/// already gone surfaces the server's 404.
pub async fn delete_entry(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        delete_req(&entry_endpoint(id), token, "delete entry").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /entries/stats/monthly` — six months of hours/euros for charting.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_monthly_stats(token: &str) -> Result<Vec<MonthlyStat>, String> {
    #[cfg(feature = "csr")]
    {
        get_json("/entries/stats/monthly", token, "stats").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// `GET /admin/summary` — aggregate snapshot.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_summary(token: &str) -> Result<Summary, String> {
    #[cfg(feature = "csr")]
    {
        get_json("/admin/summary", token, "summary").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /admin/users` — every account.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_users(token: &str) -> Result<Vec<User>, String> {
    #[cfg(feature = "csr")]
    {
        get_json("/admin/users", token, "users").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

/// `DELETE /admin/users/{id}` — remove an account and its entries.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_user(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        delete_req(&admin_user_endpoint(id), token, "delete user").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /admin/rates` — configured €/hour rates.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_rates(token: &str) -> Result<Vec<AnnualRate>, String> {
    #[cfg(feature = "csr")]
    {
        get_json("/admin/rates", token, "rates").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

/// `POST /admin/rates` — create or update one year's rate.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn save_rate(token: &str, rate: AnnualRate) -> Result<AnnualRate, String> {
    #[cfg(feature = "csr")]
    {
        post_json("/admin/rates", token, &rate, "save rate").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, rate);
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /admin/export` — full dataset spreadsheet bytes.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn download_export(token: &str) -> Result<Vec<u8>, String> {
    #[cfg(feature = "csr")]
    {
        fetch_binary("/admin/export", token, "export").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err("not available outside the browser".to_owned())
    }
}

/// `GET /export/month?year=&month=` — one month's spreadsheet bytes.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn download_month_export(token: &str, year: i32, month: u8) -> Result<Vec<u8>, String> {
    #[cfg(feature = "csr")]
    {
        fetch_binary(&month_export_endpoint(year, month), token, "export").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, year, month);
        Err("not available outside the browser".to_owned())
    }
}
