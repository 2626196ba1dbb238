//! Shared wire types for the Horas Penosas API.
//!
//! This crate owns the request/response shapes used by both `server` and
//! `client`, so the two sides cannot drift apart. Dates travel as ISO 8601
//! calendar days (`"2025-03-01"`); enumerated labels (shift, task) travel as
//! the site's Spanish labels and parse back strictly.

use serde::{Deserialize, Serialize};
use time::Date;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Spanish month abbreviations, indexed by `month - 1`.
pub const MONTH_ABBR: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Label for one calendar month in stats output, e.g. `"Mar 2025"`.
#[must_use]
pub fn month_label(year: i32, month: u8) -> String {
    let abbr = (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_ABBR.get(i))
        .copied()
        .unwrap_or("?");
    format!("{abbr} {year}")
}

// =============================================================================
// ENUMS
// =============================================================================

/// Account role. Admins see aggregate activity and manage users and rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Worker,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "worker" => Some(Self::Worker),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Coarse time-of-day bucket for a work entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "Mañana")]
    Manana,
    Tarde,
    Noche,
}

impl Shift {
    pub const ALL: [Self; 3] = [Self::Manana, Self::Tarde, Self::Noche];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manana => "Mañana",
            Self::Tarde => "Tarde",
            Self::Noche => "Noche",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Mañana" => Some(Self::Manana),
            "Tarde" => Some(Self::Tarde),
            "Noche" => Some(Self::Noche),
            _ => None,
        }
    }
}

/// Site-specific task label for a work entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    #[default]
    Sacos,
    Quemadores,
    Filtros,
    Otros,
}

impl Task {
    pub const ALL: [Self; 4] = [Self::Sacos, Self::Quemadores, Self::Filtros, Self::Otros];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sacos => "Sacos",
            Self::Quemadores => "Quemadores",
            Self::Filtros => "Filtros",
            Self::Otros => "Otros",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Sacos" => Some(Self::Sacos),
            "Quemadores" => Some(Self::Quemadores),
            "Filtros" => Some(Self::Filtros),
            "Otros" => Some(Self::Otros),
            _ => None,
        }
    }
}

// =============================================================================
// USERS & AUTH
// =============================================================================

/// Public view of a user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Registration payload for `POST /users/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Successful login response from `POST /token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Payload for `PUT /users/me/password`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Error body shape used by the API (`{"detail": "..."}`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiDetail {
    pub detail: String,
}

// =============================================================================
// WORK ENTRIES
// =============================================================================

/// One logged work record, owned by exactly one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub shift: Shift,
    pub task: Task,
    pub amount: f64,
}

/// Create/update payload for `POST /entries/` and `PUT /entries/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkEntryPayload {
    pub date: Date,
    pub shift: Shift,
    pub task: Task,
    pub amount: f64,
}

/// One month of aggregated activity from `GET /entries/stats/monthly`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub name: String,
    pub hours: f64,
    pub euros: f64,
}

// =============================================================================
// ADMIN
// =============================================================================

/// Configured hourly pay rate for one calendar year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnualRate {
    pub year: i32,
    pub rate: f64,
}

/// One line of recent activity in the admin summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub worker: String,
    pub date: Date,
    pub task: Task,
}

/// Server-computed aggregate snapshot for the admin view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_users: i64,
    pub total_entries: i64,
    pub recent_activity: Vec<ActivityItem>,
}
