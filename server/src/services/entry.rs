//! Work-entry service — CRUD, ownership checks, and monthly aggregation.
//!
//! DESIGN
//! ======
//! Every operation is scoped to the owning user in SQL, so a foreign entry id
//! behaves exactly like a missing one (404 at the route layer). The server
//! re-validates the same rules the dashboard form checks client-side; the
//! client is a convenience, this module is authoritative.

use std::collections::HashMap;

use shared::{MonthlyStat, Shift, Task, WorkEntry, WorkEntryPayload, month_label};
use sqlx::PgPool;
use time::{Date, Month};

/// Entries before this year are rejected; the site went live in 2025.
pub const MIN_ENTRY_YEAR: i32 = 2025;

/// Number of months covered by `GET /entries/stats/monthly`.
const STATS_MONTHS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("entry not found: {0}")]
    NotFound(i64),
    #[error("invalid entry: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate an entry payload against `today`. Mirrors the dashboard form.
///
/// # Errors
///
/// Returns a human-readable reason when the amount or date is out of range.
pub fn validate_payload(payload: &WorkEntryPayload, today: Date) -> Result<(), &'static str> {
    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err("amount must be a positive number of hours");
    }
    if payload.date.year() < MIN_ENTRY_YEAR {
        return Err("date is before the first supported year");
    }
    if payload.date.year() > today.year() {
        return Err("date is in a future year");
    }
    Ok(())
}

/// First day of the given month and first day of the following month.
pub(crate) fn month_range(year: i32, month: u8) -> Option<(Date, Date)> {
    let month = Month::try_from(month).ok()?;
    let start = Date::from_calendar_date(year, month, 1).ok()?;
    let (end_year, end_month) = match month {
        Month::December => (year + 1, Month::January),
        other => (year, other.next()),
    };
    let end = Date::from_calendar_date(end_year, end_month, 1).ok()?;
    Some((start, end))
}

pub(crate) fn year_range(year: i32) -> Option<(Date, Date)> {
    let start = Date::from_calendar_date(year, Month::January, 1).ok()?;
    let end = Date::from_calendar_date(year + 1, Month::January, 1).ok()?;
    Some((start, end))
}

// =============================================================================
// CRUD
// =============================================================================

type EntryRow = (i64, i64, Date, String, String, f64);

fn entry_from_row((id, user_id, date, shift, task, amount): EntryRow) -> WorkEntry {
    WorkEntry {
        id,
        user_id,
        date,
        shift: Shift::from_str(&shift).unwrap_or_default(),
        task: Task::from_str(&task).unwrap_or_default(),
        amount,
    }
}

/// List the caller's entries, optionally restricted to a year or a single
/// month, newest date first.
///
/// # Errors
///
/// Returns `Invalid` for a month filter without a year or an impossible
/// year/month pair, `Database` if the query fails.
pub async fn list_entries(
    pool: &PgPool,
    user_id: i64,
    year: Option<i32>,
    month: Option<u8>,
) -> Result<Vec<WorkEntry>, EntryError> {
    let range = match (year, month) {
        (Some(y), Some(m)) => {
            Some(month_range(y, m).ok_or(EntryError::Invalid("invalid year/month filter"))?)
        }
        (Some(y), None) => Some(year_range(y).ok_or(EntryError::Invalid("invalid year filter"))?),
        (None, Some(_)) => return Err(EntryError::Invalid("month filter requires a year")),
        (None, None) => None,
    };

    let rows = match range {
        Some((start, end)) => {
            sqlx::query_as::<_, EntryRow>(
                r"SELECT id, user_id, date, shift, task, amount
                  FROM work_entries
                  WHERE user_id = $1 AND date >= $2 AND date < $3
                  ORDER BY date DESC, id DESC",
            )
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, EntryRow>(
                r"SELECT id, user_id, date, shift, task, amount
                  FROM work_entries
                  WHERE user_id = $1
                  ORDER BY date DESC, id DESC",
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(entry_from_row).collect())
}

/// Create an entry owned by the caller.
///
/// # Errors
///
/// Returns `Invalid` when the payload fails validation, `Database` otherwise.
pub async fn create_entry(
    pool: &PgPool,
    user_id: i64,
    payload: &WorkEntryPayload,
    today: Date,
) -> Result<WorkEntry, EntryError> {
    validate_payload(payload, today).map_err(EntryError::Invalid)?;

    let id: i64 = sqlx::query_scalar(
        r"INSERT INTO work_entries (user_id, date, shift, task, amount)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING id",
    )
    .bind(user_id)
    .bind(payload.date)
    .bind(payload.shift.as_str())
    .bind(payload.task.as_str())
    .bind(payload.amount)
    .fetch_one(pool)
    .await?;

    Ok(WorkEntry {
        id,
        user_id,
        date: payload.date,
        shift: payload.shift,
        task: payload.task,
        amount: payload.amount,
    })
}

/// Replace an owned entry. Foreign or missing ids surface as `NotFound`.
pub async fn update_entry(
    pool: &PgPool,
    user_id: i64,
    entry_id: i64,
    payload: &WorkEntryPayload,
    today: Date,
) -> Result<WorkEntry, EntryError> {
    validate_payload(payload, today).map_err(EntryError::Invalid)?;

    let updated = sqlx::query(
        r"UPDATE work_entries
          SET date = $1, shift = $2, task = $3, amount = $4
          WHERE id = $5 AND user_id = $6",
    )
    .bind(payload.date)
    .bind(payload.shift.as_str())
    .bind(payload.task.as_str())
    .bind(payload.amount)
    .bind(entry_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(EntryError::NotFound(entry_id));
    }

    Ok(WorkEntry {
        id: entry_id,
        user_id,
        date: payload.date,
        shift: payload.shift,
        task: payload.task,
        amount: payload.amount,
    })
}

/// Delete an owned entry. Deleting an id that is already gone is an error,
/// not a silent success.
pub async fn delete_entry(pool: &PgPool, user_id: i64, entry_id: i64) -> Result<(), EntryError> {
    let deleted = sqlx::query("DELETE FROM work_entries WHERE id = $1 AND user_id = $2")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(EntryError::NotFound(entry_id));
    }
    Ok(())
}

// =============================================================================
// MONTHLY STATS
// =============================================================================

/// The last `n` calendar months ending at `today`'s month, oldest first.
pub(crate) fn last_n_months(today: Date, n: usize) -> Vec<(i32, u8)> {
    let mut year = today.year();
    let mut month = u8::from(today.month());
    let mut window = Vec::with_capacity(n);
    for _ in 0..n {
        window.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    window.reverse();
    window
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shape per-month sums and annual rates into chart-ready stats. Months with
/// no entries appear with zeros; a missing rate yields zero euros.
pub(crate) fn build_monthly_stats(
    window: &[(i32, u8)],
    hours_by_month: &HashMap<(i32, u8), f64>,
    rate_by_year: &HashMap<i32, f64>,
) -> Vec<MonthlyStat> {
    window
        .iter()
        .map(|&(year, month)| {
            let hours = hours_by_month.get(&(year, month)).copied().unwrap_or(0.0);
            let rate = rate_by_year.get(&year).copied().unwrap_or(0.0);
            MonthlyStat {
                name: month_label(year, month),
                hours: round2(hours),
                euros: round2(hours * rate),
            }
        })
        .collect()
}

/// Aggregate the caller's last six months of hours and euros, oldest first.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn monthly_stats(pool: &PgPool, user_id: i64, today: Date) -> Result<Vec<MonthlyStat>, EntryError> {
    let window = last_n_months(today, STATS_MONTHS);
    let (first_year, first_month) = window[0];
    let (start, _) =
        month_range(first_year, first_month).ok_or(EntryError::Invalid("invalid stats window"))?;

    let sums = sqlx::query_as::<_, (i32, i32, f64)>(
        r"SELECT CAST(date_part('year', date) AS INT4),
                 CAST(date_part('month', date) AS INT4),
                 SUM(amount)
          FROM work_entries
          WHERE user_id = $1 AND date >= $2
          GROUP BY 1, 2",
    )
    .bind(user_id)
    .bind(start)
    .fetch_all(pool)
    .await?;

    let rates = sqlx::query_as::<_, (i32, f64)>("SELECT year, rate FROM annual_rates")
        .fetch_all(pool)
        .await?;

    let hours_by_month: HashMap<(i32, u8), f64> = sums
        .into_iter()
        .map(|(year, month, hours)| ((year, u8::try_from(month).unwrap_or(0)), hours))
        .collect();
    let rate_by_year: HashMap<i32, f64> = rates.into_iter().collect();

    Ok(build_monthly_stats(&window, &hours_by_month, &rate_by_year))
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
