//! Admin service — summary projection, user management, annual rates.

use shared::{ActivityItem, AnnualRate, Role, Summary, Task, User};
use sqlx::{PgPool, Row};
use time::Date;

/// Entries shown in the summary's recent-activity list.
const RECENT_ACTIVITY_LIMIT: i64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("user not found: {0}")]
    UserNotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Compute the aggregate snapshot for the admin dashboard.
///
/// # Errors
///
/// Returns a database error if any of the three queries fails.
pub async fn summary(pool: &PgPool) -> Result<Summary, AdminError> {
    let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    let total_entries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM work_entries")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, (String, Date, String)>(
        r"SELECT COALESCE(u.full_name, u.username), e.date, e.task
          FROM work_entries e
          JOIN users u ON u.id = e.user_id
          ORDER BY e.created_at DESC
          LIMIT $1",
    )
    .bind(RECENT_ACTIVITY_LIMIT)
    .fetch_all(pool)
    .await?;

    let recent_activity = rows
        .into_iter()
        .map(|(worker, date, task)| ActivityItem {
            worker,
            date,
            task: Task::from_str(&task).unwrap_or_default(),
        })
        .collect();

    Ok(Summary { total_users, total_entries, recent_activity })
}

/// List every account, admins included, ordered by username.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, AdminError> {
    let rows = sqlx::query("SELECT id, username, full_name, role FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let role: String = row.get("role");
            User {
                id: row.get("id"),
                username: row.get("username"),
                full_name: row.get("full_name"),
                role: Role::from_str(&role).unwrap_or_default(),
            }
        })
        .collect())
}

/// Delete a user. Their entries and sessions cascade with the row.
pub async fn delete_user(pool: &PgPool, user_id: i64) -> Result<(), AdminError> {
    let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(AdminError::UserNotFound(user_id));
    }
    Ok(())
}

/// List configured rates, ascending year.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_rates(pool: &PgPool) -> Result<Vec<AnnualRate>, AdminError> {
    let rows = sqlx::query_as::<_, (i32, f64)>("SELECT year, rate FROM annual_rates ORDER BY year")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(year, rate)| AnnualRate { year, rate }).collect())
}

/// Create or update the rate for one year.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn upsert_rate(pool: &PgPool, rate: AnnualRate) -> Result<AnnualRate, AdminError> {
    sqlx::query(
        r"INSERT INTO annual_rates (year, rate)
          VALUES ($1, $2)
          ON CONFLICT (year) DO UPDATE SET rate = EXCLUDED.rate",
    )
    .bind(rate.year)
    .bind(rate.rate)
    .execute(pool)
    .await?;
    Ok(rate)
}
