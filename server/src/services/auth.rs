//! Password auth service — hashing, login, registration, password change.
//!
//! TRADE-OFFS
//! ==========
//! Password hashes are salted SHA-256 hexdigests stored as `salt$digest`.
//! Login failure is reported as one opaque error for both unknown-user and
//! wrong-password so the response cannot be used to probe usernames.

use rand::Rng;
use sha2::{Digest, Sha256};
use shared::{RegisterUser, Role, User};
use sqlx::{PgPool, Row};

use crate::services::session;

const SALT_LEN: usize = 16;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_FULL_NAME: &str = "System Admin";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("username already registered")]
    UsernameTaken,
    #[error("old password does not match")]
    WrongOldPassword,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    session::bytes_to_hex(&hasher.finalize())
}

/// Hash a password with a fresh random salt, producing `salt$digest`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt_bytes: [u8; SALT_LEN] = rand::rng().random();
    let salt = session::bytes_to_hex(&salt_bytes);
    let digest = sha256_hex(&format!("{salt}{password}"));
    format!("{salt}${digest}")
}

/// Verify a password against a stored `salt$digest` hash.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    sha256_hex(&format!("{salt}{password}")) == digest
}

/// Verify credentials and open a session. Returns the user and bearer token.
pub async fn login(pool: &PgPool, username: &str, password: &str) -> Result<(User, String), AuthError> {
    let row = sqlx::query(
        "SELECT id, username, full_name, role, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    if !verify_password(password, &stored) {
        return Err(AuthError::InvalidCredentials);
    }

    let role: String = row.get("role");
    let user = User {
        id: row.get("id"),
        username: row.get("username"),
        full_name: row.get("full_name"),
        role: Role::from_str(&role).unwrap_or_default(),
    };
    let token = session::create_session(pool, user.id).await?;
    Ok((user, token))
}

/// Create a new account. Role defaults to worker.
pub async fn register(pool: &PgPool, reg: &RegisterUser) -> Result<User, AuthError> {
    let role = reg.role.unwrap_or_default();
    let hash = hash_password(&reg.password);

    let row = sqlx::query(
        r"INSERT INTO users (username, full_name, password_hash, role)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (username) DO NOTHING
          RETURNING id",
    )
    .bind(&reg.username)
    .bind(&reg.full_name)
    .bind(&hash)
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::UsernameTaken)?;

    Ok(User {
        id: row.get("id"),
        username: reg.username.clone(),
        full_name: reg.full_name.clone(),
        role,
    })
}

/// Replace a user's password after verifying the old one.
pub async fn change_password(
    pool: &PgPool,
    user_id: i64,
    old_password: &str,
    new_password: &str,
) -> Result<(), AuthError> {
    let row = sqlx::query("SELECT password_hash FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    if !verify_password(old_password, &stored) {
        return Err(AuthError::WrongOldPassword);
    }

    sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
        .bind(hash_password(new_password))
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Seed the default administrator when no admin account exists yet.
/// Returns `true` if an account was created.
pub async fn seed_default_admin(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    sqlx::query(
        r"INSERT INTO users (username, full_name, password_hash, role)
          VALUES ($1, $2, $3, 'admin')
          ON CONFLICT (username) DO NOTHING",
    )
    .bind(DEFAULT_ADMIN_USERNAME)
    .bind(DEFAULT_ADMIN_FULL_NAME)
    .bind(hash_password(DEFAULT_ADMIN_PASSWORD))
    .execute(pool)
    .await?;
    Ok(true)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
