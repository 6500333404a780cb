//! Reader for the earlier `career_coach.db` credential database.
//!
//! That schema keys users by an integer id and stores an unsalted SHA-256
//! hex digest in `password`. The file is opened read-only and never
//! migrated.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use pathwise_types::error::RepositoryError;
use pathwise_types::user::LegacyAccount;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// `CURRENT_TIMESTAMP` format written by SQLite.
const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), SQLITE_TIMESTAMP)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Read every row of the legacy `users` table, oldest first.
///
/// NULL columns come back as empty strings; the importer rejects them.
pub async fn read_legacy_accounts(path: &Path) -> Result<Vec<LegacyAccount>, RepositoryError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| RepositoryError::Query(format!("{}: {e}", path.display())))?;

    let rows = sqlx::query("SELECT username, password, email, created_at FROM users ORDER BY id")
        .fetch_all(&pool)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    let mut accounts = Vec::with_capacity(rows.len());
    for row in rows {
        let text = |column: &str| -> Result<String, RepositoryError> {
            row.try_get::<Option<String>, _>(column)
                .map(Option::unwrap_or_default)
                .map_err(|e| RepositoryError::Query(e.to_string()))
        };
        accounts.push(LegacyAccount {
            username: text("username")?,
            email: text("email")?,
            password_hash: text("password")?,
            created_at: parse_timestamp(&text("created_at")?),
        });
    }

    pool.close().await;
    tracing::debug!(path = %path.display(), accounts = accounts.len(), "legacy users read");
    Ok(accounts)
}
