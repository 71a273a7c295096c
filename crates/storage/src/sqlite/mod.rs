use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use thiserror::Error;

use crate::repository::Storage;

mod badge_repo;
mod completed_lesson_repo;
mod follow_repo;
mod mapping;
mod migrate;
mod post_repo;
mod profile_repo;
mod progress_repo;

const MAX_CONNECTIONS: u32 = 4;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error("invalid sqlite url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("could not open sqlite database {url}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("schema migration v{version} failed")]
    Migration {
        version: i64,
        #[source]
        source: sqlx::Error,
    },
}

/// Connection settings for the learner database: foreign keys on, WAL journal.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, SqliteInitError> {
    let options =
        SqliteConnectOptions::from_str(database_url).map_err(|source| SqliteInitError::InvalidUrl {
            url: database_url.to_owned(),
            source,
        })?;
    Ok(options
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT))
}

impl SqliteRepository {
    /// Open (creating if needed) the database at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError::InvalidUrl` if the URL does not parse and
    /// `SqliteInitError::Connect` if the pool cannot open a connection.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let options = connect_options(database_url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|source| SqliteInitError::Connect {
                url: database_url.to_owned(),
                source,
            })?;
        tracing::debug!(url = database_url, "connected to sqlite");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Bring the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError::Migration` naming the version that failed.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

impl Storage {
    /// Build a `Storage` backed by `SQLite`, migrated and ready for use.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if connection or migrations cannot be
    /// completed.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url).await?;
        repo.migrate().await?;
        Ok(Self::from_repository(repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteRepository>();
    }

    #[test]
    fn unknown_url_parameter_is_an_invalid_url() {
        let err = connect_options("sqlite::memory:?flavour=strawberry").unwrap_err();
        assert!(matches!(err, SqliteInitError::InvalidUrl { ref url, .. } if url.contains("flavour")));
    }

    #[tokio::test]
    async fn connections_enforce_foreign_keys() {
        let repo = SqliteRepository::connect("sqlite:file:memdb_pragmas?mode=memory&cache=shared")
            .await
            .unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(enabled, 1);

        repo.migrate().await.unwrap();
        repo.migrate().await.unwrap();
    }
}
