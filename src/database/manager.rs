use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation => {
                    return DatabaseError::ConstraintViolation(db_err.message().to_string());
                }
                // Older SQLite builds report some constraints without an extended code
                _ if db_err.message().contains("constraint failed") => {
                    return DatabaseError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        DatabaseError::Sqlx(err)
    }
}

impl DatabaseError {
    /// True for failures caused by the data a caller submitted
    pub fn is_validation(&self) -> bool {
        matches!(self, DatabaseError::Validation(_) | DatabaseError::ConstraintViolation(_))
    }
}

/// Opens and prepares the SQLite pool shared by all handlers
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool for the configured connection string. The file is created
    /// when missing and foreign keys are enforced on every connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
        if !config.url.starts_with("sqlite:") {
            return Err(DatabaseError::InvalidDatabaseUrl(config.url.clone()));
        }

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(true)
            .foreign_keys(true);

        if !config.enable_query_logging {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_with(options)
            .await?;

        info!("Opened database pool for: {}", config.url);
        Ok(pool)
    }

    /// Open the pool and bring the schema up to date
    pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
        let pool = Self::connect(config).await?;
        crate::database::schema::run_migrations(&pool).await?;
        Ok(pool)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(pool: SqlitePool) {
        pool.close().await;
        info!("Closed database pool");
    }
}
