use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migrations_not_found")]
    MigrationsNotFound,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Favorites traffic is one small row, so the pool stays small.
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 3,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            error!(error = %e, "Could not connect to PostgreSQL");
            DatabaseError::ConnectionError
        })?;

    info!(
        max_connections = config.max_connections,
        "PostgreSQL pool ready"
    );
    Ok(pool)
}

/// Applies the migrations found in `migrations_path` (creates `key_value_store`).
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        error!(path = %path.display(), "Migrations directory not found");
        return Err(DatabaseError::MigrationsNotFound);
    }

    let migrator = sqlx::migrate::Migrator::new(path).await.map_err(|e| {
        error!(error = %e, "Could not load migrations");
        DatabaseError::MigrationError
    })?;

    migrator.run(pool).await.map_err(|e| {
        error!(error = %e, "Migration run failed");
        DatabaseError::MigrationError
    })?;

    info!(count = migrator.iter().count(), "Migrations applied");
    Ok(())
}
