//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Bookshop backend.
//! It provides the MySQL-backed implementations of the repository traits
//! defined in `bs_core`, plus connection pool management and migrations.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

use bs_shared::DatabaseConfig;

#[cfg(feature = "mysql")]
use database::DatabasePool;

/// Connect to the database and bring the schema up to date
#[cfg(feature = "mysql")]
pub async fn initialize(config: DatabaseConfig) -> Result<DatabasePool, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = DatabasePool::new(config).await?;
    pool.run_migrations().await?;

    tracing::info!("Infrastructure services initialized successfully");
    Ok(pool)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let error = InfrastructureError::Config("missing DATABASE_URL".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing DATABASE_URL");
    }
}
