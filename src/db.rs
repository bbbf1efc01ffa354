//! Database connection and schema migrations

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::{
    config::DatabaseConfig,
    error::{DbError, DbResult},
};

/// Open the shared connection pool.
///
/// Fails on malformed settings, authentication errors or an unreachable
/// server. No retry is attempted.
pub async fn connect(config: &DatabaseConfig) -> DbResult<PgPool> {
    let options = config.connect_options()?;

    tracing::debug!("Connecting to {}", config.redacted_dsn());

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await
        .map_err(DbError::Connect)
}

/// Bring the `books` table in line with the current schema.
///
/// Migrations are additive and recorded by version, so this runs on every
/// startup.
pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Close every connection in the pool and wait for them to be released.
pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("Database connections closed");
}
