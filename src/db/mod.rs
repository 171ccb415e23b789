//! Database pool setup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted database owns its schema. The bundled migrations only create
//! the two tables for local development and run when explicitly enabled.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Initialize the `PostgreSQL` connection pool, optionally running migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32, run_migrations: bool) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    if run_migrations {
        sqlx::migrate!("src/db/migrations").run(&pool).await?;
        info!("database migrations applied");
    }

    Ok(pool)
}
