//! Database maintenance subcommands.

use crate::config::Config;

pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.database.url, "Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database file and migrate a fresh one.
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Resetting database...");

    crate::db::drop_database(&config.database.url)?;
    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
