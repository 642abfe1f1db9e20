use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::{config::DatabaseConfig, error::Result};

/// Open the pool and bring the schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
