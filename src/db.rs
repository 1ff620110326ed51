use anyhow::Result;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::DatabaseSettings;

pub type DbPool = PgPool;

/// Create the shared Postgres pool. Callers own its lifecycle.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(settings.connect_options()?)
        .await?;
    Ok(pool)
}

/// Same as [`create_pool`] but defers connecting until the first query.
pub fn create_lazy_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(settings.connect_options()?);
    Ok(pool)
}
