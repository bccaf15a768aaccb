use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::SchemaVariant;

pub mod directions;
pub mod models;
pub mod pois;
pub mod sites;

/// Errors from the data-access layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// True when the underlying error is a Postgres unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Connect a pool using DATABASE_URL and the configured pool settings.
pub async fn connect() -> Result<PgPool, StoreError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL is not set".into()))?;

    let config = &crate::config::config().database;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&url)
        .await?;

    info!("Connected database pool ({} max connections)", config.max_connections);
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

const SITE_KEYED_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS heritage_sites (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS pois (
        id BIGSERIAL PRIMARY KEY,
        site_id BIGINT NOT NULL REFERENCES heritage_sites(id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        description_prompt TEXT NOT NULL,
        ar_anchor_id TEXT,
        position_x DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        position_y DOUBLE PRECISION NOT NULL DEFAULT 0.0,
        position_z DOUBLE PRECISION NOT NULL DEFAULT -1.5
    )",
    "CREATE INDEX IF NOT EXISTS idx_pois_site_id ON pois(site_id)",
];

const DIRECTION_KEYED_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS direction_pois (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        direction TEXT NOT NULL UNIQUE,
        model_path TEXT NOT NULL
    )",
];

/// Create the tables for the active schema variant if they do not exist yet.
/// Only the active variant's tables are touched; the two schemas never share
/// a table.
pub async fn init_schema(pool: &PgPool, variant: SchemaVariant) -> Result<(), StoreError> {
    let statements = match variant {
        SchemaVariant::SiteKeyed => SITE_KEYED_SCHEMA,
        SchemaVariant::DirectionKeyed => DIRECTION_KEYED_SCHEMA,
    };

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Schema ready for {:?} variant", variant);
    Ok(())
}
