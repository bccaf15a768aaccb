use sqlx::PgPool;

use crate::api::NewSite;
use crate::database::models::Site;
use crate::database::{is_unique_violation, StoreError};

const SITE_COLUMNS: &str = "id, name, description";

/// Data access for heritage sites.
pub struct SiteStore {
    pool: PgPool,
}

impl SiteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new site. Site names are unique; a duplicate fails with
    /// `Conflict` and leaves the existing row unchanged.
    pub async fn create(&self, site: NewSite) -> Result<Site, StoreError> {
        let sql = format!(
            "INSERT INTO heritage_sites (name, description) VALUES ($1, $2) RETURNING {}",
            SITE_COLUMNS
        );

        sqlx::query_as::<_, Site>(&sql)
            .bind(&site.name)
            .bind(&site.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::Conflict(format!("Heritage site '{}' already exists", site.name))
                } else {
                    e.into()
                }
            })
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Site>, StoreError> {
        let sql = format!(
            "SELECT {} FROM heritage_sites ORDER BY id OFFSET $1 LIMIT $2",
            SITE_COLUMNS
        );

        let sites = sqlx::query_as::<_, Site>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(sites)
    }

    pub async fn fetch(&self, id: i64) -> Result<Site, StoreError> {
        let sql = format!("SELECT {} FROM heritage_sites WHERE id = $1", SITE_COLUMNS);

        sqlx::query_as::<_, Site>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Heritage site {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM heritage_sites WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}
