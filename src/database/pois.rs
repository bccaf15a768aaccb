use sqlx::PgPool;

use crate::api::NewPoi;
use crate::database::models::Poi;
use crate::database::sites::SiteStore;
use crate::database::StoreError;

const POI_COLUMNS: &str =
    "id, site_id, name, description_prompt, ar_anchor_id, position_x, position_y, position_z";

/// Data access for site-keyed POIs.
pub struct PoiStore {
    pool: PgPool,
}

impl PoiStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new POI. The parent site is looked up first so a dangling
    /// `site_id` surfaces as `NotFound` rather than a raw FK violation.
    pub async fn create(&self, poi: NewPoi) -> Result<Poi, StoreError> {
        let sites = SiteStore::new(self.pool.clone());
        if !sites.exists(poi.site_id).await? {
            return Err(StoreError::NotFound(format!(
                "Heritage site {} not found",
                poi.site_id
            )));
        }

        let sql = format!(
            "INSERT INTO pois (site_id, name, description_prompt, ar_anchor_id, \
             position_x, position_y, position_z) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            POI_COLUMNS
        );

        let created = sqlx::query_as::<_, Poi>(&sql)
            .bind(poi.site_id)
            .bind(&poi.name)
            .bind(&poi.description_prompt)
            .bind(&poi.ar_anchor_id)
            .bind(poi.position_x)
            .bind(poi.position_y)
            .bind(poi.position_z)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    /// Generic listing, optionally filtered by parent site. An empty result
    /// is not an error here.
    pub async fn list(
        &self,
        site_id: Option<i64>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Poi>, StoreError> {
        let pois = match site_id {
            Some(site_id) => {
                let sql = format!(
                    "SELECT {} FROM pois WHERE site_id = $1 ORDER BY id OFFSET $2 LIMIT $3",
                    POI_COLUMNS
                );
                sqlx::query_as::<_, Poi>(&sql)
                    .bind(site_id)
                    .bind(skip)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM pois ORDER BY id OFFSET $1 LIMIT $2",
                    POI_COLUMNS
                );
                sqlx::query_as::<_, Poi>(&sql)
                    .bind(skip)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(pois)
    }

    /// Site-scoped listing. The site-scoped endpoint requires at least one
    /// POI, so an empty result is `NotFound`.
    pub async fn list_for_site(
        &self,
        site_id: i64,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Poi>, StoreError> {
        let pois = self.list(Some(site_id), skip, limit).await?;
        if pois.is_empty() {
            return Err(StoreError::NotFound(format!(
                "No POIs found for heritage site {}",
                site_id
            )));
        }
        Ok(pois)
    }

    pub async fn fetch(&self, id: i64) -> Result<Poi, StoreError> {
        let sql = format!("SELECT {} FROM pois WHERE id = $1", POI_COLUMNS);

        sqlx::query_as::<_, Poi>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("POI {} not found", id)))
    }
}
