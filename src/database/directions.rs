use sqlx::PgPool;

use crate::api::NewDirectionPoi;
use crate::database::models::DirectionPoi;
use crate::database::{is_unique_violation, StoreError};

const DIRECTION_POI_COLUMNS: &str = "id, name, description, direction, model_path";

/// Data access for direction-keyed POIs.
pub struct DirectionPoiStore {
    pool: PgPool,
}

impl DirectionPoiStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new POI. The direction column is unique; a duplicate fails
    /// with `Conflict` and leaves the existing row unchanged.
    pub async fn create(&self, poi: NewDirectionPoi) -> Result<DirectionPoi, StoreError> {
        let sql = format!(
            "INSERT INTO direction_pois (name, description, direction, model_path) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            DIRECTION_POI_COLUMNS
        );

        sqlx::query_as::<_, DirectionPoi>(&sql)
            .bind(&poi.name)
            .bind(&poi.description)
            .bind(&poi.direction)
            .bind(&poi.model_path)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::Conflict(format!(
                        "A POI already exists for direction '{}'",
                        poi.direction
                    ))
                } else {
                    e.into()
                }
            })
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<DirectionPoi>, StoreError> {
        let sql = format!(
            "SELECT {} FROM direction_pois ORDER BY id OFFSET $1 LIMIT $2",
            DIRECTION_POI_COLUMNS
        );

        let pois = sqlx::query_as::<_, DirectionPoi>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(pois)
    }

    pub async fn fetch(&self, id: i64) -> Result<DirectionPoi, StoreError> {
        let sql = format!("SELECT {} FROM direction_pois WHERE id = $1", DIRECTION_POI_COLUMNS);

        sqlx::query_as::<_, DirectionPoi>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("POI {} not found", id)))
    }

    /// Lookup by unique direction tag; at most one row can match.
    pub async fn fetch_by_direction(&self, direction: &str) -> Result<DirectionPoi, StoreError> {
        let sql = format!(
            "SELECT {} FROM direction_pois WHERE direction = $1",
            DIRECTION_POI_COLUMNS
        );

        sqlx::query_as::<_, DirectionPoi>(&sql)
            .bind(direction)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                StoreError::NotFound(format!("POI for direction '{}' not found", direction))
            })
    }
}
