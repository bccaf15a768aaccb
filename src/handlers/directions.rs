//! Handlers for the direction-keyed schema variant, where each POI is tagged
//! with a unique cardinal direction.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::{normalize_direction, CreateDirectionPoiRequest, ListQuery};
use crate::database::directions::DirectionPoiStore;
use crate::database::models::DirectionPoi;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /pois - create a direction-keyed POI; 409 on a duplicate direction
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDirectionPoiRequest>,
) -> Result<(StatusCode, Json<DirectionPoi>), ApiError> {
    let poi = payload.validate()?;
    let created = DirectionPoiStore::new(state.pool.clone()).create(poi).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /pois - list direction-keyed POIs
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<DirectionPoi>>, ApiError> {
    let (skip, limit) = query.pagination(&crate::config::config().pagination);
    let pois = DirectionPoiStore::new(state.pool.clone()).list(skip, limit).await?;
    Ok(Json(pois))
}

/// GET /pois/:poi_id - show a single POI
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(poi_id): Path<i64>,
) -> Result<Json<DirectionPoi>, ApiError> {
    let poi = DirectionPoiStore::new(state.pool.clone()).fetch(poi_id).await?;
    Ok(Json(poi))
}

/// GET /pois/direction/:direction_name - lookup by unique cardinal direction
pub async fn show_by_direction(
    State(state): State<Arc<AppState>>,
    Path(direction_name): Path<String>,
) -> Result<Json<DirectionPoi>, ApiError> {
    // Tolerate lowercase path segments; unknown directions cannot match a row
    let canonical = normalize_direction(&direction_name)
        .ok_or_else(|| ApiError::not_found(format!("POI for direction '{}' not found", direction_name)))?;

    let poi = DirectionPoiStore::new(state.pool.clone())
        .fetch_by_direction(&canonical)
        .await?;
    Ok(Json(poi))
}
