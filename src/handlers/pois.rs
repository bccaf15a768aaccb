use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::{CreatePoiRequest, ListQuery};
use crate::database::models::Poi;
use crate::database::pois::PoiStore;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /pois - create a POI under an existing heritage site
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePoiRequest>,
) -> Result<(StatusCode, Json<Poi>), ApiError> {
    let poi = payload.validate()?;
    let created = PoiStore::new(state.pool.clone()).create(poi).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /pois - list POIs, optionally filtered by ?site_id=; empty list is OK
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Poi>>, ApiError> {
    let (skip, limit) = query.pagination(&crate::config::config().pagination);
    let pois = PoiStore::new(state.pool.clone())
        .list(query.site_id, skip, limit)
        .await?;
    Ok(Json(pois))
}

/// GET /pois/:poi_id - show a single POI
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(poi_id): Path<i64>,
) -> Result<Json<Poi>, ApiError> {
    let poi = PoiStore::new(state.pool.clone()).fetch(poi_id).await?;
    Ok(Json(poi))
}
