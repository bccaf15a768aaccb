use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::{CreateSiteRequest, ListQuery};
use crate::database::models::{Poi, Site};
use crate::database::pois::PoiStore;
use crate::database::sites::SiteStore;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /sites - create a heritage site
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<Site>), ApiError> {
    let site = payload.validate()?;
    let created = SiteStore::new(state.pool.clone()).create(site).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /sites - list heritage sites
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Site>>, ApiError> {
    let (skip, limit) = query.pagination(&crate::config::config().pagination);
    let sites = SiteStore::new(state.pool.clone()).list(skip, limit).await?;
    Ok(Json(sites))
}

/// GET /sites/:site_id - show a single heritage site
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<i64>,
) -> Result<Json<Site>, ApiError> {
    let site = SiteStore::new(state.pool.clone()).fetch(site_id).await?;
    Ok(Json(site))
}

/// GET /sites/:site_id/pois - list a site's POIs; 404 when the site has none
pub async fn list_pois(
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Poi>>, ApiError> {
    let (skip, limit) = query.pagination(&crate::config::config().pagination);
    let pois = PoiStore::new(state.pool.clone())
        .list_for_site(site_id, skip, limit)
        .await?;
    Ok(Json(pois))
}
