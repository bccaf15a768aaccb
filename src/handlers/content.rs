use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::database::pois::PoiStore;
use crate::error::ApiError;
use crate::generator::PLACEHOLDER_ILLUSTRATION_URL;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratedContent {
    pub text: String,
    pub illustration_url: String,
}

/// GET /pois/generate-content/:poi_id - generate descriptive text for a POI.
///
/// The POI lookup happens first: an unknown id is a 404 and the provider is
/// never called. Provider failures surface as 502 with the provider message.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Path(poi_id): Path<i64>,
) -> Result<Json<GeneratedContent>, ApiError> {
    let poi = PoiStore::new(state.pool.clone()).fetch(poi_id).await?;

    let text = state
        .generator
        .generate(&poi.name, &poi.description_prompt)
        .await?;

    Ok(Json(GeneratedContent {
        text,
        illustration_url: PLACEHOLDER_ILLUSTRATION_URL.to_string(),
    }))
}
