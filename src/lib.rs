pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod state;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SchemaVariant;
use crate::state::AppState;

/// Assemble the full router for the active schema variant.
pub fn app(state: Arc<AppState>, variant: SchemaVariant) -> Router {
    let variant_routes = match variant {
        SchemaVariant::SiteKeyed => site_keyed_routes(),
        SchemaVariant::DirectionKeyed => direction_keyed_routes(),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(variant_routes)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn site_keyed_routes() -> Router<Arc<AppState>> {
    use handlers::{content, pois, sites};

    Router::new()
        .route("/pois", post(pois::create).get(pois::list))
        .route("/pois/:poi_id", get(pois::show))
        .route("/pois/generate-content/:poi_id", get(content::generate))
        .route("/sites", post(sites::create).get(sites::list))
        .route("/sites/:site_id", get(sites::show))
        .route("/sites/:site_id/pois", get(sites::list_pois))
}

fn direction_keyed_routes() -> Router<Arc<AppState>> {
    use handlers::directions;

    Router::new()
        .route("/pois", post(directions::create).get(directions::list))
        .route("/pois/:poi_id", get(directions::show))
        .route("/pois/direction/:direction_name", get(directions::show_by_direction))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let config = crate::config::config();

    Json(json!({
        "name": "Heritage AR API",
        "version": version,
        "schema_variant": config.schema_variant,
        "endpoints": {
            "health": "/health",
            "pois": "/pois[/:poi_id]",
            "sites": "/sites[/:site_id][/pois] (site variant)",
            "direction": "/pois/direction/:direction_name (direction variant)",
            "content": "/pois/generate-content/:poi_id (site variant)"
        }
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
