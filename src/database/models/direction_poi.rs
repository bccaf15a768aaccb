use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// POI in the direction-keyed schema variant: one POI per cardinal
/// direction, each referencing a 3D asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DirectionPoi {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub direction: String,
    pub model_path: String,
}
