use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Default viewer-relative placement offset for newly created POIs.
pub const DEFAULT_POSITION_X: f64 = 0.0;
pub const DEFAULT_POSITION_Y: f64 = 0.0;
pub const DEFAULT_POSITION_Z: f64 = -1.5;

/// A point of interest within a heritage site, placed as an offset relative
/// to the viewer. `description_prompt` doubles as the human-readable
/// description and the seed for the content generator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Poi {
    pub id: i64,
    pub site_id: i64,
    pub name: String,
    pub description_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar_anchor_id: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}
