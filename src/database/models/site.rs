use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named cultural/historical site that owns a collection of POIs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Site {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
