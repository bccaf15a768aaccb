use sqlx::PgPool;
use std::sync::Arc;

use crate::generator::ContentGenerator;

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub pool: PgPool,
    pub generator: ContentGenerator,
}

impl AppState {
    pub fn new(pool: PgPool, generator: ContentGenerator) -> Arc<Self> {
        Arc::new(Self { pool, generator })
    }
}
