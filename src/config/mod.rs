use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub schema_variant: SchemaVariant,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Which of the two incompatible POI schemas this deployment serves.
/// The variants were never reconciled upstream; they stay separate here
/// (distinct tables, distinct routes) and exactly one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVariant {
    /// POIs belong to a heritage site and carry a position offset (default).
    SiteKeyed,
    /// POIs are keyed by a unique cardinal direction and a 3D asset path.
    DirectionKeyed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: i64,
    pub max_limit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub retry_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("POI_SCHEMA_VARIANT") {
            self.schema_variant = match v.to_ascii_lowercase().as_str() {
                "direction" => SchemaVariant::DirectionKeyed,
                "site" => SchemaVariant::SiteKeyed,
                other => {
                    tracing::warn!("Unknown POI_SCHEMA_VARIANT '{}', keeping default", other);
                    self.schema_variant
                }
            };
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs =
                v.parse().unwrap_or(self.database.connect_timeout_secs);
        }

        // Pagination overrides
        if let Ok(v) = env::var("PAGINATION_DEFAULT_LIMIT") {
            self.pagination.default_limit = v.parse().unwrap_or(self.pagination.default_limit);
        }
        if let Ok(v) = env::var("PAGINATION_MAX_LIMIT") {
            self.pagination.max_limit = v.parse().unwrap_or(self.pagination.max_limit);
        }

        // Generator overrides
        if let Ok(v) = env::var("GENERATOR_MODEL") {
            self.generator.model = v;
        }
        if let Ok(v) = env::var("GENERATOR_TIMEOUT_SECS") {
            self.generator.timeout_secs = v.parse().unwrap_or(self.generator.timeout_secs);
        }
        if let Ok(v) = env::var("GENERATOR_MAX_RETRIES") {
            self.generator.max_retries = v.parse().unwrap_or(self.generator.max_retries);
        }
        if let Ok(v) = env::var("GENERATOR_RETRY_DELAY_MS") {
            self.generator.retry_delay_ms = v.parse().unwrap_or(self.generator.retry_delay_ms);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            schema_variant: SchemaVariant::SiteKeyed,
            database: DatabaseConfig {
                max_connections: 10,
                connect_timeout_secs: 30,
            },
            pagination: PaginationConfig {
                default_limit: 100,
                max_limit: 1000,
            },
            generator: GeneratorConfig {
                model: "gemini-2.0-flash".to_string(),
                timeout_secs: 15,
                max_retries: 1,
                retry_delay_ms: 500,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            schema_variant: SchemaVariant::SiteKeyed,
            database: DatabaseConfig {
                max_connections: 20,
                connect_timeout_secs: 10,
            },
            pagination: PaginationConfig {
                default_limit: 100,
                max_limit: 500,
            },
            generator: GeneratorConfig {
                model: "gemini-2.0-flash".to_string(),
                timeout_secs: 15,
                max_retries: 1,
                retry_delay_ms: 500,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            schema_variant: SchemaVariant::SiteKeyed,
            database: DatabaseConfig {
                max_connections: 50,
                connect_timeout_secs: 5,
            },
            pagination: PaginationConfig {
                default_limit: 100,
                max_limit: 100,
            },
            generator: GeneratorConfig {
                model: "gemini-2.0-flash".to_string(),
                timeout_secs: 15,
                max_retries: 1,
                retry_delay_ms: 1000,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
