//! Request/response contracts: inbound payloads deserialize into
//! all-optional structs and are validated into typed values before any
//! storage access.

use serde::Deserialize;
use std::collections::HashMap;

use crate::config::PaginationConfig;
use crate::database::models::poi::{DEFAULT_POSITION_X, DEFAULT_POSITION_Y, DEFAULT_POSITION_Z};
use crate::error::ApiError;

/// Accepted values for the direction-keyed variant's direction tag.
pub const CARDINAL_DIRECTIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Validated payload for creating a heritage site.
#[derive(Debug, Clone)]
pub struct NewSite {
    pub name: String,
    pub description: Option<String>,
}

/// Validated payload for creating a site-keyed POI.
#[derive(Debug, Clone)]
pub struct NewPoi {
    pub site_id: i64,
    pub name: String,
    pub description_prompt: String,
    pub ar_anchor_id: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}

/// Validated payload for creating a direction-keyed POI.
#[derive(Debug, Clone)]
pub struct NewDirectionPoi {
    pub name: String,
    pub description: Option<String>,
    pub direction: String,
    pub model_path: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSiteRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateSiteRequest {
    pub fn validate(self) -> Result<NewSite, ApiError> {
        let mut errors = FieldErrors::new();
        let name = errors.require_text("name", self.name);
        errors.finish()?;

        Ok(NewSite {
            name: name.unwrap_or_default(),
            description: normalize_optional(self.description),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePoiRequest {
    pub site_id: Option<i64>,
    pub name: Option<String>,
    pub description_prompt: Option<String>,
    pub ar_anchor_id: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub position_z: Option<f64>,
}

impl CreatePoiRequest {
    pub fn validate(self) -> Result<NewPoi, ApiError> {
        let mut errors = FieldErrors::new();
        let name = errors.require_text("name", self.name);
        let description_prompt = errors.require_text("description_prompt", self.description_prompt);
        if self.site_id.is_none() {
            errors.missing("site_id");
        }
        errors.finish()?;

        Ok(NewPoi {
            site_id: self.site_id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description_prompt: description_prompt.unwrap_or_default(),
            ar_anchor_id: normalize_optional(self.ar_anchor_id),
            position_x: self.position_x.unwrap_or(DEFAULT_POSITION_X),
            position_y: self.position_y.unwrap_or(DEFAULT_POSITION_Y),
            position_z: self.position_z.unwrap_or(DEFAULT_POSITION_Z),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDirectionPoiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub direction: Option<String>,
    pub model_path: Option<String>,
}

impl CreateDirectionPoiRequest {
    pub fn validate(self) -> Result<NewDirectionPoi, ApiError> {
        let mut errors = FieldErrors::new();
        let name = errors.require_text("name", self.name);
        let model_path = errors.require_text("model_path", self.model_path);

        let direction = match self.direction.as_deref().map(str::trim) {
            None | Some("") => {
                errors.missing("direction");
                None
            }
            Some(raw) => match normalize_direction(raw) {
                Some(canonical) => Some(canonical),
                None => {
                    errors.invalid(
                        "direction",
                        format!("Must be one of: {}", CARDINAL_DIRECTIONS.join(", ")),
                    );
                    None
                }
            },
        };
        errors.finish()?;

        Ok(NewDirectionPoi {
            name: name.unwrap_or_default(),
            description: normalize_optional(self.description),
            direction: direction.unwrap_or_default(),
            model_path: model_path.unwrap_or_default(),
        })
    }
}

/// Pagination query parameters shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub site_id: Option<i64>,
}

impl ListQuery {
    /// Resolve skip/limit against configured defaults: negative skips
    /// collapse to 0, limits are clamped into 1..=max_limit.
    pub fn pagination(&self, config: &PaginationConfig) -> (i64, i64) {
        let skip = self.skip.unwrap_or(0).max(0);
        let limit = self
            .limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit);
        (skip, limit)
    }
}

/// Normalize a direction string to its canonical title-case form.
pub fn normalize_direction(raw: &str) -> Option<String> {
    CARDINAL_DIRECTIONS
        .iter()
        .find(|d| d.eq_ignore_ascii_case(raw))
        .map(|d| d.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Accumulates per-field validation failures so a response can report all of
/// them at once.
struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    fn missing(&mut self, field: &str) {
        self.errors
            .insert(field.to_string(), "This field is required".to_string());
    }

    fn invalid(&mut self, field: &str, detail: impl Into<String>) {
        self.errors.insert(field.to_string(), detail.into());
    }

    /// Require a non-empty text field, returning the trimmed value.
    fn require_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value.as_deref().map(str::trim) {
            None | Some("") => {
                self.missing(field);
                None
            }
            Some(trimmed) => Some(trimmed.to_string()),
        }
    }

    fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(
                "Missing or invalid fields",
                self.errors,
            ))
        }
    }
}
