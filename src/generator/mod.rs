//! Content-generation collaborator: a Gemini `generateContent` client that
//! turns a POI's name and description seed into descriptive visitor text.
//!
//! The call carries an explicit request timeout and a bounded retry so a slow
//! or failing provider can never hang a request indefinitely.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;

use crate::config::GeneratorConfig;

/// Static placeholder asset returned alongside generated text until real
/// illustrations are produced.
pub const PLACEHOLDER_ILLUSTRATION_URL: &str =
    "https://placehold.co/600x400?text=Heritage+Illustration";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Content generation errors
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Provider response contained no text")]
    MissingText,

    #[error("Missing API key (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Content generation failed after {attempts} attempt(s): {last_error}")]
    RetryExhausted {
        attempts: usize,
        #[source]
        last_error: Box<GeneratorError>,
    },
}

// Gemini API structs (private)

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorResponse {
    error: Option<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    code: u16,
    message: String,
}

/// Gemini text-generation client.
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    client: Client,
    config: GeneratorConfig,
    api_key: Option<String>,
    base_url: String,
}

impl ContentGenerator {
    /// Build the client from configuration. A missing API key is not fatal
    /// here; it fails the individual generation call instead of startup.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing / integration)
    pub fn with_base_url(config: GeneratorConfig, base_url: String) -> Result<Self, GeneratorError> {
        let mut generator = Self::new(config)?;
        generator.base_url = base_url;
        Ok(generator)
    }

    /// Generate descriptive text for a POI from its name and description
    /// seed. Retries once (configurable) before giving up.
    pub async fn generate(&self, poi_name: &str, seed: &str) -> Result<String, GeneratorError> {
        // A missing key cannot succeed on a second attempt; fail before the
        // retry loop instead of stalling on a pointless backoff
        if self.api_key.is_none() {
            return Err(GeneratorError::MissingApiKey);
        }

        let prompt = build_prompt(poi_name, seed);

        let retry_strategy = ExponentialBackoff::from_millis(self.config.retry_delay_ms)
            .max_delay(Duration::from_secs(10))
            .map(jitter)
            .take(self.config.max_retries);

        let result = Retry::spawn(retry_strategy, || self.generate_once(&prompt)).await;

        match result {
            Ok(text) => Ok(text),
            Err(e) => {
                let attempts = self.config.max_retries + 1;
                tracing::error!(attempts, error = %e, "Content generation attempts exhausted");
                Err(GeneratorError::RetryExhausted {
                    attempts,
                    last_error: Box::new(e),
                })
            }
        }
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, GeneratorError> {
        let api_key = self.api_key.as_deref().ok_or(GeneratorError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let error_detail = serde_json::from_str::<ProviderErrorResponse>(&error_body)
                .ok()
                .and_then(|e| e.error);

            let (code, message) = error_detail
                .map(|e| (e.code, e.message))
                .unwrap_or((status.as_u16(), error_body));

            tracing::error!(code, message = %message, "Content provider error");

            return Err(GeneratorError::Api { code, message });
        }

        let generated: GenerateResponse = response.json().await?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GeneratorError::MissingText)
    }
}

/// Build the provider prompt from a POI's name and stored description seed.
pub fn build_prompt(poi_name: &str, seed: &str) -> String {
    format!(
        "You are a cultural heritage guide. Write a short, engaging description \
         of the point of interest \"{}\" for an augmented reality visitor. \
         Context: {}",
        poi_name, seed
    )
}
