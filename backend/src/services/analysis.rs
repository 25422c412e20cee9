//! Meal image analysis via a local inference endpoint
//!
//! The analyzer receives a meal photo as a base64 data URI and returns
//! estimated nutrition numbers. The production implementation talks to an
//! Ollama-compatible vision model; when inference is switched off in
//! configuration a disabled stand-in rejects every request with a clear
//! error instead of guessing.

use crate::config::AiConfig;
use crate::error::ApiError;
use anyhow::Result;
use async_trait::async_trait;
use calsnap_shared::types::MealAnalysis;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced while analyzing a meal photo
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid photo data URI: {0}")]
    InvalidDataUri(String),

    #[error("image analysis is disabled")]
    Disabled,

    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("inference response malformed: {0}")]
    Malformed(String),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidDataUri(msg) => ApiError::BadRequest(msg),
            AnalysisError::Disabled => {
                ApiError::BadRequest("image analysis is not enabled on this server".to_string())
            }
            AnalysisError::Request(e) => ApiError::Upstream(e.to_string()),
            AnalysisError::Malformed(msg) => ApiError::Upstream(msg),
        }
    }
}

/// Split a `data:<mimetype>;base64,<data>` URI into its mime type and payload
pub(crate) fn split_data_uri(uri: &str) -> Result<(&str, &str), AnalysisError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| AnalysisError::InvalidDataUri("missing data: prefix".to_string()))?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| AnalysisError::InvalidDataUri("missing base64 marker".to_string()))?;

    if payload.is_empty() {
        return Err(AnalysisError::InvalidDataUri(
            "empty base64 payload".to_string(),
        ));
    }

    Ok((mime, payload))
}

/// Estimates nutrition for a photographed meal
#[async_trait]
pub trait MealImageAnalyzer: Send + Sync {
    /// Analyze a meal photo given as a base64 data URI
    async fn analyze(&self, photo_data_uri: &str) -> Result<MealAnalysis, AnalysisError>;
}

const ANALYSIS_PROMPT: &str = "You are a nutrition expert. Analyze the food in this image and \
estimate its nutritional content. Respond with a JSON object containing exactly these numeric \
fields: calories, protein_g, fat_g, carbohydrates_g.";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    images: Vec<&'a str>,
    stream: bool,
    format: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Analyzer backed by an Ollama-compatible `/api/generate` endpoint
pub struct OllamaAnalyzer {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaAnalyzer {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl MealImageAnalyzer for OllamaAnalyzer {
    async fn analyze(&self, photo_data_uri: &str) -> Result<MealAnalysis, AnalysisError> {
        let (mime, payload) = split_data_uri(photo_data_uri)?;
        debug!(model = %self.model, mime, "requesting meal analysis");

        let request = GenerateRequest {
            model: &self.model,
            prompt: ANALYSIS_PROMPT,
            images: vec![payload],
            stream: false,
            format: "json",
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;

        // The model answers with a JSON document inside the response string.
        serde_json::from_str(body.response.trim()).map_err(|e| {
            warn!(error = %e, "inference returned unparseable nutrition payload");
            AnalysisError::Malformed(format!("unparseable nutrition payload: {e}"))
        })
    }
}

/// Stand-in used when inference is disabled in configuration
pub struct DisabledAnalyzer;

#[async_trait]
impl MealImageAnalyzer for DisabledAnalyzer {
    async fn analyze(&self, _photo_data_uri: &str) -> Result<MealAnalysis, AnalysisError> {
        Err(AnalysisError::Disabled)
    }
}
