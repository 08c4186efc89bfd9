//! TerraMind inference provider.
//!
//! Forwards the request and a task prompt to a hosted TerraMind endpoint
//! and relays its structured report. Model internals live on the other side
//! of this HTTP call.

use super::{InferenceProvider, ProviderError};
use crate::models::{AnalysisReport, AnalyzeRequest, Coordinates};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// TerraMind provider configuration.
#[derive(Debug, Clone)]
pub struct TerraMindConfig {
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Remote TerraMind provider.
pub struct TerraMindProvider {
    config: TerraMindConfig,
    client: Client,
}

/// Wire format of an inference call.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    prompt: String,
    query: &'a str,
    satellite_data: &'a serde_json::Value,
    coordinates: Coordinates,
    analysis_type: &'a str,
}

impl TerraMindProvider {
    pub fn new(config: TerraMindConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the multimodal task prompt for a request.
    fn build_prompt(&self, request: &AnalyzeRequest) -> String {
        format!(
            "Geospatial Analysis Task:\n\
             Query: {}\n\
             Location: {:.4}, {:.4}\n\
             Analysis Type: {}\n\
             \n\
             Analyze the satellite data and provide:\n\
             1. Land use classification with confidence scores\n\
             2. Vegetation health assessment using NDVI\n\
             3. Change detection over temporal period\n\
             4. Environmental risk assessment\n\
             5. Specific insights for the query context\n\
             \n\
             Focus on actionable insights for non-expert users.",
            request.query,
            request.coordinates.lat,
            request.coordinates.lng,
            request.analysis_type,
        )
    }
}

#[async_trait]
impl InferenceProvider for TerraMindProvider {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, ProviderError> {
        let body = InferenceRequest {
            model: &self.config.model,
            prompt: self.build_prompt(request),
            query: &request.query,
            satellite_data: &request.satellite_data,
            coordinates: request.coordinates,
            analysis_type: &request.analysis_type,
        };

        tracing::debug!(
            model = %self.config.model,
            endpoint = %self.config.endpoint,
            "Sending request to TerraMind endpoint"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "TerraMind endpoint error {}: {}",
                status, error_text
            )));
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse report: {}", e)))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.endpoint.is_empty() {
            return Err(ProviderError::NotConfigured(
                "TerraMind endpoint not set".to_string(),
            ));
        }
        Ok(())
    }
}
