//! Inference provider abstraction.
//!
//! The production path is a thin pass-through to a hosted TerraMind
//! endpoint; everything behind this trait can be swapped out without
//! touching the analyzer.

pub mod terramind;

use crate::models::{AnalysisReport, AnalyzeRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Stable label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::InvalidRequest(_) => "invalid_request",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::NetworkError(_) => "network_error",
        }
    }
}

/// Trait for geospatial inference backends.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Run a full analysis and return the structured report.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
