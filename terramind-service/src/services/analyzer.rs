//! Analysis orchestration: mode selection and the demo fallback.

use crate::models::{
    AnalysisMetadata, AnalysisReport, AnalyzeRequest, AnalyzeResponse, PROCESSED_MODALITIES,
};
use crate::services::providers::{InferenceProvider, ProviderError};
use crate::services::{metrics, synthetic};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Runs analyses. Holds the production provider when one is configured;
/// without one, every request takes the demo path.
pub struct Analyzer {
    model: String,
    provider: Option<Arc<dyn InferenceProvider>>,
}

impl Analyzer {
    pub fn new(model: String, provider: Option<Arc<dyn InferenceProvider>>) -> Self {
        Self { model, provider }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The configured mode, as reported by `/health`.
    pub fn mode(&self) -> &'static str {
        if self.provider.is_some() {
            "production"
        } else {
            "demo"
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.provider.is_some()
    }

    /// Run one analysis. Never fails: any production error falls back to the
    /// synthetic generator.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> AnalyzeResponse {
        let started = Instant::now();

        let response = match &self.provider {
            Some(provider) => match provider.analyze(request).await {
                Ok(report) => self.production_response(report, request, started.elapsed()),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "TerraMind inference failed, falling back to synthetic report"
                    );
                    metrics::record_fallback(err.label());
                    synthetic::demo_response(&self.model, request)
                }
            },
            None => synthetic::demo_response(&self.model, request),
        };

        let elapsed = started.elapsed();
        metrics::record_analysis(&response.mode, &request.analysis_type, elapsed.as_secs_f64());
        tracing::info!(
            elapsed_ms = elapsed.as_millis() as u64,
            mode = %response.mode,
            analysis_type = %request.analysis_type,
            "analysis completed"
        );

        response
    }

    /// Readiness of the underlying provider; demo mode is always ready.
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.provider {
            Some(provider) => provider.health_check().await,
            None => Ok(()),
        }
    }

    fn production_response(
        &self,
        report: AnalysisReport,
        request: &AnalyzeRequest,
        elapsed: Duration,
    ) -> AnalyzeResponse {
        AnalyzeResponse {
            success: true,
            model: self.model.clone(),
            mode: "production".to_string(),
            analysis: report,
            metadata: AnalysisMetadata {
                timestamp: Utc::now(),
                coordinates: request.coordinates,
                analysis_type: request.analysis_type.clone(),
                modalities_processed: PROCESSED_MODALITIES
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
                processing_time: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl InferenceProvider for FailingProvider {
        async fn analyze(
            &self,
            _request: &AnalyzeRequest,
        ) -> Result<AnalysisReport, ProviderError> {
            Err(ProviderError::NetworkError("connection refused".to_string()))
        }

        async fn health_check(&self) -> Result<(), ProviderError> {
            Err(ProviderError::NetworkError("connection refused".to_string()))
        }
    }

    fn request() -> AnalyzeRequest {
        serde_json::from_str("{}").unwrap()
    }

    #[tokio::test]
    async fn demo_analyzer_serves_synthetic_reports() {
        let analyzer = Analyzer::new("TerraMind-1.0-large".to_string(), None);

        assert_eq!(analyzer.mode(), "demo");
        assert!(!analyzer.model_loaded());

        let response = analyzer.analyze(&request()).await;
        assert!(response.success);
        assert_eq!(response.mode, "demo");
    }

    #[tokio::test]
    async fn failed_inference_falls_back_to_demo() {
        let analyzer = Analyzer::new(
            "TerraMind-1.0-large".to_string(),
            Some(Arc::new(FailingProvider)),
        );

        assert_eq!(analyzer.mode(), "production");

        let response = analyzer.analyze(&request()).await;
        assert!(response.success);
        assert_eq!(response.mode, "demo");
        assert_eq!(
            response.analysis.land_use_classification.primary_class,
            "agricultural"
        );
    }

    #[tokio::test]
    async fn demo_analyzer_is_always_ready() {
        let analyzer = Analyzer::new("TerraMind-1.0-large".to_string(), None);
        assert!(analyzer.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn broken_provider_reports_unready() {
        let analyzer = Analyzer::new(
            "TerraMind-1.0-large".to_string(),
            Some(Arc::new(FailingProvider)),
        );
        assert!(analyzer.health_check().await.is_err());
    }
}
