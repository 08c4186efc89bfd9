//! Structured analysis report returned by `/analyze`.
//!
//! The shapes mirror what the TerraMind endpoint produces so the production
//! path can relay its output verbatim; the demo generator fills the same
//! types locally.

use super::request::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input modalities consumed per analysis, reported in response metadata.
pub const PROCESSED_MODALITIES: [&str; 4] = ["optical", "sar", "climate", "text"];

/// Top-level response envelope for `/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub model: String,
    /// Which path produced the data: "demo" or "production". A production
    /// request that fell back reports "demo".
    pub mode: String,
    pub analysis: AnalysisReport,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub land_use_classification: LandUseClassification,
    pub vegetation_health: VegetationHealth,
    pub change_detection: ChangeDetection,
    pub environmental_assessment: EnvironmentalAssessment,
    pub multimodal_confidence: f64,
    pub geospatial_insights: Vec<String>,
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub analysis_type: String,
    pub modalities_processed: Vec<String>,
    /// Seconds spent producing the report.
    pub processing_time: f64,
}

/// Land-use breakdown with one indicator block per region kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseClassification {
    pub primary_class: String,
    pub confidence: f64,
    /// Class name to percentage of the analyzed area.
    pub classes: BTreeMap<String, f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_indicators: Option<UrbanChangeIndicators>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal_indicators: Option<CoastalIndicators>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agricultural_indicators: Option<AgriculturalIndicators>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrbanChangeIndicators {
    pub urban_expansion: String,
    pub vegetation_loss: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoastalIndicators {
    pub erosion_rate: String,
    pub water_quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgriculturalIndicators {
    pub crop_health: String,
    pub irrigation_efficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VegetationHealth {
    /// Normalized Difference Vegetation Index, 0..1.
    pub ndvi_score: f64,
    pub health_category: String,
    pub stress_indicators: StressIndicators,
    pub temporal_trends: TemporalTrends,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressIndicators {
    pub drought_stress: String,
    pub disease_pressure: String,
    pub nutrient_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalTrends {
    #[serde(rename = "6_month_change")]
    pub six_month_change: String,
    pub seasonal_pattern: String,
    pub growth_trajectory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeDetection {
    pub temporal_analysis: TemporalAnalysis,
    pub land_cover_changes: LandCoverChanges,
    pub hotspots: Vec<ChangeHotspot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    pub analysis_period: String,
    pub significant_changes: f64,
    pub change_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandCoverChanges {
    pub deforestation: String,
    pub urban_expansion: String,
    pub water_body_changes: String,
    pub agricultural_conversion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeHotspot {
    #[serde(rename = "type")]
    pub kind: String,
    pub intensity: String,
    pub area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalAssessment {
    pub environmental_score: f64,
    pub sustainability_indicators: SustainabilityIndicators,
    pub human_impact_factors: HumanImpactFactors,
    pub predictive_insights: PredictiveInsights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilityIndicators {
    pub carbon_sequestration: String,
    pub biodiversity_index: f64,
    pub ecosystem_health: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanImpactFactors {
    pub pollution_pressure: String,
    pub development_pressure: String,
    pub resource_exploitation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveInsights {
    #[serde(rename = "5_year_outlook")]
    pub five_year_outlook: String,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: String,
    pub level: String,
    pub confidence: f64,
}
