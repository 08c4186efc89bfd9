pub mod capabilities;
pub mod report;
pub mod request;

pub use capabilities::Capabilities;
pub use report::{
    AgriculturalIndicators, AnalysisMetadata, AnalysisReport, AnalyzeResponse, ChangeDetection,
    ChangeHotspot, CoastalIndicators, EnvironmentalAssessment, HumanImpactFactors,
    LandCoverChanges, LandUseClassification, PredictiveInsights, RiskFactor, StressIndicators,
    SustainabilityIndicators, TemporalAnalysis, TemporalTrends, UrbanChangeIndicators,
    VegetationHealth, PROCESSED_MODALITIES,
};
pub use request::{AnalyzeRequest, Coordinates};
