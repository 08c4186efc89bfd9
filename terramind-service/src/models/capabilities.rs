//! Static capability advertisement for `/capabilities`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub model: String,
    pub modalities: Vec<&'static str>,
    pub analysis_types: Vec<&'static str>,
    pub output_formats: Vec<&'static str>,
}

impl Capabilities {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            modalities: vec![
                "optical_imagery",
                "sar_radar",
                "climate_data",
                "land_use",
                "vegetation_indices",
                "text_description",
                "temporal_analysis",
                "change_detection",
                "environmental_assessment",
            ],
            analysis_types: vec![
                "fishing",
                "marine",
                "weather",
                "hiking",
                "driving",
                "agriculture",
                "urban_planning",
                "environmental_monitoring",
                "disaster_assessment",
            ],
            output_formats: vec![
                "land_use_classification",
                "vegetation_health",
                "change_detection",
                "environmental_assessment",
                "risk_analysis",
            ],
        }
    }
}
