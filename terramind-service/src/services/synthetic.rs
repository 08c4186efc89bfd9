//! Synthetic report generation for demo mode.
//!
//! Produces a plausible analysis without touching the model: the region
//! branch is deterministic for fixed coordinates, the numeric fields are
//! sampled fresh on every call.

use crate::models::{
    AgriculturalIndicators, AnalysisMetadata, AnalysisReport, AnalyzeRequest, AnalyzeResponse,
    ChangeDetection, ChangeHotspot, CoastalIndicators, Coordinates, EnvironmentalAssessment,
    HumanImpactFactors, LandCoverChanges, LandUseClassification, PredictiveInsights, RiskFactor,
    StressIndicators, SustainabilityIndicators, TemporalAnalysis, TemporalTrends,
    UrbanChangeIndicators, VegetationHealth, PROCESSED_MODALITIES,
};
use crate::services::geo::{self, RegionKind};
use chrono::Utc;
use rand::Rng;
use std::collections::BTreeMap;

/// Synthesize a full demo-mode response for a request.
pub fn demo_response(model: &str, request: &AnalyzeRequest) -> AnalyzeResponse {
    let Coordinates { lat, lng } = request.coordinates;
    let region = geo::classify(lat, lng);
    let mut rng = rand::thread_rng();

    let analysis = AnalysisReport {
        land_use_classification: land_use(region, &mut rng),
        vegetation_health: vegetation_health(&mut rng),
        change_detection: change_detection(&mut rng),
        environmental_assessment: environmental_assessment(&mut rng),
        multimodal_confidence: round_to(rng.gen_range(0.75..0.95), 3),
        geospatial_insights: insights(&request.query),
        risk_factors: risk_factors(region),
    };

    AnalyzeResponse {
        success: true,
        model: model.to_string(),
        mode: "demo".to_string(),
        analysis,
        metadata: AnalysisMetadata {
            timestamp: Utc::now(),
            coordinates: request.coordinates,
            analysis_type: request.analysis_type.clone(),
            modalities_processed: PROCESSED_MODALITIES.iter().map(|m| m.to_string()).collect(),
            processing_time: round_to(rng.gen_range(1.2..3.5), 2),
        },
    }
}

fn land_use(region: RegionKind, rng: &mut impl Rng) -> LandUseClassification {
    match region {
        RegionKind::Urban => LandUseClassification {
            primary_class: "urban".to_string(),
            confidence: 0.87,
            classes: class_shares(
                rng,
                &[
                    ("urban", 45.0..65.0),
                    ("vegetation", 20.0..35.0),
                    ("water", 5.0..15.0),
                    ("agriculture", 5.0..15.0),
                    ("bare_soil", 2.0..8.0),
                ],
            ),
            change_indicators: Some(UrbanChangeIndicators {
                urban_expansion: "+2.3% annually".to_string(),
                vegetation_loss: "-1.8% annually".to_string(),
            }),
            coastal_indicators: None,
            agricultural_indicators: None,
        },
        RegionKind::Coastal => LandUseClassification {
            primary_class: "coastal_mixed".to_string(),
            confidence: 0.82,
            classes: class_shares(
                rng,
                &[
                    ("water", 35.0..55.0),
                    ("vegetation", 25.0..40.0),
                    ("urban", 15.0..25.0),
                    ("sand", 5.0..15.0),
                    ("agriculture", 3.0..10.0),
                ],
            ),
            change_indicators: None,
            coastal_indicators: Some(CoastalIndicators {
                erosion_rate: "0.5m/year".to_string(),
                water_quality: "moderate".to_string(),
            }),
            agricultural_indicators: None,
        },
        RegionKind::Rural => LandUseClassification {
            primary_class: "agricultural".to_string(),
            confidence: 0.91,
            classes: class_shares(
                rng,
                &[
                    ("agriculture", 50.0..70.0),
                    ("vegetation", 20.0..35.0),
                    ("water", 3.0..10.0),
                    ("urban", 2.0..8.0),
                    ("bare_soil", 5.0..15.0),
                ],
            ),
            change_indicators: None,
            coastal_indicators: None,
            agricultural_indicators: Some(AgriculturalIndicators {
                crop_health: "good".to_string(),
                irrigation_efficiency: "moderate".to_string(),
            }),
        },
    }
}

fn vegetation_health(rng: &mut impl Rng) -> VegetationHealth {
    let ndvi = rng.gen_range(0.3..0.8);

    VegetationHealth {
        ndvi_score: round_to(ndvi, 3),
        health_category: health_category(ndvi).to_string(),
        stress_indicators: StressIndicators {
            drought_stress: if ndvi > 0.6 { "low" } else { "moderate" }.to_string(),
            disease_pressure: pick(rng, &["low", "moderate"]),
            nutrient_status: pick(rng, &["adequate", "deficient"]),
        },
        temporal_trends: TemporalTrends {
            six_month_change: format!("{:+.1}%", rng.gen_range(-5.0..10.0)),
            seasonal_pattern: "normal".to_string(),
            growth_trajectory: pick(rng, &["stable", "improving", "declining"]),
        },
        recommendations: recommendations(ndvi),
    }
}

/// NDVI bucketing used for the health label.
pub fn health_category(ndvi: f64) -> &'static str {
    if ndvi > 0.7 {
        "excellent"
    } else if ndvi > 0.5 {
        "good"
    } else if ndvi > 0.3 {
        "moderate"
    } else if ndvi > 0.1 {
        "poor"
    } else {
        "very_poor"
    }
}

fn recommendations(ndvi: f64) -> Vec<String> {
    let lines: [&str; 3] = if ndvi < 0.3 {
        [
            "Consider soil health improvement programs",
            "Implement water conservation measures",
            "Monitor for pest and disease pressure",
        ]
    } else if ndvi < 0.6 {
        [
            "Maintain current management practices",
            "Monitor seasonal variations",
            "Consider precision agriculture techniques",
        ]
    } else {
        [
            "Excellent vegetation health detected",
            "Continue current conservation practices",
            "Consider this area for biodiversity studies",
        ]
    };

    lines.iter().map(|l| l.to_string()).collect()
}

fn change_detection(rng: &mut impl Rng) -> ChangeDetection {
    ChangeDetection {
        temporal_analysis: TemporalAnalysis {
            analysis_period: "12 months".to_string(),
            significant_changes: round_to(rng.gen_range(5.0..25.0), 1),
            change_confidence: round_to(rng.gen_range(0.8..0.95), 3),
        },
        land_cover_changes: LandCoverChanges {
            deforestation: format!("{:.1}%", rng.gen_range(0.0..3.0)),
            urban_expansion: format!("{:.1}%", rng.gen_range(1.0..8.0)),
            water_body_changes: format!("{:+.1}%", rng.gen_range(-2.0..2.0)),
            agricultural_conversion: format!("{:+.1}%", rng.gen_range(-1.0..5.0)),
        },
        hotspots: vec![
            ChangeHotspot {
                kind: "urban_development".to_string(),
                intensity: "high".to_string(),
                area: format!("{:.0} hectares", rng.gen_range(50.0..200.0)),
            },
            ChangeHotspot {
                kind: "vegetation_change".to_string(),
                intensity: "moderate".to_string(),
                area: format!("{:.0} hectares", rng.gen_range(100.0..500.0)),
            },
        ],
    }
}

fn environmental_assessment(rng: &mut impl Rng) -> EnvironmentalAssessment {
    EnvironmentalAssessment {
        environmental_score: round_to(rng.gen_range(6.5..9.2), 1),
        sustainability_indicators: SustainabilityIndicators {
            carbon_sequestration: format!("{:.0} kg CO2/ha/year", rng.gen_range(50.0..150.0)),
            biodiversity_index: round_to(rng.gen_range(0.6..0.9), 2),
            ecosystem_health: pick(rng, &["excellent", "good", "moderate"]),
        },
        human_impact_factors: HumanImpactFactors {
            pollution_pressure: pick(rng, &["low", "moderate", "high"]),
            development_pressure: pick(rng, &["low", "moderate", "high"]),
            resource_exploitation: pick(rng, &["sustainable", "moderate", "intensive"]),
        },
        predictive_insights: PredictiveInsights {
            five_year_outlook: pick(rng, &["stable", "improving", "declining"]),
            risk_factors: vec![
                "climate_change".to_string(),
                "urban_expansion".to_string(),
                "water_stress".to_string(),
            ],
            opportunities: vec![
                "conservation".to_string(),
                "sustainable_development".to_string(),
                "restoration".to_string(),
            ],
        },
    }
}

/// Query-keyword driven insight lines.
pub fn insights(query: &str) -> Vec<String> {
    let q = query.to_lowercase();

    let lines: [&str; 3] = if q.contains("fishing") {
        [
            "Coastal water quality analysis indicates safe fishing conditions",
            "Satellite data shows stable marine ecosystem health",
            "No significant pollution indicators detected in water bodies",
        ]
    } else if q.contains("water") {
        [
            "Multi-spectral analysis reveals water body health status",
            "NDWI indicators show adequate water availability",
            "No significant contamination detected in satellite imagery",
        ]
    } else if q.contains("development") {
        [
            "Land use change analysis shows development patterns",
            "Urban expansion rate within sustainable limits",
            "Environmental impact assessment suggests moderate pressure",
        ]
    } else {
        [
            "Comprehensive satellite analysis completed",
            "Multi-temporal change detection reveals stable conditions",
            "Environmental health indicators within normal ranges",
        ]
    };

    lines.iter().map(|l| l.to_string()).collect()
}

fn risk_factors(region: RegionKind) -> Vec<RiskFactor> {
    let entries: [(&str, &str, f64); 3] = match region {
        RegionKind::Urban => [
            ("air_pollution", "moderate", 0.82),
            ("urban_heat_island", "high", 0.78),
            ("water_stress", "moderate", 0.75),
        ],
        RegionKind::Coastal => [
            ("sea_level_rise", "moderate", 0.85),
            ("coastal_erosion", "low", 0.72),
            ("storm_surge", "moderate", 0.80),
        ],
        RegionKind::Rural => [
            ("drought_risk", "low", 0.88),
            ("soil_degradation", "moderate", 0.75),
            ("biodiversity_loss", "low", 0.82),
        ],
    };

    entries
        .iter()
        .map(|&(kind, level, confidence)| RiskFactor {
            kind: kind.to_string(),
            level: level.to_string(),
            confidence,
        })
        .collect()
}

fn class_shares(
    rng: &mut impl Rng,
    ranges: &[(&str, std::ops::Range<f64>)],
) -> BTreeMap<String, f64> {
    ranges
        .iter()
        .map(|(class, range)| (class.to_string(), round_to(rng.gen_range(range.clone()), 1)))
        .collect()
}

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options[rng.gen_range(0..options.len())].to_string()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
