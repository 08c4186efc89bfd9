//! Coordinate-based region classification.
//!
//! Distances are Euclidean in degrees scaled by ~111 km/degree, which is
//! coarse but stable; the radii below were tuned against that approximation.

/// Degrees-to-kilometres conversion factor.
const DEG_TO_KM: f64 = 111.0;

/// (lat, lng, radius_km) of major urban centers.
const URBAN_CENTERS: [(f64, f64, f64); 4] = [
    (13.0827, 80.2707, 50.0), // Chennai
    (12.9716, 77.5946, 50.0), // Bangalore
    (19.0760, 72.8777, 50.0), // Mumbai
    (28.7041, 77.1025, 50.0), // Delhi
];

/// (lat, lng, radius_km) of coastal regions.
const COASTAL_REGIONS: [(f64, f64, f64); 3] = [
    (13.0827, 80.2707, 30.0), // Chennai coast
    (19.0760, 72.8777, 20.0), // Mumbai coast
    (11.9416, 79.8083, 15.0), // Pondicherry coast
];

/// The land-context buckets the report templates branch on. Urban wins over
/// coastal when a point is inside both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Urban,
    Coastal,
    Rural,
}

/// Classify a coordinate pair. Deterministic for fixed input.
pub fn classify(lat: f64, lng: f64) -> RegionKind {
    if within_any(lat, lng, &URBAN_CENTERS) {
        RegionKind::Urban
    } else if within_any(lat, lng, &COASTAL_REGIONS) {
        RegionKind::Coastal
    } else {
        RegionKind::Rural
    }
}

fn within_any(lat: f64, lng: f64, centers: &[(f64, f64, f64)]) -> bool {
    centers.iter().any(|&(center_lat, center_lng, radius_km)| {
        let d_lat = lat - center_lat;
        let d_lng = lng - center_lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt() * DEG_TO_KM <= radius_km
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metro_centers_are_urban() {
        assert_eq!(classify(19.0760, 72.8777), RegionKind::Urban); // Mumbai
        assert_eq!(classify(28.7041, 77.1025), RegionKind::Urban); // Delhi
        assert_eq!(classify(12.9716, 77.5946), RegionKind::Urban); // Bangalore
    }

    #[test]
    fn urban_wins_over_coastal() {
        // Chennai is in both lists; the urban bucket takes precedence.
        assert_eq!(classify(13.0827, 80.2707), RegionKind::Urban);
    }

    #[test]
    fn pondicherry_is_coastal() {
        assert_eq!(classify(11.9416, 79.8083), RegionKind::Coastal);
    }

    #[test]
    fn inland_points_are_rural() {
        assert_eq!(classify(26.9124, 75.7873), RegionKind::Rural); // Jaipur
        assert_eq!(classify(0.0, 0.0), RegionKind::Rural);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(classify(11.9416, 79.8083), RegionKind::Coastal);
        }
    }
}
