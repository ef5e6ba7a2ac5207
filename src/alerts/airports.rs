//! Diversion airport fixture for the simulated LA-basin cruise segment.

use super::NearestAirport;

/// Candidates attached to every critical alert. The primary (longest
/// runway, full services) leads the list.
pub fn diversion_candidates() -> Vec<NearestAirport> {
    vec![
        NearestAirport {
            code: "LAX",
            name: "Los Angeles International",
            distance_nm: 45,
            bearing_deg: 270,
            runway_length_ft: 12091,
            emergency_services: true,
            weather: "Clear, 10SM visibility, winds 250/08",
            eta_min: 12,
        },
        NearestAirport {
            code: "BUR",
            name: "Hollywood Burbank",
            distance_nm: 38,
            bearing_deg: 285,
            runway_length_ft: 6886,
            emergency_services: true,
            weather: "Clear, 10SM visibility, winds 260/06",
            eta_min: 10,
        },
        NearestAirport {
            code: "LGB",
            name: "Long Beach Airport",
            distance_nm: 52,
            bearing_deg: 255,
            runway_length_ft: 10000,
            emergency_services: false,
            weather: "Hazy, 8SM visibility, winds 240/12",
            eta_min: 14,
        },
    ]
}
