//! Built-in Chennai road safety data, compiled from traffic police accident
//! statistics and road infrastructure reports.

use std::collections::BTreeMap;

use super::{
    ArterialRoad, ConstructionZone, EmergencyServiceArea, Frequency, Lighting, MaintenanceLevel, RiskLevel,
    RiskZone, RoadSegment, SafeZone, SaferAlternative, SafetyDataset, TimeSafetyFactor, TransportProfile,
};
use crate::geometry::Coordinate;
use crate::mode::TransportMode::{self, Bicycle, Bike, Car, Walking};
use crate::mode::WeatherCondition;
use crate::time::{TimeBand, TimeRange};

pub(super) fn dataset() -> SafetyDataset {
    SafetyDataset {
        roads: roads(),
        risk_zones: risk_zones(),
        safe_zones: safe_zones(),
        construction_zones: construction_zones(),
        emergency_services: emergency_services(),
        safer_alternatives: safer_alternatives(),
        time_factors: time_factors(),
        weather_factors: weather_factors(),
        transport_profiles: transport_profiles(),
        arterials: arterials(),
        ..Default::default()
    }
}

fn at((lat, lon): (f64, f64)) -> Coordinate {
    Coordinate::new(lat, lon)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn road(
    name: &str,
    safety_rating: u8,
    width_label: &str,
    width_meters: f64,
    accident_frequency: Frequency,
    lighting: Lighting,
    maintenance_level: MaintenanceLevel,
    speed_limit_kph: u32,
    modes: &[TransportMode],
    endpoints: [(f64, f64); 2],
) -> RoadSegment {
    RoadSegment {
        name: name.to_string(),
        safety_rating,
        width_label: width_label.to_string(),
        width_meters,
        accident_frequency,
        lighting,
        maintenance_level,
        speed_limit_kph,
        vehicle_compatibility: modes.iter().copied().collect(),
        endpoints: [at(endpoints[0]), at(endpoints[1])],
    }
}

fn risk_zone(
    name: &str,
    center: (f64, f64),
    radius_meters: f64,
    risk_level: RiskLevel,
    accident_types: &[&str],
    peak_hours: &[&str],
) -> RiskZone {
    RiskZone {
        name: name.to_string(),
        center: at(center),
        radius_meters,
        risk_level,
        accident_types: accident_types.iter().map(|s| (*s).to_string()).collect(),
        peak_hours: peak_hours
            .iter()
            .map(|r| r.parse::<TimeRange>().expect("built-in peak hours are well formed"))
            .collect(),
    }
}

fn roads() -> Vec<RoadSegment> {
    vec![
        road(
            "Anna Salai",
            8,
            "8-lane",
            32.0,
            Frequency::Low,
            Lighting::Excellent,
            MaintenanceLevel::High,
            60,
            &[Car, Bike, Bicycle, Walking],
            [(13.0827, 80.2707), (13.0527, 80.2507)],
        ),
        road(
            "OMR (Old Mahabalipuram Road)",
            9,
            "6-8 lane",
            28.0,
            Frequency::VeryLow,
            Lighting::Excellent,
            MaintenanceLevel::High,
            80,
            &[Car, Bike, Bicycle],
            [(12.9716, 80.2463), (12.8270, 80.2234)],
        ),
        road(
            "ECR (East Coast Road)",
            7,
            "4-6 lane",
            20.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            70,
            &[Car, Bike, Bicycle],
            [(13.0067, 80.2833), (12.7833, 80.2167)],
        ),
        road(
            "GST Road",
            6,
            "4-lane",
            16.0,
            Frequency::Medium,
            Lighting::Fair,
            MaintenanceLevel::Medium,
            60,
            &[Car, Bike, Bicycle],
            [(12.9833, 80.2167), (12.9167, 80.1333)],
        ),
        road(
            "Poonamallee High Road",
            5,
            "4-lane",
            14.0,
            Frequency::High,
            Lighting::Fair,
            MaintenanceLevel::Low,
            50,
            &[Car, Bike, Bicycle],
            [(13.0833, 80.2167), (13.1000, 80.1833)],
        ),
        road(
            "T Nagar Roads",
            4,
            "2-lane",
            8.0,
            Frequency::High,
            Lighting::Good,
            MaintenanceLevel::Medium,
            30,
            &[Bicycle, Walking],
            [(13.0417, 80.2333), (13.0450, 80.2400)],
        ),
        road(
            "Broadway - Chennai Central",
            3,
            "2-lane",
            6.0,
            Frequency::VeryHigh,
            Lighting::Poor,
            MaintenanceLevel::Low,
            25,
            &[Bicycle, Walking],
            [(13.0833, 80.2833), (13.0867, 80.2867)],
        ),
        road(
            "Mylapore Tank Area",
            4,
            "single-lane",
            4.0,
            Frequency::Medium,
            Lighting::Fair,
            MaintenanceLevel::Low,
            20,
            &[Walking],
            [(13.0333, 80.2667), (13.0367, 80.2700)],
        ),
        road(
            "Inner Ring Road",
            7,
            "6-lane",
            24.0,
            Frequency::Low,
            Lighting::Good,
            MaintenanceLevel::High,
            60,
            &[Car, Bike, Bicycle],
            [(13.0600, 80.2200), (13.0800, 80.2400)],
        ),
        road(
            "Outer Ring Road",
            8,
            "8-lane",
            30.0,
            Frequency::VeryLow,
            Lighting::Excellent,
            MaintenanceLevel::High,
            80,
            &[Car, Bike],
            [(12.9000, 80.1500), (13.1000, 80.3000)],
        ),
        road(
            "Rajiv Gandhi Salai (IT Expressway)",
            9,
            "8-lane",
            32.0,
            Frequency::VeryLow,
            Lighting::Excellent,
            MaintenanceLevel::High,
            80,
            &[Car, Bike, Bicycle],
            [(12.9716, 80.2463), (12.7895, 80.2234)],
        ),
        road(
            "Chennai Bypass",
            8,
            "6-lane",
            24.0,
            Frequency::Low,
            Lighting::Good,
            MaintenanceLevel::High,
            80,
            &[Car, Bike],
            [(13.1500, 80.1000), (13.0000, 80.3500)],
        ),
        road(
            "Arcot Road",
            6,
            "4-lane",
            16.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            60,
            &[Car, Bike, Bicycle],
            [(13.0600, 80.2000), (13.0400, 80.1600)],
        ),
        road(
            "Mount Road (Anna Salai Extension)",
            7,
            "6-lane",
            20.0,
            Frequency::Low,
            Lighting::Excellent,
            MaintenanceLevel::High,
            50,
            &[Car, Bike, Bicycle, Walking],
            [(13.0827, 80.2707), (13.0667, 80.2607)],
        ),
        road(
            "Adyar Main Road",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            40,
            &[Car, Bike, Bicycle, Walking],
            [(13.0067, 80.2572), (13.0167, 80.2672)],
        ),
        road(
            "Besant Nagar Beach Road",
            8,
            "4-lane",
            16.0,
            Frequency::Low,
            Lighting::Excellent,
            MaintenanceLevel::High,
            40,
            &[Car, Bike, Bicycle, Walking],
            [(12.9986, 80.2678), (12.9986, 80.2778)],
        ),
        road(
            "Velachery Main Road",
            5,
            "4-lane",
            12.0,
            Frequency::High,
            Lighting::Fair,
            MaintenanceLevel::Medium,
            40,
            &[Car, Bike, Bicycle],
            [(12.9816, 80.2209), (12.9916, 80.2309)],
        ),
        road(
            "Tambaram Main Road",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            50,
            &[Car, Bike, Bicycle],
            [(12.9249, 80.1000), (12.9349, 80.1100)],
        ),
        road(
            "Ambattur Industrial Estate Road",
            7,
            "4-lane",
            16.0,
            Frequency::Low,
            Lighting::Good,
            MaintenanceLevel::High,
            60,
            &[Car, Bike, Bicycle],
            [(13.1143, 80.1548), (13.1243, 80.1648)],
        ),
        road(
            "Guindy Industrial Estate",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            50,
            &[Car, Bike, Bicycle],
            [(13.0067, 80.2167), (13.0167, 80.2267)],
        ),
        road(
            "Parry's Corner Commercial Area",
            3,
            "2-lane",
            8.0,
            Frequency::VeryHigh,
            Lighting::Fair,
            MaintenanceLevel::Low,
            25,
            &[Bicycle, Walking],
            [(13.0878, 80.2785), (13.0978, 80.2885)],
        ),
        road(
            "Ritchie Street Electronics Market",
            2,
            "single-lane",
            6.0,
            Frequency::VeryHigh,
            Lighting::Poor,
            MaintenanceLevel::Low,
            20,
            &[Walking],
            [(13.0833, 80.2667), (13.0883, 80.2717)],
        ),
        road(
            "Pondy Bazaar",
            2,
            "single-lane",
            5.0,
            Frequency::VeryHigh,
            Lighting::Fair,
            MaintenanceLevel::Low,
            15,
            &[Walking],
            [(13.0417, 80.2333), (13.0467, 80.2383)],
        ),
        road(
            "Sardar Patel Road",
            7,
            "6-lane",
            20.0,
            Frequency::Low,
            Lighting::Good,
            MaintenanceLevel::High,
            60,
            &[Car, Bike, Bicycle],
            [(13.0600, 80.2500), (13.0700, 80.2600)],
        ),
        road(
            "Lloyds Road",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            50,
            &[Car, Bike, Bicycle, Walking],
            [(13.0567, 80.2367), (13.0667, 80.2467)],
        ),
        road(
            "Cathedral Road",
            8,
            "4-lane",
            16.0,
            Frequency::Low,
            Lighting::Excellent,
            MaintenanceLevel::High,
            40,
            &[Car, Bike, Bicycle, Walking],
            [(13.0533, 80.2533), (13.0633, 80.2633)],
        ),
        road(
            "Porur Main Road",
            7,
            "4-lane",
            16.0,
            Frequency::Low,
            Lighting::Good,
            MaintenanceLevel::High,
            60,
            &[Car, Bike, Bicycle],
            [(13.0378, 80.1561), (13.0478, 80.1661)],
        ),
        road(
            "Chromepet Main Road",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Fair,
            MaintenanceLevel::Medium,
            50,
            &[Car, Bike, Bicycle],
            [(12.9516, 80.1376), (12.9616, 80.1476)],
        ),
        road(
            "Avadi Main Road",
            6,
            "4-lane",
            14.0,
            Frequency::Medium,
            Lighting::Good,
            MaintenanceLevel::Medium,
            50,
            &[Car, Bike, Bicycle],
            [(13.1147, 80.0982), (13.1247, 80.1082)],
        ),
    ]
}

fn risk_zones() -> Vec<RiskZone> {
    vec![
        risk_zone(
            "Kathipara Junction",
            (12.9538, 80.1435),
            500.0,
            RiskLevel::VeryHigh,
            &["rear-end", "lane-change", "speeding"],
            &["08:00-10:00", "18:00-21:00"],
        ),
        risk_zone(
            "Adyar Signal",
            (13.0067, 80.2572),
            300.0,
            RiskLevel::High,
            &["signal-jumping", "pedestrian"],
            &["07:30-09:30", "17:30-20:30"],
        ),
        risk_zone(
            "Anna Nagar Roundabout",
            (13.0850, 80.2101),
            400.0,
            RiskLevel::High,
            &["roundabout-confusion", "speeding"],
            &["08:00-10:00", "19:00-21:00"],
        ),
        risk_zone(
            "Velachery Main Road",
            (12.9816, 80.2209),
            600.0,
            RiskLevel::MediumHigh,
            &["pedestrian", "two-wheeler"],
            &["08:30-10:30", "18:00-20:00"],
        ),
        risk_zone(
            "Guindy National Park Junction",
            (13.0067, 80.2333),
            400.0,
            RiskLevel::High,
            &["animal-crossing", "speeding", "visibility"],
            &["06:00-08:00", "18:00-20:00"],
        ),
        risk_zone(
            "Tambaram Railway Station Area",
            (12.9249, 80.1276),
            500.0,
            RiskLevel::VeryHigh,
            &["pedestrian", "auto-rickshaw", "congestion"],
            &["07:00-10:00", "17:00-20:00"],
        ),
        risk_zone(
            "Porur Junction",
            (13.0378, 80.1561),
            450.0,
            RiskLevel::High,
            &["signal-jumping", "lane-change", "heavy-vehicles"],
            &["08:00-10:00", "18:30-20:30"],
        ),
        risk_zone(
            "Vadapalani Metro Station",
            (13.0502, 80.2126),
            350.0,
            RiskLevel::High,
            &["pedestrian", "parking-chaos", "bus-conflict"],
            &["07:30-09:30", "17:30-19:30"],
        ),
        risk_zone(
            "T Nagar Bus Terminus",
            (13.0417, 80.2278),
            400.0,
            RiskLevel::VeryHigh,
            &["bus-conflict", "pedestrian", "congestion"],
            &["06:00-22:00"],
        ),
        risk_zone(
            "Koyambedu Bus Terminus",
            (13.0702, 80.1951),
            600.0,
            RiskLevel::VeryHigh,
            &["heavy-vehicles", "pedestrian", "congestion"],
            &["05:00-23:00"],
        ),
        risk_zone(
            "Egmore Railway Station",
            (13.0732, 80.2609),
            500.0,
            RiskLevel::High,
            &["pedestrian", "taxi-conflict", "congestion"],
            &["06:00-10:00", "16:00-21:00"],
        ),
        risk_zone(
            "Central Railway Station",
            (13.0833, 80.2753),
            600.0,
            RiskLevel::VeryHigh,
            &["pedestrian", "heavy-vehicles", "extreme-congestion"],
            &["05:00-23:00"],
        ),
        risk_zone(
            "Airport Entry/Exit",
            (12.9941, 80.1709),
            800.0,
            RiskLevel::MediumHigh,
            &["speeding", "lane-change", "tourist-confusion"],
            &["04:00-08:00", "20:00-24:00"],
        ),
        risk_zone(
            "Express Avenue Mall Junction",
            (13.0600, 80.2567),
            350.0,
            RiskLevel::High,
            &["pedestrian", "parking-chaos", "shopping-traffic"],
            &["10:00-22:00"],
        ),
        risk_zone(
            "Marina Beach Entrance",
            (13.0478, 80.2773),
            400.0,
            RiskLevel::MediumHigh,
            &["pedestrian", "parking-chaos", "tourist-traffic"],
            &["16:00-22:00"],
        ),
        risk_zone(
            "Valluvar Kottam Junction",
            (13.0502, 80.2403),
            300.0,
            RiskLevel::High,
            &["signal-jumping", "lane-change", "bus-conflict"],
            &["08:00-10:00", "18:00-20:00"],
        ),
        risk_zone(
            "Saidapet Bridge",
            (13.0231, 80.2231),
            250.0,
            RiskLevel::High,
            &["bridge-congestion", "lane-merge", "visibility"],
            &["07:30-09:30", "17:30-19:30"],
        ),
        risk_zone(
            "Pallavaram Thoraipakkam Road",
            (12.9675, 80.1975),
            500.0,
            RiskLevel::MediumHigh,
            &["speeding", "two-wheeler", "construction"],
            &["08:00-10:00", "18:00-20:00"],
        ),
        risk_zone(
            "Sholinganallur IT Park Area",
            (12.9010, 80.2279),
            600.0,
            RiskLevel::MediumHigh,
            &["office-rush", "parking-chaos", "speeding"],
            &["08:30-10:30", "18:00-20:00"],
        ),
        risk_zone(
            "Ambattur Industrial Estate Junction",
            (13.1143, 80.1548),
            400.0,
            RiskLevel::High,
            &["heavy-vehicles", "industrial-traffic", "dust-visibility"],
            &["06:00-09:00", "17:00-19:00"],
        ),
        risk_zone(
            "Poonamallee High Road - Red Hills Junction",
            (13.0900, 80.1800),
            450.0,
            RiskLevel::High,
            &["signal-jumping", "heavy-vehicles", "road-condition"],
            &["07:00-09:00", "18:00-20:00"],
        ),
        risk_zone(
            "Chromepet Railway Crossing",
            (12.9516, 80.1376),
            300.0,
            RiskLevel::VeryHigh,
            &["railway-crossing", "queue-jumping", "impatience-accidents"],
            &["07:00-09:00", "17:00-19:00"],
        ),
        risk_zone(
            "Avadi Military Area Junction",
            (13.1147, 80.0982),
            350.0,
            RiskLevel::MediumHigh,
            &["security-checks", "heavy-vehicles", "restricted-movement"],
            &["06:00-08:00", "17:00-19:00"],
        ),
        risk_zone(
            "Washermanpet Industrial Area",
            (13.0967, 80.2833),
            500.0,
            RiskLevel::High,
            &["heavy-vehicles", "narrow-roads", "industrial-hazards"],
            &["06:00-09:00", "17:00-19:00"],
        ),
    ]
}

fn safe_zones() -> Vec<SafeZone> {
    let zones: [(&str, (f64, f64), f64, f64, &[&str]); 6] = [
        ("Anna University Campus", (13.0067, 80.2356), 800.0, 3.0, &["security", "well-lit", "maintained-roads", "low-traffic"]),
        ("IIT Madras Campus", (13.0067, 80.2356), 1000.0, 4.0, &["security", "excellent-roads", "minimal-traffic", "emergency-services"]),
        ("Guindy National Park", (13.0067, 80.2333), 1200.0, 2.0, &["natural-area", "controlled-access", "animal-crossing-risk"]),
        ("Besant Nagar Beach Area", (12.9986, 80.2678), 600.0, 3.0, &["police-patrol", "well-lit", "tourist-area"]),
        ("Express Avenue Mall Complex", (13.0600, 80.2567), 400.0, 2.0, &["security", "cctv", "congestion-risk"]),
        ("Phoenix MarketCity Area", (13.0836, 80.2101), 500.0, 2.0, &["security", "wide-roads", "parking-chaos"]),
    ];

    zones
        .into_iter()
        .map(|(name, center, radius_meters, bonus, features)| SafeZone {
            name: name.to_string(),
            center: at(center),
            radius_meters,
            bonus,
            features: strings(features),
        })
        .collect()
}

fn construction_zones() -> Vec<ConstructionZone> {
    let zones: [(&str, (f64, f64), f64, f64, &str, &[&str]); 4] = [
        ("Chennai Metro Phase 2 - Corridor 3", (13.0502, 80.2126), 300.0, -2.0, "2024-2026", &["road-closure", "dust", "heavy-machinery"]),
        ("Chennai Metro - Airport Extension", (12.9941, 80.1709), 500.0, -2.0, "2024-2025", &["lane-reduction", "diversions", "dust"]),
        ("Flyover Construction - Vadapalani", (13.0502, 80.2126), 400.0, -3.0, "2024-2025", &["road-closure", "debris", "heavy-vehicles"]),
        ("Road Widening - Velachery", (12.9816, 80.2209), 600.0, -2.0, "2024-2025", &["lane-reduction", "uneven-surface"]),
    ];

    zones
        .into_iter()
        .map(|(name, center, radius_meters, penalty, duration, hazards)| ConstructionZone {
            name: name.to_string(),
            center: at(center),
            radius_meters,
            penalty,
            duration: duration.to_string(),
            hazards: strings(hazards),
        })
        .collect()
}

fn emergency_services() -> Vec<EmergencyServiceArea> {
    let areas: [(&str, (f64, f64), f64, f64, &[&str]); 5] = [
        ("Apollo Hospital Greams Road", (13.0600, 80.2567), 200.0, 2.0, &["trauma-center", "ambulance", "24x7"]),
        ("Government General Hospital", (13.0732, 80.2609), 300.0, 1.0, &["emergency", "ambulance"]),
        ("MIOT Hospital", (13.0333, 80.2167), 200.0, 2.0, &["trauma-center", "speciality-care"]),
        ("Chennai Fire Station - T Nagar", (13.0417, 80.2278), 500.0, 1.0, &["fire-rescue", "emergency-response"]),
        ("Police Station - Adyar", (13.0067, 80.2572), 400.0, 1.0, &["police-response", "traffic-control"]),
    ];

    areas
        .into_iter()
        .map(|(name, center, radius_meters, bonus, services)| EmergencyServiceArea {
            name: name.to_string(),
            center: at(center),
            radius_meters,
            bonus,
            services: strings(services),
        })
        .collect()
}

fn safer_alternatives() -> BTreeMap<String, Vec<SaferAlternative>> {
    let table: [(&str, [(&str, f64, &str); 2]); 10] = [
        ("T_Nagar_to_Adyar", [
            ("via Habibullah Road", 2.0, "Wider road, better lighting"),
            ("via Cathedral Road", 3.0, "Tree-lined, less traffic"),
        ]),
        ("Central_to_Airport", [
            ("via Anna Salai - OMR", 4.0, "Major arterial roads, excellent maintenance"),
            ("via Inner Ring Road - GST Road", 3.0, "Avoid city center congestion"),
        ]),
        ("Anna_Nagar_to_Velachery", [
            ("via Outer Ring Road", 4.0, "Wide highway, minimal intersections"),
            ("via Arcot Road - Inner Ring Road", 2.0, "Avoid T Nagar congestion"),
        ]),
        ("Tambaram_to_Guindy", [
            ("via GST Road", 3.0, "Direct arterial road"),
            ("via Pallavaram - Airport Road", 2.0, "Less congested alternative"),
        ]),
        ("Egmore_to_Besant_Nagar", [
            ("via Anna Salai - Adyar", 4.0, "Major roads with good maintenance"),
            ("via Mount Road - Cathedral Road", 3.0, "Tree-lined, well-lit roads"),
        ]),
        ("Porur_to_OMR", [
            ("via Inner Ring Road - Guindy", 3.0, "Avoid city center"),
            ("via Arcot Road - Mount Road", 2.0, "Scenic route with better road quality"),
        ]),
        ("Ambattur_to_Adyar", [
            ("via Outer Ring Road - Inner Ring Road", 4.0, "Highway route, minimal traffic lights"),
            ("via Anna Nagar - Anna Salai", 2.0, "Arterial roads with good lighting"),
        ]),
        ("Koyambedu_to_Marina", [
            ("via Anna Salai", 3.0, "Direct wide road"),
            ("via Lloyds Road - Mount Road", 2.0, "Less congested parallel route"),
        ]),
        ("Chromepet_to_T_Nagar", [
            ("via GST Road - Guindy - Cathedral Road", 3.0, "Avoid railway crossings"),
            ("via Pallavaram - Airport Road - Anna Salai", 2.0, "Better road surface"),
        ]),
        ("Sholinganallur_to_Central", [
            ("via OMR - Anna Salai - Mount Road", 4.0, "Express highway to arterial roads"),
            ("via ECR - Marina Beach Road", 2.0, "Coastal route, scenic but slower"),
        ]),
    ];

    table
        .into_iter()
        .map(|(key, options)| {
            let options = options
                .into_iter()
                .map(|(route, safety_bonus, description)| SaferAlternative {
                    route: route.to_string(),
                    safety_bonus,
                    description: description.to_string(),
                })
                .collect();
            (key.to_string(), options)
        })
        .collect()
}

fn time_factors() -> BTreeMap<TimeBand, TimeSafetyFactor> {
    [
        (TimeBand::MorningRush, 0.7, "Rush hour - high congestion"),
        (TimeBand::Midday, 1.0, "Normal traffic"),
        (TimeBand::EveningRush, 0.6, "Evening rush - peak accidents"),
        (TimeBand::Night, 1.2, "Low traffic, better visibility"),
    ]
    .into_iter()
    .map(|(band, multiplier, reason)| {
        (band, TimeSafetyFactor { multiplier, reason: reason.to_string() })
    })
    .collect()
}

fn weather_factors() -> BTreeMap<WeatherCondition, f64> {
    BTreeMap::from([
        (WeatherCondition::Clear, 1.0),
        (WeatherCondition::Cloudy, 0.9),
        (WeatherCondition::LightRain, 0.6),
        (WeatherCondition::HeavyRain, 0.3),
        (WeatherCondition::Fog, 0.4),
    ])
}

fn transport_profiles() -> BTreeMap<TransportMode, TransportProfile> {
    let profile = |min_width: f64, multiplier: f64, bonus_threshold: f64, preferred: &[&str], avoided: &[&str]| {
        TransportProfile {
            min_road_width_meters: min_width,
            safety_multiplier: multiplier,
            width_bonus_threshold_meters: bonus_threshold,
            preferred_road_types: strings(preferred),
            avoided_area_types: strings(avoided),
        }
    };

    BTreeMap::from([
        (Car, profile(12.0, 1.0, 20.0, &["arterial", "highways"], &["narrow_lanes", "market_areas"])),
        (Bike, profile(10.0, 0.8, 16.0, &["arterial", "highways"], &["construction", "heavy_traffic"])),
        (Bicycle, profile(6.0, 0.6, 12.0, &["residential", "parks"], &["highways", "busy_intersections"])),
        (Walking, profile(3.0, 0.4, 8.0, &["sidewalks", "pedestrian"], &["highways", "industrial"])),
    ])
}

fn arterials() -> Vec<ArterialRoad> {
    [
        ("Anna Salai", [(13.0827, 80.2707), (13.0527, 80.2507)]),
        ("OMR", [(12.9716, 80.2463), (12.8270, 80.2234)]),
        ("ECR", [(13.0067, 80.2833), (12.7833, 80.2167)]),
    ]
    .into_iter()
    .map(|(name, [a, b])| ArterialRoad {
        name: name.to_string(),
        bounds: [at(a), at(b)],
    })
    .collect()
}
