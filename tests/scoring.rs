use chrono::NaiveTime;
use saferoute::dataset::RiskLevel;
use saferoute::{
    CHENNAI, Coordinate, RouteCandidate, RouteScorer, SafeRouteError, TransportMode, WeatherCondition,
    score_and_rank, score_route, select_safest,
};

const TAMBARAM_STATION: Coordinate = Coordinate::new(12.9249, 80.1276);
const NEAR_TAMBARAM_STATION: Coordinate = Coordinate::new(12.9260, 80.1280);
const BAY_OF_BENGAL: Coordinate = Coordinate::new(13.0, 80.5);
const OMR: Coordinate = Coordinate::new(12.85, 80.23);

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn night_car_trip_through_hotspot() {
    let trip = RouteCandidate::new(vec![TAMBARAM_STATION, NEAR_TAMBARAM_STATION], 1000.0, 120.0);
    let scored = score_route(&trip, TransportMode::Car, &at(21, 30), WeatherCondition::Clear).unwrap();

    assert_eq!(
        scored.factors,
        vec![
            "Road width compatibility: -0.5 - Cars may face challenges on narrow Chennai roads",
            "Risk zones penalty: -2.5",
            "Time factor (21:00-06:00): +0.4 - Low traffic, better visibility",
            "Transport mode (car): +0.4",
        ]
    );
    assert!((scored.safety_score - 4.8).abs() < 1e-9);

    let hit = &scored.risk_zones_hit[0];
    assert_eq!(hit.risk_level, RiskLevel::VeryHigh);
    assert!(!hit.in_peak_hours);
}

#[test]
fn morning_rush_through_hotspot() {
    let trip = RouteCandidate::new(vec![TAMBARAM_STATION], 1000.0, 120.0);
    let scored = score_route(&trip, TransportMode::Car, &at(8, 0), WeatherCondition::Clear).unwrap();

    assert_eq!(scored.factors[2], "Time factor (06:00-10:00): -0.6 - Rush hour - high congestion");
    assert!((scored.safety_score - 3.8).abs() < 1e-9);
    assert!(scored.risk_zones_hit[0].in_peak_hours);
}

#[test]
fn long_walk_off_the_map() {
    // 7.5 km/h is above 1.2 times walking speed.
    let trip = RouteCandidate::new(vec![BAY_OF_BENGAL], 15_000.0, 7_200.0);
    let scored = score_route(&trip, TransportMode::Walking, &at(12, 0), WeatherCondition::Clear).unwrap();

    assert_eq!(
        scored.factors,
        vec![
            "Road width compatibility: +1.5 - Pedestrians most flexible with road conditions",
            "Time factor (10:00-16:00): 0.0 - Normal traffic",
            "Transport mode (walking): -0.8",
            "Long route penalty: -0.5",
            "High speed route penalty: -1.5",
        ]
    );
    assert!((scored.safety_score - 5.7).abs() < 1e-9);
}

#[test]
fn more_risk_never_scores_higher() {
    let scorer = RouteScorer::new(&CHENNAI);
    let clean = RouteCandidate::new(vec![BAY_OF_BENGAL], 1000.0, 120.0);
    let risky = RouteCandidate::new(vec![BAY_OF_BENGAL, TAMBARAM_STATION], 1000.0, 120.0);

    for mode in [TransportMode::Car, TransportMode::Bike, TransportMode::Bicycle, TransportMode::Walking] {
        let a = scorer.score_route(&clean, mode, &at(12, 0), WeatherCondition::Cloudy).unwrap();
        let b = scorer.score_route(&risky, mode, &at(12, 0), WeatherCondition::Cloudy).unwrap();
        assert!(b.safety_score <= a.safety_score, "{mode}");
    }
}

#[test]
fn scores_stay_in_range() {
    let trips = [
        RouteCandidate::new(vec![OMR, OMR], 1000.0, 120.0),
        RouteCandidate::new(vec![TAMBARAM_STATION; 4], 80_000.0, 900.0),
        RouteCandidate::new(vec![BAY_OF_BENGAL], 500.0, 600.0),
    ];
    let weathers = [WeatherCondition::Clear, WeatherCondition::HeavyRain, WeatherCondition::Fog];
    for trip in &trips {
        for weather in weathers {
            for hour in [3, 8, 12, 18] {
                let scored = score_route(trip, TransportMode::Bicycle, &at(hour, 0), weather).unwrap();
                assert!((1.0..=10.0).contains(&scored.safety_score));
            }
        }
    }
}

#[test]
fn ranking_puts_safest_first() {
    let candidates = vec![
        RouteCandidate::new(vec![TAMBARAM_STATION], 1000.0, 120.0),
        RouteCandidate::new(vec![OMR, OMR], 1000.0, 120.0),
        RouteCandidate::new(vec![BAY_OF_BENGAL], 1000.0, 120.0),
    ];
    let ranked = score_and_rank(&candidates, TransportMode::Car, &at(12, 0), WeatherCondition::Clear).unwrap();

    assert_eq!(ranked.safest().candidate, candidates[1]);
    assert_eq!(ranked.alternatives().len(), 2);
    assert_eq!(ranked.alternatives()[0].candidate, candidates[2]);
    assert_eq!(select_safest(ranked.all()).unwrap(), ranked.safest());
}

#[test]
fn identical_candidates_keep_first() {
    let a = RouteCandidate::new(vec![BAY_OF_BENGAL], 1000.0, 120.0);
    let b = RouteCandidate::new(vec![BAY_OF_BENGAL], 1200.0, 150.0);
    let ranked = score_and_rank(&[a.clone(), b], TransportMode::Bike, &at(12, 0), WeatherCondition::Clear).unwrap();
    assert_eq!(ranked.safest().candidate, a);
}

#[test]
fn nothing_to_rank() {
    let err = score_and_rank(&[], TransportMode::Car, &at(12, 0), WeatherCondition::Clear).unwrap_err();
    assert!(matches!(err, SafeRouteError::EmptyRouteSet));
}

#[test]
fn night_beats_morning_by_time_band_alone() {
    let trip = RouteCandidate::new(vec![TAMBARAM_STATION], 1000.0, 120.0);
    let night = score_route(&trip, TransportMode::Car, &at(21, 30), WeatherCondition::Clear).unwrap();
    let morning = score_route(&trip, TransportMode::Car, &at(8, 0), WeatherCondition::Clear).unwrap();
    assert!((night.safety_score - morning.safety_score - 1.0).abs() < 1e-9);
}
