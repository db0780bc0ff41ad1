//! Road-width compatibility: how well the known roads along a route suit the
//! chosen transport mode.

use log::debug;
use serde::Serialize;

use crate::dataset::SafetyDataset;
use crate::geometry::Coordinate;
use crate::mode::TransportMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidthAssessment {
    pub score: f64,
    pub reason: String,
}

impl WidthAssessment {
    fn new(score: f64, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }

    /// Used when no known road lies along the route.
    pub fn generic(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Car => Self::new(-0.5, "Cars may face challenges on narrow Chennai roads"),
            TransportMode::Bike => Self::new(0.5, "Motorcycles generally navigate Chennai roads well"),
            TransportMode::Bicycle => Self::new(1.0, "Bicycles adaptable to various road widths"),
            TransportMode::Walking => Self::new(1.5, "Pedestrians most flexible with road conditions"),
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    compatible: u32,
    incompatible: u32,
    wide_road_bonus: f64,
}

impl Tally {
    fn checked(&self) -> u32 {
        self.compatible + self.incompatible
    }

    fn ratio(&self) -> f64 {
        f64::from(self.compatible) / f64::from(self.checked())
    }
}

/// Every (coordinate, nearby road) pair counts once, so a long stretch on one
/// road weighs more than a brief crossing.
pub fn analyze_width_compatibility(
    dataset: &SafetyDataset,
    route: &[Coordinate],
    mode: TransportMode,
) -> WidthAssessment {
    let Some(profile) = dataset.profile(mode) else {
        return WidthAssessment::new(0.0, "Unknown transport mode");
    };

    let mut tally = Tally::default();
    for &point in route {
        for road in dataset.roads_near(point) {
            if road.allows(mode) {
                tally.compatible += 1;
                if road.width_meters >= profile.width_bonus_threshold_meters {
                    tally.wide_road_bonus += 0.5;
                }
            } else {
                tally.incompatible += 1;
            }
        }
    }

    if tally.checked() == 0 {
        debug!("No known roads along route, using generic width assessment for {mode}");
        return WidthAssessment::generic(mode);
    }

    let ratio = tally.ratio();
    // Half away from zero, so 62.5% shows as 63%.
    let percent = (ratio * 100.0).round();
    debug!(
        "Width tally for {mode}: {} compatible, {} incompatible, wide bonus {}",
        tally.compatible, tally.incompatible, tally.wide_road_bonus
    );

    if !mode.is_motorized() {
        return WidthAssessment::new(
            (ratio * 2.0).min(1.0),
            "Flexible transport mode - good road compatibility",
        );
    }

    if ratio >= 0.8 {
        WidthAssessment::new(
            2.0 + tally.wide_road_bonus * 0.5,
            format!("Excellent road width compatibility ({percent:.0}% suitable roads)"),
        )
    } else if ratio >= 0.6 {
        WidthAssessment::new(1.0, format!("Good road width compatibility ({percent:.0}% suitable roads)"))
    } else if ratio >= 0.4 {
        WidthAssessment::new(-1.0, format!("Fair road width compatibility ({percent:.0}% suitable roads)"))
    } else {
        WidthAssessment::new(
            -3.0,
            format!("Poor road width compatibility ({percent:.0}% suitable roads) - Too many narrow roads"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CHENNAI, Frequency, Lighting, MaintenanceLevel, RoadSegment};

    const LANE: Coordinate = Coordinate::new(13.0005, 80.0005);
    const AVENUE: Coordinate = Coordinate::new(13.1005, 80.1005);
    const BAY_OF_BENGAL: Coordinate = Coordinate::new(13.0, 80.5);
    // Only GST Road (16 m, no walking) is near this point.
    const GST_ROAD: Coordinate = Coordinate::new(12.914, 80.131);

    fn road(name: &str, width_meters: f64, modes: &[TransportMode], start: (f64, f64)) -> RoadSegment {
        RoadSegment {
            name: name.to_string(),
            safety_rating: 5,
            width_label: String::new(),
            width_meters,
            accident_frequency: Frequency::Medium,
            lighting: Lighting::Fair,
            maintenance_level: MaintenanceLevel::Medium,
            speed_limit_kph: 40,
            vehicle_compatibility: modes.iter().copied().collect(),
            endpoints: [
                Coordinate::new(start.0, start.1),
                Coordinate::new(start.0 + 0.001, start.1 + 0.001),
            ],
        }
    }

    /// A walking-only lane and an all-mode avenue about 15 km apart.
    fn two_roads() -> SafetyDataset {
        let mut dataset = CHENNAI.clone();
        dataset.roads = vec![
            road("Lane", 4.0, &[TransportMode::Walking], (13.0, 80.0)),
            road(
                "Avenue",
                16.0,
                &[TransportMode::Car, TransportMode::Bike, TransportMode::Bicycle, TransportMode::Walking],
                (13.1, 80.1),
            ),
        ];
        dataset
    }

    #[test]
    fn fixed_fallback_without_local_roads() {
        let route = [BAY_OF_BENGAL];
        let expected = [
            (TransportMode::Car, -0.5),
            (TransportMode::Bike, 0.5),
            (TransportMode::Bicycle, 1.0),
            (TransportMode::Walking, 1.5),
        ];
        for (mode, score) in expected {
            let a = analyze_width_compatibility(&CHENNAI, &route, mode);
            assert_eq!(a.score, score, "{mode}");
            assert_eq!(a, WidthAssessment::generic(mode));
        }
    }

    #[test]
    fn car_on_pedestrian_lane_is_poor() {
        let a = analyze_width_compatibility(&two_roads(), &[LANE], TransportMode::Car);
        assert_eq!(a.score, -3.0);
        assert_eq!(a.reason, "Poor road width compatibility (0% suitable roads) - Too many narrow roads");
    }

    #[test]
    fn flexible_modes_are_capped_at_one() {
        let a = analyze_width_compatibility(&two_roads(), &[LANE], TransportMode::Walking);
        assert_eq!(a.score, 1.0);
        assert_eq!(a.reason, "Flexible transport mode - good road compatibility");

        // One compatible hit out of two: 0.5 * 2.
        let a = analyze_width_compatibility(&two_roads(), &[LANE, AVENUE], TransportMode::Bicycle);
        assert_eq!(a.score, 1.0);

        let a = analyze_width_compatibility(&two_roads(), &[LANE, LANE, LANE, AVENUE], TransportMode::Bicycle);
        assert_eq!(a.score, 0.5);
    }

    #[test]
    fn compatible_road_below_bonus_threshold() {
        // 16 m is under the car threshold of 20 m.
        let a = analyze_width_compatibility(&two_roads(), &[AVENUE, AVENUE], TransportMode::Car);
        assert_eq!(a.score, 2.0);
        assert_eq!(a.reason, "Excellent road width compatibility (100% suitable roads)");
    }

    #[test]
    fn wide_roads_earn_bonus() {
        // 16 m meets the motorcycle threshold: two hits at 0.5 each, then halved.
        let a = analyze_width_compatibility(&two_roads(), &[AVENUE, AVENUE], TransportMode::Bike);
        assert_eq!(a.score, 2.5);
    }

    #[test]
    fn mixed_route_grades_by_ratio() {
        let a = analyze_width_compatibility(&two_roads(), &[AVENUE, LANE], TransportMode::Car);
        assert_eq!(a.score, -1.0);
        assert_eq!(a.reason, "Fair road width compatibility (50% suitable roads)");

        let a = analyze_width_compatibility(&two_roads(), &[AVENUE, AVENUE, LANE], TransportMode::Car);
        assert_eq!(a.score, 1.0);
        assert_eq!(a.reason, "Good road width compatibility (67% suitable roads)");

        let a = analyze_width_compatibility(&two_roads(), &[AVENUE, LANE, LANE], TransportMode::Car);
        assert_eq!(a.score, -3.0);
    }

    #[test]
    fn percent_rounds_half_up() {
        // 5 of 8 hits compatible.
        let route = [AVENUE, AVENUE, AVENUE, AVENUE, AVENUE, LANE, LANE, LANE];
        let a = analyze_width_compatibility(&two_roads(), &route, TransportMode::Car);
        assert_eq!(a.reason, "Good road width compatibility (63% suitable roads)");

        // 1 of 8.
        let route = [AVENUE, LANE, LANE, LANE, LANE, LANE, LANE, LANE];
        let a = analyze_width_compatibility(&two_roads(), &route, TransportMode::Car);
        assert_eq!(a.reason, "Poor road width compatibility (13% suitable roads) - Too many narrow roads");
    }

    #[test]
    fn builtin_roads() {
        let a = analyze_width_compatibility(&CHENNAI, &[GST_ROAD], TransportMode::Car);
        assert_eq!(a.score, 2.0);
        let a = analyze_width_compatibility(&CHENNAI, &[GST_ROAD], TransportMode::Walking);
        assert_eq!(a.score, 0.0);
    }

    #[test]
    fn missing_profile_is_neutral() {
        let mut dataset = two_roads();
        dataset.transport_profiles.clear();
        let a = analyze_width_compatibility(&dataset, &[AVENUE], TransportMode::Car);
        assert_eq!(a.score, 0.0);
        assert_eq!(a.reason, "Unknown transport mode");
    }
}
