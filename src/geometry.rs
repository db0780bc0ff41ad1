use geo::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by every distance in the scorer.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Flat meters-per-degree factor. Applied to longitude as well, whatever the latitude.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// WGS84 position. Serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from a GeoJSON `[lon, lat]` position.
    pub fn from_lon_lat(position: [f64; 2]) -> Self {
        Self::new(position[1], position[0])
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lon, c.lat)
    }
}

/// Haversine great-circle distance in meters.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin() * (d_phi / 2.0).sin()
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin() * (d_lambda / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Axis-aligned box around `endpoints`, grown by `tolerance_meters` on every side.
///
/// The box is in (lon, lat) order to match `geo` conventions.
pub fn expanded_bounds(endpoints: [Coordinate; 2], tolerance_meters: f64) -> Rect<f64> {
    let pad = tolerance_meters / METERS_PER_DEGREE;
    let rect = Rect::new(
        coord! { x: endpoints[0].lon, y: endpoints[0].lat },
        coord! { x: endpoints[1].lon, y: endpoints[1].lat },
    );
    let (min, max) = (rect.min(), rect.max());
    Rect::new(
        coord! { x: min.x - pad, y: min.y - pad },
        coord! { x: max.x + pad, y: max.y + pad },
    )
}

/// Coarse "is this point on that road" test.
///
/// This is a bounding-box check, not a point-to-line distance. Long diagonal
/// segments match generously; score thresholds are tuned for that.
pub fn is_near_segment(point: Coordinate, endpoints: [Coordinate; 2], tolerance_meters: f64) -> bool {
    let bounds = expanded_bounds(endpoints, tolerance_meters);
    let (min, max) = (bounds.min(), bounds.max());

    point.lat >= min.y && point.lat <= max.y && point.lon >= min.x && point.lon <= max.x
}
