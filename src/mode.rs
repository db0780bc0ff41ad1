//! Closed vocabularies for the inputs a caller picks: how they travel and
//! what the weather is like.

use log::warn;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Result, SafeRouteError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransportMode {
    #[default]
    #[strum(to_string = "car", serialize = "driving")]
    Car,
    /// Motorcycle.
    #[strum(to_string = "bike", serialize = "motorcycle")]
    Bike,
    #[strum(to_string = "bicycle", serialize = "cycling")]
    Bicycle,
    #[strum(to_string = "walking", serialize = "foot")]
    Walking,
}

impl TransportMode {
    /// Strict parse; unknown names are an error.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| SafeRouteError::InvalidTransportMode(name.to_string()))
    }

    /// Parse that falls back to [`TransportMode::Car`] for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        match Self::parse(name) {
            Ok(mode) => mode,
            Err(e) => {
                warn!("{e}, falling back to {}", Self::default());
                Self::default()
            }
        }
    }

    /// Average speed above which a route looks suspiciously fast for this mode.
    pub fn expected_speed_kph(self) -> f64 {
        match self {
            Self::Car | Self::Bike => 60.0,
            Self::Bicycle => 25.0,
            Self::Walking => 5.0,
        }
    }

    /// OSRM routing profile. Motorcycles share the driving network.
    pub fn osrm_profile(self) -> &'static str {
        match self {
            Self::Car | Self::Bike => "driving",
            Self::Bicycle => "cycling",
            Self::Walking => "foot",
        }
    }

    pub fn is_motorized(self) -> bool {
        matches!(self, Self::Car | Self::Bike)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Cloudy,
    LightRain,
    HeavyRain,
    Fog,
}

impl WeatherCondition {
    /// Unknown conditions are treated as clear weather, which carries no adjustment.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().parse() {
            Ok(weather) => weather,
            Err(_) => {
                warn!("unknown weather `{name}`, treating as {}", Self::default());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names_and_aliases() {
        assert_eq!(TransportMode::parse("car").unwrap(), TransportMode::Car);
        assert_eq!(TransportMode::parse("Motorcycle").unwrap(), TransportMode::Bike);
        assert_eq!(TransportMode::parse(" walking ").unwrap(), TransportMode::Walking);
        assert_eq!(TransportMode::parse("cycling").unwrap(), TransportMode::Bicycle);
    }

    #[test]
    fn strict_parse_rejects_unknown_mode() {
        let err = TransportMode::parse("hovercraft").unwrap_err();
        assert!(matches!(err, SafeRouteError::InvalidTransportMode(ref m) if m == "hovercraft"));
    }

    #[test]
    fn lenient_parse_falls_back_to_car() {
        assert_eq!(TransportMode::parse_or_default("hovercraft"), TransportMode::Car);
        assert_eq!(TransportMode::parse_or_default(""), TransportMode::Car);
        assert_eq!(TransportMode::parse_or_default("bicycle"), TransportMode::Bicycle);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(TransportMode::Bike.to_string(), "bike");
        assert_eq!(WeatherCondition::LightRain.to_string(), "light_rain");
    }

    #[test]
    fn osrm_profiles() {
        assert_eq!(TransportMode::Car.osrm_profile(), "driving");
        assert_eq!(TransportMode::Bike.osrm_profile(), "driving");
        assert_eq!(TransportMode::Bicycle.osrm_profile(), "cycling");
        assert_eq!(TransportMode::Walking.osrm_profile(), "foot");
    }

    #[test]
    fn unknown_weather_is_clear() {
        assert_eq!(WeatherCondition::parse_or_default("heavy_rain"), WeatherCondition::HeavyRain);
        assert_eq!(WeatherCondition::parse_or_default("sandstorm"), WeatherCondition::Clear);
    }
}
