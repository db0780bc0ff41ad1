//! Place-name lookup. Photon is tried first; Nominatim is the fallback.
//!
//! Both services are public OSM instances with fair-use limits. Nominatim
//! requires an identifying User-Agent.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SafeRouteError};
use crate::geometry::Coordinate;

pub const DEFAULT_PHOTON_URL: &str = "https://photon.komoot.io/api/";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

const USER_AGENT: &str = concat!("saferoute/", env!("CARGO_PKG_VERSION"));
const PHOTON_LIMIT: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocodingProvider {
    Photon,
    Nominatim,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedPlace {
    pub query: String,
    pub location: Coordinate,
    pub display_name: Option<String>,
    pub provider: GeocodingProvider,
}

#[derive(Debug, Deserialize)]
struct PhotonResponse {
    #[serde(default)]
    features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
struct PhotonFeature {
    geometry: PhotonPoint,
    #[serde(default)]
    properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
struct PhotonPoint {
    /// `[lon, lat]`.
    coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct PhotonProperties {
    name: Option<String>,
    city: Option<String>,
    state: Option<String>,
}

impl PhotonProperties {
    fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.name, &self.city, &self.state]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    photon_url: String,
    nominatim_url: String,
}

impl Geocoder {
    pub fn new(http: reqwest::Client, photon_url: impl Into<String>, nominatim_url: impl Into<String>) -> Self {
        Self {
            http,
            photon_url: photon_url.into(),
            nominatim_url: nominatim_url.into(),
        }
    }

    /// Best match for `query`, which is assumed to be in India.
    ///
    /// # Errors
    ///
    /// [`SafeRouteError::Geocoding`] if the query is blank or neither service
    /// finds it.
    pub async fn resolve(&self, query: &str) -> Result<GeocodedPlace> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SafeRouteError::Geocoding("empty place name".to_string()));
        }

        match self.photon(query).await {
            Ok(Some(place)) => return Ok(place),
            Ok(None) => debug!("Photon found nothing for {query:?}, trying Nominatim"),
            Err(e) => warn!("Photon lookup for {query:?} failed: {e}, trying Nominatim"),
        }

        self.nominatim(query)
            .await?
            .ok_or_else(|| SafeRouteError::Geocoding(format!("no match for {query:?}")))
    }

    /// Resolves both ends of a trip concurrently.
    pub async fn resolve_pair(&self, origin: &str, destination: &str) -> Result<(GeocodedPlace, GeocodedPlace)> {
        tokio::try_join!(self.resolve(origin), self.resolve(destination))
    }

    async fn photon(&self, query: &str) -> Result<Option<GeocodedPlace>> {
        let q = format!("{query}, India");
        let response: PhotonResponse = self
            .http
            .get(&self.photon_url)
            .query(&[("q", q.as_str()), ("limit", PHOTON_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.features.into_iter().next().map(|feature| GeocodedPlace {
            query: query.to_string(),
            location: Coordinate::from_lon_lat(feature.geometry.coordinates),
            display_name: feature.properties.display_name(),
            provider: GeocodingProvider::Photon,
        }))
    }

    async fn nominatim(&self, query: &str) -> Result<Option<GeocodedPlace>> {
        let places: Vec<NominatimPlace> = self
            .http
            .get(&self.nominatim_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("countrycodes", "in"),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(first) = places.into_iter().next() else {
            return Ok(None);
        };

        let parse = |value: &str, field: &str| {
            value
                .parse::<f64>()
                .map_err(|_| SafeRouteError::Geocoding(format!("bad {field} {value:?} in Nominatim response")))
        };

        Ok(Some(GeocodedPlace {
            query: query.to_string(),
            location: Coordinate::new(parse(&first.lat, "lat")?, parse(&first.lon, "lon")?),
            display_name: first.display_name,
            provider: GeocodingProvider::Nominatim,
        }))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn geocoder(server: &MockServer) -> Geocoder {
        Geocoder::new(
            reqwest::Client::new(),
            format!("{}/api/", server.uri()),
            format!("{}/search", server.uri()),
        )
    }

    fn photon_hit(lon: f64, lat: f64, name: &str) -> serde_json::Value {
        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [lon, lat]},
                "properties": {"name": name, "city": "Chennai", "state": "Tamil Nadu"}
            }]
        })
    }

    #[tokio::test]
    async fn photon_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .and(query_param("q", "T Nagar, India"))
            .respond_with(ResponseTemplate::new(200).set_body_json(photon_hit(80.2341, 13.0418, "T Nagar")))
            .expect(1)
            .mount(&server)
            .await;

        let place = geocoder(&server).resolve("  T Nagar ").await.unwrap();
        assert_eq!(place.provider, GeocodingProvider::Photon);
        assert_eq!(place.location, Coordinate::new(13.0418, 80.2341));
        assert_eq!(place.display_name.as_deref(), Some("T Nagar, Chennai, Tamil Nadu"));
        assert_eq!(place.query, "T Nagar");
    }

    #[tokio::test]
    async fn falls_back_to_nominatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("countrycodes", "in"))
            .and(query_param("format", "json"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "lat": "13.0012",
                "lon": "80.2565",
                "display_name": "Adyar, Chennai, Tamil Nadu, India"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let place = geocoder(&server).resolve("Adyar").await.unwrap();
        assert_eq!(place.provider, GeocodingProvider::Nominatim);
        assert_eq!(place.location, Coordinate::new(13.0012, 80.2565));
    }

    #[tokio::test]
    async fn empty_photon_result_also_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = geocoder(&server).resolve("Atlantis").await.unwrap_err();
        assert!(matches!(err, SafeRouteError::Geocoding(_)));
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = geocoder(&server).resolve("   ").await.unwrap_err();
        assert!(matches!(err, SafeRouteError::Geocoding(_)));
    }

    #[tokio::test]
    async fn resolves_both_ends() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "T Nagar, India"))
            .respond_with(ResponseTemplate::new(200).set_body_json(photon_hit(80.2341, 13.0418, "T Nagar")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("q", "Adyar, India"))
            .respond_with(ResponseTemplate::new(200).set_body_json(photon_hit(80.2565, 13.0012, "Adyar")))
            .mount(&server)
            .await;

        let (origin, destination) = geocoder(&server).resolve_pair("T Nagar", "Adyar").await.unwrap();
        assert_eq!(origin.location.lat, 13.0418);
        assert_eq!(destination.location.lon, 80.2565);
    }

    #[test]
    fn display_name_skips_missing_parts() {
        let props = PhotonProperties {
            name: Some("Marina Beach".to_string()),
            city: None,
            state: Some("Tamil Nadu".to_string()),
        };
        assert_eq!(props.display_name().as_deref(), Some("Marina Beach, Tamil Nadu"));
        assert!(PhotonProperties::default().display_name().is_none());
    }
}
