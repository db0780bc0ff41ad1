use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::geocode::{DEFAULT_NOMINATIM_URL, DEFAULT_PHOTON_URL};
use crate::osrm::DEFAULT_OSRM_URL;

/// Safety-scored routing API for Chennai
#[derive(Debug, Clone, Parser)]
#[command(name = "saferoute", version)]
#[command(about = "Scores OSRM route alternatives for road safety and serves the ranking over HTTP")]
pub struct Config {
    /// Address the HTTP API listens on
    #[arg(long, env = "SAFEROUTE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// OSRM route service base URL (profile and coordinates are appended)
    #[arg(long, env = "SAFEROUTE_OSRM_URL", default_value = DEFAULT_OSRM_URL)]
    pub osrm_url: String,

    /// Photon search endpoint
    #[arg(long, env = "SAFEROUTE_PHOTON_URL", default_value = DEFAULT_PHOTON_URL)]
    pub photon_url: String,

    /// Nominatim search endpoint, used when Photon finds nothing
    #[arg(long, env = "SAFEROUTE_NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,

    /// JSON safety dataset replacing the built-in Chennai data
    #[arg(long, env = "SAFEROUTE_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Alternatives requested from OSRM besides the primary route
    #[arg(long, env = "SAFEROUTE_MAX_ALTERNATIVES", default_value_t = 5)]
    pub max_alternatives: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            photon_url: DEFAULT_PHOTON_URL.to_string(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            dataset: None,
            max_alternatives: 5,
        }
    }
}
