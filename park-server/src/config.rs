//! Server configuration from environment variables.
//!
//! Missing API keys are not fatal: the matching collaborator is left
//! unconfigured and its endpoints degrade (no alerts, catalog entrances,
//! no suggestions from the geocoder, no routes). Values that are present
//! but malformed are errors.

use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse
    #[error("invalid {key} value {value:?}: {message}")]
    Invalid {
        key: String,
        value: String,
        message: String,
    },
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub nps_api_key: Option<String>,
    pub mapbox_token: Option<String>,
    pub airports_path: PathBuf,
    pub trails_path: PathBuf,
    pub static_dir: PathBuf,
    pub http_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            nps_api_key: None,
            mapbox_token: None,
            airports_path: PathBuf::from("data/airports.json"),
            trails_path: PathBuf::from("data/trails.json"),
            static_dir: PathBuf::from("static"),
            http_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            bind_addr: parse_or(var("BIND_ADDR"), "BIND_ADDR", defaults.bind_addr)?,
            port: parse_or(var("PORT"), "PORT", defaults.port)?,
            nps_api_key: secret(var("NPS_API_KEY"), "NPS_API_KEY", "park alerts and entrances"),
            mapbox_token: secret(var("MAPBOX_TOKEN"), "MAPBOX_TOKEN", "geocoding and routing"),
            airports_path: var("AIRPORTS_PATH").map(PathBuf::from).unwrap_or(defaults.airports_path),
            trails_path: var("TRAILS_PATH").map(PathBuf::from).unwrap_or(defaults.trails_path),
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            http_timeout_secs: parse_or(
                var("HTTP_TIMEOUT_SECS"),
                "HTTP_TIMEOUT_SECS",
                defaults.http_timeout_secs,
            )?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = value else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        value: value.clone(),
        message: e.to_string(),
    })
}

fn secret(value: Option<String>, key: &str, feature: &str) -> Option<String> {
    if value.is_none() {
        warn!("{key} not set, {feature} unavailable");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_values() {
        let config = config(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "0.0.0.0"),
            ("NPS_API_KEY", " abc "),
            ("MAPBOX_TOKEN", "pk.xyz"),
            ("STATIC_DIR", "/srv/static"),
            ("HTTP_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.nps_api_key.as_deref(), Some("abc"));
        assert_eq!(config.mapbox_token.as_deref(), Some("pk.xyz"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.http_timeout_secs, 3);
    }

    #[test]
    fn blank_key_is_unset() {
        let config = config(&[("NPS_API_KEY", "   ")]).unwrap();
        assert_eq!(config.nps_api_key, None);
    }

    #[test]
    fn bad_numbers_are_errors() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
        assert!(config(&[("HTTP_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
