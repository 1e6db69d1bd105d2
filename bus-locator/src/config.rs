//! Server configuration.
//!
//! Values are read from environment variables at startup; anything not set
//! falls back to the defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Listen address variable (default `127.0.0.1:3000`).
pub const ADDR_VAR: &str = "BUS_LOCATOR_ADDR";

/// Optional JSON catalog path; the built-in catalog is used when unset.
pub const CATALOG_VAR: &str = "BUS_LOCATOR_CATALOG";

/// Arrival estimator: `hint` or `random`.
pub const ETA_VAR: &str = "BUS_LOCATOR_ETA";

/// Default number of stations in a nearby listing.
pub const NEARBY_LIMIT_VAR: &str = "BUS_LOCATOR_NEARBY_LIMIT";

/// Error for an environment variable with an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// How arrival estimates are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EtaMode {
    /// Timetable hint, with a random draw when the hint has no minutes.
    #[default]
    Hint,
    /// Random draw for every route.
    Random,
}

impl FromStr for EtaMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hint" => Ok(EtaMode::Hint),
            "random" => Ok(EtaMode::Random),
            _ => Err("expected \"hint\" or \"random\"".to_string()),
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Catalog file to load instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    pub eta_mode: EtaMode,

    /// Stations returned by a nearby listing when the request sets no limit.
    pub nearby_limit: usize,

    /// Upper bound on any requested nearby limit.
    pub max_nearby_limit: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = parse_var(ADDR_VAR, value)?;
        }

        if let Some(value) = lookup(CATALOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(value));
        }

        if let Some(value) = lookup(ETA_VAR) {
            config.eta_mode = parse_var(ETA_VAR, value)?;
        }

        if let Some(value) = lookup(NEARBY_LIMIT_VAR) {
            let limit: usize = parse_var(NEARBY_LIMIT_VAR, value.clone())?;
            if limit == 0 {
                return Err(ConfigError {
                    var: NEARBY_LIMIT_VAR,
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.nearby_limit = limit;
            config.max_nearby_limit = config.max_nearby_limit.max(limit);
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            eta_mode: EtaMode::Hint,
            nearby_limit: 10,
            max_nearby_limit: 50,
        }
    }
}
