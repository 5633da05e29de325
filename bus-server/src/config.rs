//! Server configuration from environment variables.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Default route data file.
const DEFAULT_DATA_PATH: &str = "data/bus_timings.json";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`BUS_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Route data file (`BUS_DATA_PATH`)
    pub data_path: PathBuf,

    /// Static assets directory (`BUS_STATIC_DIR`)
    pub static_dir: PathBuf,

    /// How long to keep loaded route data (`BUS_CACHE_TTL_SECS`).
    /// `None` reloads the file on every search.
    pub cache_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    ///
    /// Missing variables use their defaults. Invalid values are logged and
    /// also fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let cache_ttl = match lookup("BUS_CACHE_TTL_SECS") {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    warn!("Invalid BUS_CACHE_TTL_SECS value {raw:?}: {e}; caching disabled");
                    None
                }
            },
        };

        Self {
            bind_addr: parse_or(&lookup, "BUS_BIND_ADDR", default.bind_addr),
            data_path: lookup("BUS_DATA_PATH").map_or(default.data_path, PathBuf::from),
            static_dir: lookup("BUS_STATIC_DIR").map_or(default.static_dir, PathBuf::from),
            cache_ttl,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cache_ttl: None,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}; using default {default}");
        default
    })
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bind={} data={} static={} cache_ttl=",
            self.bind_addr,
            self.data_path.display(),
            self.static_dir.display()
        )?;
        match self.cache_ttl {
            Some(ttl) => write!(f, "{}s", ttl.as_secs()),
            None => f.write_str("off"),
        }
    }
}
