//! Server configuration.

use std::net::SocketAddr;

use crate::repository::seed::DEFAULT_SEED_COUNT;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "STATION_SERVER_ADDR";
/// Environment variable holding the number of demo stations to seed.
pub const SEED_COUNT_VAR: &str = "SEED_COUNT";
/// Environment variable holding an optional RNG seed for the demo data.
pub const SEED_RNG_VAR: &str = "SEED_RNG";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable was set to an unusable value
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration parameters for the station server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Number of synthetic stations created at startup.
    pub seed_count: usize,

    /// Seed for the synthetic data generator.
    /// `None` produces a different data set on every start.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(addr: SocketAddr, seed_count: usize, rng_seed: Option<u64>) -> Self {
        Self {
            addr,
            seed_count,
            rng_seed,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to [`ServerConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR) {
            Some(v) => parse_var(ADDR_VAR, v)?,
            None => defaults.addr,
        };
        let seed_count = match lookup(SEED_COUNT_VAR) {
            Some(v) => parse_var(SEED_COUNT_VAR, v)?,
            None => defaults.seed_count,
        };
        let rng_seed = match lookup(SEED_RNG_VAR) {
            Some(v) => Some(parse_var(SEED_RNG_VAR, v)?),
            None => defaults.rng_seed,
        };

        Ok(Self::new(addr, seed_count, rng_seed))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_count: DEFAULT_SEED_COUNT,
            rng_seed: None,
        }
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
