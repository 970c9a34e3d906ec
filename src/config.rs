//! Process configuration read from the environment.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;
use thiserror::Error;

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default maximum number of pooled `PostgreSQL` connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors returned while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bind address could not be parsed.
    #[error("REVIEWDESK_BIND_ADDR '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        source: AddrParseError,
    },

    /// The pool size could not be parsed.
    #[error("REVIEWDESK_DB_POOL_SIZE '{value}' is not a number: {source}")]
    InvalidPoolSize {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        source: ParseIntError,
    },

    /// The pool size was zero.
    #[error("REVIEWDESK_DB_POOL_SIZE must be at least 1")]
    EmptyPool,
}

/// Runtime configuration for the review desk server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// `PostgreSQL` connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Origin allowed to call the API from a browser, if any.
    pub allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            allowed_origin: None,
        }
    }
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_bind_addr =
            read("REVIEWDESK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_bind_addr.clone(),
                source,
            })?;

        let pool_size = match read("REVIEWDESK_DB_POOL_SIZE") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|source| ConfigError::InvalidPoolSize {
                    value: value.clone(),
                    source,
                })?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        Ok(Self {
            bind_addr,
            database_url: read("DATABASE_URL"),
            pool_size,
            allowed_origin: read("REVIEWDESK_ALLOWED_ORIGIN")
                .map(|origin| origin.trim().to_owned()),
        })
    }
}
