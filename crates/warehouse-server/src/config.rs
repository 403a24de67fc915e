//! Server configuration read from environment variables.
//!
//! - `WAREHOUSE_BIND`: listen address (default: "127.0.0.1:5000")
//! - `WAREHOUSE_PORT`: port override applied on top of the bind address
//! - `WAREHOUSE_STRICT`: `1`/`true`/`yes`/`on` enables strict input validation

use std::net::SocketAddr;

use warehouse_core::Validation;

/// Port used when neither `WAREHOUSE_BIND` nor `WAREHOUSE_PORT` is set.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub validation: Validation,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            validation: Validation::Permissive,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(raw) = lookup("WAREHOUSE_BIND") {
            config.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    var: "WAREHOUSE_BIND",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = lookup("WAREHOUSE_PORT") {
            let port: u16 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: "WAREHOUSE_PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.bind_addr.set_port(port);
        }

        if let Some(raw) = lookup("WAREHOUSE_STRICT") {
            config.validation = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Validation::Strict,
                "" | "0" | "false" | "no" | "off" => Validation::Permissive,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "WAREHOUSE_STRICT",
                        value: raw,
                        reason: "expected a boolean".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}
