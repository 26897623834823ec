// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_SERVICE_URL` | Base URL of the authentication service | Required |
//! | `AUTH_TIMEOUT_SECS` | Timeout for the token validation call | `5` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable name for the authentication service base URL.
///
/// Tokens are validated with `POST {AUTH_SERVICE_URL}/account/validate`.
pub const AUTH_SERVICE_URL_ENV: &str = "AUTH_SERVICE_URL";

/// Environment variable name for the validation call timeout, in seconds.
pub const AUTH_TIMEOUT_SECS_ENV: &str = "AUTH_TIMEOUT_SECS";

/// Environment variable name for the bind host.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

/// Upper bound on a single token validation round-trip.
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AUTH_SERVICE_URL must be set")]
    MissingAuthServiceUrl,
    #[error("AUTH_SERVICE_URL is not a valid URL: {0}")]
    InvalidAuthServiceUrl(String),
    #[error("AUTH_SERVICE_URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
    #[error("AUTH_TIMEOUT_SECS must be a positive number of seconds, got `{0}`")]
    InvalidTimeout(String),
    #[error("HOST is not a valid IP address: `{0}`")]
    InvalidHost(String),
    #[error("PORT is not a valid port: `{0}`")]
    InvalidPort(String),
}

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_service_url: Url,
    pub auth_timeout: Duration,
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(AUTH_SERVICE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingAuthServiceUrl)?;
        let auth_service_url = Url::parse(raw_url.trim())
            .map_err(|e| ConfigError::InvalidAuthServiceUrl(e.to_string()))?;
        if !matches!(auth_service_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(
                auth_service_url.scheme().to_string(),
            ));
        }

        let auth_timeout = match lookup(AUTH_TIMEOUT_SECS_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_AUTH_TIMEOUT,
        };

        let host = match lookup(HOST_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => DEFAULT_HOST,
        };

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let log_format = lookup(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            auth_service_url,
            auth_timeout,
            host,
            port,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
