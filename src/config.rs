//! Service configuration, loaded once at startup.
//!
//! Every credential the completion client needs is validated eagerly here;
//! a process with missing configuration never starts serving the plan
//! routes.

use std::env;

use crate::error::{env_error, PlanError, Result};

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Default TTL for cached plan texts, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Default timeout for the outbound completion call, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Main configuration structure for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion endpoint URL.
    pub completion_url: String,
    /// Bearer token for the completion endpoint.
    pub api_key: String,
    /// Cloud folder identifier, embedded in the model URI.
    pub folder_id: String,
    /// Redis host for the result cache.
    pub redis_host: String,
    /// Redis port for the result cache.
    pub redis_port: u16,
    /// Address the HTTP server binds to.
    pub bind: String,
    /// TTL for cached plan texts.
    pub cache_ttl_secs: u64,
    /// Upper bound on the outbound completion call.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `.env` first if present. `YC_URL`, `YC_API_KEY` and
    /// `YC_FOLDER_ID` are required; everything else has a default.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Split out from [`Config::load`] so validation is testable without
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| env_error(var))
        };

        let completion_url = required("YC_URL")?;
        let api_key = required("YC_API_KEY")?;
        let folder_id = required("YC_FOLDER_ID")?;

        let redis_host = lookup("REDIS_HOST").unwrap_or_else(|| String::from("localhost"));
        let redis_port = match lookup("REDIS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| PlanError::Config(format!("invalid REDIS_PORT: {raw}")))?,
            None => 6379,
        };

        let bind = lookup("BIND_ADDR").unwrap_or_else(|| String::from(DEFAULT_BIND));

        let cache_ttl_secs = parse_secs(&lookup, "CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let request_timeout_secs =
            parse_secs(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Config {
            completion_url,
            api_key,
            folder_id,
            redis_host,
            redis_port,
            bind,
            cache_ttl_secs,
            request_timeout_secs,
        })
    }

    /// Redis connection URL derived from host and port.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

fn parse_secs<F>(lookup: &F, var: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| PlanError::Config(format!("invalid {var}: {raw}"))),
        None => Ok(default),
    }
}
