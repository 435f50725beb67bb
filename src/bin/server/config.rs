use std::env;
use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Create a few visitors, restaurants and reviews at startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset and blank values fall back
    /// to defaults; values that are set but invalid are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be `compact` or `json`, got `{}`", other),
        };

        let seed_demo_data = var("SEED_DEMO_DATA")
            .map(|v| v.parse::<bool>())
            .transpose()
            .context("SEED_DEMO_DATA must be `true` or `false`")?
            .unwrap_or(false);

        Ok(Config {
            bind_addr,
            port,
            log_format,
            seed_demo_data,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .with_context(|| format!("BIND_ADDR `{}` is not an IP address", self.bind_addr))
    }
}
