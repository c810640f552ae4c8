// ReelForge Server Configuration
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `REELFORGE_HOST` and `REELFORGE_PORT` (falling back to `PORT`).
    /// Call `dotenv().ok()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("REELFORGE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("REELFORGE_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid port '{}'", raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Applies CLI overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_port_fallback_and_precedence() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);

        let env = lookup(&[("PORT", "8080"), ("REELFORGE_PORT", "9000")]);
        let config = ServerConfig::from_lookup(env).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(ServerConfig::from_lookup(lookup(&[("REELFORGE_PORT", "http")])).is_err());
    }

    #[test]
    fn test_overrides_and_addr() {
        let config = ServerConfig::default().with_overrides(Some("127.0.0.1".into()), Some(4000));
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:4000");
    }
}
