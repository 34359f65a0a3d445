use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_allow_any: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { host: IpAddr::from([0, 0, 0, 0]), port: 5000, cors_allow_any: true }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let host = match lookup("HOST") {
            Some(v) => v.parse::<IpAddr>().with_context(|| format!("HOST is not an IP address: {v}"))?,
            None => defaults.host,
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse::<u16>().with_context(|| format!("PORT is not a port number: {v}"))?,
            None => defaults.port,
        };
        let cors_allow_any = match lookup("CORS_ALLOW_ANY") {
            Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"),
            None => defaults.cors_allow_any,
        };
        Ok(Self { host, port, cors_allow_any })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
