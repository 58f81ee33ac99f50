//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `BOOK_FINDER_HOST`: bind interface, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if `PORT` is not a valid port number.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let host = lookup("BOOK_FINDER_HOST")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| HostError::Config { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
