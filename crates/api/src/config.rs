//! Server configuration from the environment
//!
//! Two knobs, both optional: the bind address and the admission-gate
//! capacity. Unset variables fall back to defaults; set-but-unparseable
//! values are startup errors rather than silent fallbacks.

use anyhow::Context;
use boxoffice_core::limits::DEFAULT_ADMISSION_LIMIT;
use std::net::SocketAddr;

/// Environment variable naming the bind address.
pub const ENV_ADDR: &str = "BOXOFFICE_ADDR";
/// Environment variable naming the admission-gate capacity.
pub const ENV_ADMISSION_LIMIT: &str = "BOXOFFICE_ADMISSION_LIMIT";

/// Runtime configuration of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub addr: SocketAddr,
    /// Capacity of the admission gate wrapping every operation.
    pub admission_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            admission_limit: DEFAULT_ADMISSION_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Fails when a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var(ENV_ADDR) {
            config.addr = addr
                .parse()
                .with_context(|| format!("{ENV_ADDR} is not a socket address: {addr:?}"))?;
        }
        if let Ok(limit) = std::env::var(ENV_ADMISSION_LIMIT) {
            config.admission_limit = limit
                .parse()
                .with_context(|| format!("{ENV_ADMISSION_LIMIT} is not a count: {limit:?}"))?;
        }
        Ok(config)
    }
}
