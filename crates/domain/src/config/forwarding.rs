use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForwardingConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Upstream resolvers, tried strictly in this order. Entries without a
    /// port get the standard DNS port 53.
    #[serde(default)]
    pub upstreams: Vec<String>,

    /// Per-upstream exchange timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            upstreams: Vec::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ForwardingConfig {
    /// Resolve the configured upstream entries into socket addresses,
    /// preserving order.
    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstreams
            .iter()
            .map(|entry| {
                if let Ok(addr) = entry.parse::<SocketAddr>() {
                    return Ok(addr);
                }
                entry
                    .parse::<IpAddr>()
                    .map(|ip| SocketAddr::new(ip, 53))
                    .map_err(|e| {
                        ConfigError::Validation(format!("Invalid upstream '{}': {}", entry, e))
                    })
            })
            .collect()
    }
}

fn default_timeout_ms() -> u64 {
    1000
}
