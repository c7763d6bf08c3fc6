//! Server configuration

use serde::{Deserialize, Serialize};

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Longest text accepted by `POST /translate`, in characters
pub const DEFAULT_MAX_TEXT_CHARS: usize = 1000;

/// REST service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, `host:port`
    pub addr: String,
    /// Longest text accepted per request
    pub max_text_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}
