#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::bridge::DEFAULT_REFERENCE_WORD;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_socket_addr, validate_url, Validate};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
pub const DEFAULT_UPSTREAM_ENDPOINT: &str = "https://word2vec.nicolasfley.fr/similarity";

/// Values given explicitly on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub listen: Option<String>,
    pub upstream_endpoint: Option<String>,
    pub reference_word: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeSettings {
    pub listen: SocketAddr,
    pub upstream_endpoint: String,
    pub reference_word: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl BridgeSettings {
    /// Command line, then config file, then built-in defaults.
    pub fn resolve(overrides: Overrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let listen = overrides
            .listen
            .or(file.server.listen)
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string());

        Ok(Self {
            listen: validate_socket_addr("server.listen", &listen)?,
            upstream_endpoint: overrides
                .upstream_endpoint
                .or(file.upstream.endpoint)
                .unwrap_or_else(|| DEFAULT_UPSTREAM_ENDPOINT.to_string()),
            reference_word: overrides
                .reference_word
                .or(file.upstream.reference_word)
                .unwrap_or_else(|| DEFAULT_REFERENCE_WORD.to_string()),
            verbose: overrides.verbose || file.logging.verbose,
            json_logs: overrides.json_logs || file.logging.json,
        })
    }
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            upstream_endpoint: DEFAULT_UPSTREAM_ENDPOINT.to_string(),
            reference_word: DEFAULT_REFERENCE_WORD.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl Validate for BridgeSettings {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.endpoint", &self.upstream_endpoint)?;
        validate_non_empty_string("upstream.reference_word", &self.reference_word)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

impl ConfigProvider for BridgeSettings {
    fn listen_addr(&self) -> SocketAddr {
        self.listen
    }

    fn upstream_endpoint(&self) -> &str {
        &self.upstream_endpoint
    }

    fn reference_word(&self) -> &str {
        &self.reference_word
    }
}
