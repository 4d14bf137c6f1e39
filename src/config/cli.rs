use super::toml_config::TomlConfig;
use super::{BridgeSettings, Overrides};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "similarity-bridge")]
#[command(about = "Forwards word guesses to a similarity API with browser-friendly CORS headers")]
pub struct CliConfig {
    /// Socket address to listen on [default: 0.0.0.0:8000]
    #[arg(long)]
    pub listen: Option<String>,

    /// Similarity endpoint the guesses are POSTed to
    #[arg(long)]
    pub upstream_endpoint: Option<String>,

    /// Word every guess is compared against [default: supelec]
    #[arg(long)]
    pub reference_word: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn into_settings(self) -> Result<BridgeSettings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let overrides = Overrides {
            listen: self.listen,
            upstream_endpoint: self.upstream_endpoint,
            reference_word: self.reference_word,
            verbose: self.verbose,
            json_logs: self.json_logs,
        };

        BridgeSettings::resolve(overrides, file)
    }
}
