pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::ReqwestUpstream;
pub use config::BridgeSettings;
pub use crate::core::{bridge::BridgeHandler, server};
pub use utils::error::{BridgeError, Result};
