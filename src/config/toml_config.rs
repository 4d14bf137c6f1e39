use crate::utils::error::{BridgeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerSection,
    pub upstream: UpstreamSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSection {
    pub endpoint: Option<String>,
    pub reference_word: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BridgeError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BridgeError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
listen = "127.0.0.1:9000"

[upstream]
endpoint = "https://example.com/similarity"
reference_word = "centrale"

[logging]
verbose = true
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.server.listen.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(
            config.upstream.endpoint.as_deref(),
            Some("https://example.com/similarity")
        );
        assert_eq!(config.upstream.reference_word.as_deref(), Some("centrale"));
        assert!(config.logging.verbose);
        assert!(config.logging.json);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());

        let config = TomlConfig::from_toml_str("[upstream]\nreference_word = \"x\"\n").unwrap();
        assert_eq!(config.server.listen, None);
        assert_eq!(config.upstream.reference_word.as_deref(), Some("x"));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SIMILARITY_BRIDGE_TEST_ENDPOINT", "http://localhost:7000/sim");
        let config = TomlConfig::from_toml_str(
            "[upstream]\nendpoint = \"${SIMILARITY_BRIDGE_TEST_ENDPOINT}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.upstream.endpoint.as_deref(),
            Some("http://localhost:7000/sim")
        );
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            "[upstream]\nendpoint = \"${SIMILARITY_BRIDGE_TEST_NEVER_SET}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.upstream.endpoint.as_deref(),
            Some("${SIMILARITY_BRIDGE_TEST_NEVER_SET}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nlisten = 1").unwrap_err();
        assert!(matches!(err, BridgeError::Config { .. }));
    }
}
