#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use similarity_bridge::config::toml_config::TomlConfig;
use similarity_bridge::utils::validation::Validate;
use similarity_bridge::CliConfig;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("bridge.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

#[test]
fn test_config_file_fills_in_unset_flags() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_config(
        &temp_dir,
        r#"
[server]
listen = "127.0.0.1:8080"

[upstream]
endpoint = "http://localhost:5000/similarity"
reference_word = "centrale"

[logging]
json = true
"#,
    )?;

    let cli = CliConfig::parse_from([
        "similarity-bridge",
        "--config",
        path.as_str(),
        "--listen",
        "127.0.0.1:9090",
    ]);
    let settings = cli.into_settings()?;

    assert_eq!(settings.listen.port(), 9090);
    assert_eq!(settings.upstream_endpoint, "http://localhost:5000/similarity");
    assert_eq!(settings.reference_word, "centrale");
    assert!(settings.json_logs);
    assert!(!settings.verbose);
    settings.validate()?;
    Ok(())
}

#[test]
fn test_config_file_env_substitution() -> Result<()> {
    std::env::set_var("SIMILARITY_BRIDGE_IT_WORD", "ecole");
    let temp_dir = TempDir::new()?;
    let path = write_config(
        &temp_dir,
        "[upstream]\nreference_word = \"${SIMILARITY_BRIDGE_IT_WORD}\"\n",
    )?;

    let config = TomlConfig::from_file(&path)?;
    assert_eq!(config.upstream.reference_word.as_deref(), Some("ecole"));
    Ok(())
}

#[test]
fn test_invalid_endpoint_in_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_config(&temp_dir, "[upstream]\nendpoint = \"not a url\"\n")?;

    let settings = CliConfig::parse_from(["similarity-bridge", "-c", path.as_str()]).into_settings()?;
    assert!(settings.validate().is_err());
    Ok(())
}
