//! Calldeck configuration read from `~/.config/calldeck/config.toml`.
//!
//! Every field is optional; a missing file is not an error. Compiled-in
//! defaults match the product's single-tenant deployment.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://eof4qrhh5ohc1u5.m.pipedream.net";
const DEFAULT_LOCATION_ID: &str = "F9E20zuOVfJZhEspuZ8h";
const DEFAULT_TIMEZONE: &str = "Asia/Singapore";
const DEFAULT_DIRECTION: &str = "INBOUND";
const DEFAULT_LISTEN_PORT: u16 = 3200;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CalldeckConfig {
    pub base_url: Option<String>,
    pub default_location_id: Option<String>,
    pub default_timezone: Option<String>,
    pub default_direction: Option<String>,
    pub listen_port: Option<u16>,
}

impl CalldeckConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn default_location_id(&self) -> &str {
        self.default_location_id
            .as_deref()
            .unwrap_or(DEFAULT_LOCATION_ID)
    }

    pub fn default_timezone(&self) -> &str {
        self.default_timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn default_direction(&self) -> &str {
        self.default_direction
            .as_deref()
            .unwrap_or(DEFAULT_DIRECTION)
    }

    pub fn listen_port(&self) -> u16 {
        self.listen_port.unwrap_or(DEFAULT_LISTEN_PORT)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calldeck")
        .join("config.toml")
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> anyhow::Result<CalldeckConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(CalldeckConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let config: CalldeckConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_path_ends_correctly() {
        let path = config_path();
        assert!(path.ends_with("calldeck/config.toml"));
    }

    #[test]
    fn test_parse_config_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
base_url = "https://metrics.example.com"
default_location_id = "loc-42"
default_timezone = "America/New_York"
listen_port = 8080
"#,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let config: CalldeckConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.base_url(), "https://metrics.example.com");
        assert_eq!(config.default_location_id(), "loc-42");
        assert_eq!(config.default_timezone(), "America/New_York");
        assert_eq!(config.listen_port(), 8080);
        // Unset field falls through to the default
        assert_eq!(config.default_direction(), "INBOUND");
    }

    #[test]
    fn test_parse_config_toml_empty_uses_defaults() {
        let config: CalldeckConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.default_location_id(), DEFAULT_LOCATION_ID);
        assert_eq!(config.default_timezone(), "Asia/Singapore");
        assert_eq!(config.listen_port(), 3200);
    }

    #[test]
    fn test_parse_config_toml_partial() {
        let config: CalldeckConfig =
            toml::from_str(r#"default_direction = "OUTBOUND""#).unwrap();
        assert_eq!(config.default_direction(), "OUTBOUND");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }
}
