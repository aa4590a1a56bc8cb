//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ahahub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use ahahub_adapter_fritz::config::FritzConfig;
use ahahub_profiles::RoundConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hub binding settings.
    pub hub: FritzConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Profile settings.
    pub profiles: ProfilesConfig,
    /// Integration toggles.
    pub integrations: IntegrationsConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Profile configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Rounding profile applied to numeric channel updates.
    pub round: RoundConfig,
}

/// Per-integration toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Serve simulated devices instead of a network hub.
    pub simulator_enabled: bool,
}

impl Config {
    /// Load configuration from `ahahub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("ahahub.toml")?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AHAHUB_HOST") {
            self.hub.host = val;
        }
        if let Ok(val) = std::env::var("AHAHUB_USERNAME") {
            self.hub.username = Some(val);
        }
        if let Ok(val) = std::env::var("AHAHUB_PASSWORD") {
            self.hub.password = Some(val);
        }
        if let Ok(val) = std::env::var("AHAHUB_POLL_INTERVAL") {
            if let Ok(secs) = val.parse() {
                self.hub.poll_interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("AHAHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ahahubd=info,ahahub=info".to_string(),
        }
    }
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            simulator_enabled: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.hub.host, "fritz.box");
        assert_eq!(config.hub.poll_interval_secs, 15);
        assert!(config.hub.password.is_none());
        assert!(config.integrations.simulator_enabled);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.hub.host, "fritz.box");
        assert_eq!(config.logging.filter, "ahahubd=info,ahahub=info");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [hub]
            host = '192.168.178.1'
            username = 'admin'
            password = 'secret'
            poll_interval_secs = 30

            [logging]
            filter = 'debug'

            [profiles.round]
            scale = 1
            mode = 'half-even'

            [integrations]
            simulator_enabled = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hub.host, "192.168.178.1");
        assert_eq!(config.hub.username.as_deref(), Some("admin"));
        assert_eq!(config.hub.poll_interval_secs, 30);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.profiles.round.scale, 1);
        assert_eq!(config.profiles.round.mode, "half-even");
        assert!(!config.integrations.simulator_enabled);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [hub]
            password = 'secret'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hub.password.as_deref(), Some("secret"));
        assert_eq!(config.hub.host, "fritz.box");
        assert_eq!(config.profiles.round.mode, "half-up");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.hub.host, "fritz.box");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
