//! Binding configuration.

use serde::Deserialize;

use ahahub_domain::error::ConfigurationError;

/// Configuration for the hub binding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FritzConfig {
    /// Hostname or IP address of the hub.
    pub host: String,
    /// Optional login name; newer hub firmware requires one.
    pub username: Option<String>,
    /// Web-interface password. Required — a binding without one never
    /// goes online.
    pub password: Option<String>,
    /// Interval between device-list polls, in seconds.
    pub poll_interval_secs: u64,
}

impl Default for FritzConfig {
    fn default() -> Self {
        Self {
            host: "fritz.box".to_string(),
            username: None,
            password: None,
            poll_interval_secs: 15,
        }
    }
}

impl FritzConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCredential`] when no password
    /// is set and [`ConfigurationError::Invalid`] for a zero poll
    /// interval.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.password.is_none() {
            return Err(ConfigurationError::MissingCredential { field: "password" });
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigurationError::Invalid(
                "poll_interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = FritzConfig::default();
        assert_eq!(config.host, "fritz.box");
        assert_eq!(config.poll_interval_secs, 15);
        assert!(config.password.is_none());
    }

    #[test]
    fn should_reject_missing_password() {
        let config = FritzConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::MissingCredential { field: "password" })
        ));
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let config = FritzConfig {
            password: Some("secret".to_string()),
            poll_interval_secs: 0,
            ..FritzConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::Invalid(_))
        ));
    }

    #[test]
    fn should_accept_complete_configuration() {
        let config = FritzConfig {
            password: Some("secret".to_string()),
            ..FritzConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            host = "192.168.178.1"
            username = "admin"
            password = "secret"
            poll_interval_secs = 30
        "#;
        let config: FritzConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "192.168.178.1");
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: FritzConfig = toml::from_str(r#"password = "secret""#).unwrap();
        assert_eq!(config.host, "fritz.box");
        assert_eq!(config.poll_interval_secs, 15);
    }
}
