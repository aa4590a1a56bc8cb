//! Binding error types.

use ahahub_domain::error::{AhaHubError, ConfigurationError};

/// Errors specific to the hub binding.
#[derive(Debug, thiserror::Error)]
pub enum FritzError {
    /// The binding configuration is unusable.
    #[error("binding configuration unusable")]
    Config(#[from] ConfigurationError),

    /// The device-list poll failed this cycle.
    #[error("device-list poll failed")]
    Poll(#[source] AhaHubError),

    /// Publishing a channel update failed.
    #[error("failed to publish channel update")]
    Publish(#[source] AhaHubError),
}

impl FritzError {
    /// Convert into the domain umbrella error for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> AhaHubError {
        match self {
            Self::Config(err) => err.into(),
            Self::Poll(err) | Self::Publish(err) => err,
        }
    }
}

impl From<FritzError> for AhaHubError {
    fn from(err: FritzError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_config_error() {
        let err = FritzError::Config(ConfigurationError::MissingCredential { field: "password" });
        assert_eq!(err.to_string(), "binding configuration unusable");
    }

    #[test]
    fn should_convert_config_error_to_domain() {
        let err: AhaHubError =
            FritzError::Config(ConfigurationError::MissingCredential { field: "password" }).into();
        assert!(matches!(err, AhaHubError::Config(_)));
    }

    #[test]
    fn should_unwrap_poll_error_to_inner_domain_error() {
        let inner = AhaHubError::NotFound {
            entity: "Device",
            id: "x".to_string(),
        };
        let err: AhaHubError = FritzError::Poll(inner).into();
        assert!(matches!(err, AhaHubError::NotFound { .. }));
    }
}
