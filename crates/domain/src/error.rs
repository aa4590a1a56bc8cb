//! Common error types used across the workspace.
//!
//! Every anomaly in this system is recoverable by design: malformed
//! snapshot fields are skipped, unknown commands are rejected without
//! mutating anything, and codec bounds violations are policy-clamped.
//! The only fatal-to-initialization condition is a configuration error,
//! which is surfaced as an offline binding status rather than a panic.

/// Umbrella error for the ahahub workspace.
///
/// Adapter crates define their own typed errors and convert them into
/// this type at port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum AhaHubError {
    /// The binding configuration is unusable (e.g. a missing credential).
    #[error("configuration error")]
    Config(#[from] ConfigurationError),

    /// A commanded mode or value was not recognized.
    #[error("unrecognized command value")]
    UnknownMode(#[from] UnknownModeError),

    /// A referenced device or channel does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of thing that was looked up (e.g. "Device").
        entity: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// An outbound collaborator call failed.
    #[error("gateway error")]
    Gateway(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Fatal-to-initialization configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// A required credential is absent.
    #[error("missing credential: {field}")]
    MissingCredential {
        /// Name of the missing configuration field.
        field: &'static str,
    },

    /// A configuration value is semantically invalid.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A commanded mode string that matches no known set-mode option.
#[derive(Debug, thiserror::Error)]
#[error("unknown set-mode value: {value}")]
pub struct UnknownModeError {
    /// The rejected input.
    pub value: String,
}
