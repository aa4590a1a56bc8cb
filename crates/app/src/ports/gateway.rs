//! Hub gateway port — outbound collaborator calls back to the hub.

use std::future::Future;

use ahahub_domain::error::AhaHubError;
use ahahub_domain::heating::HeatingValue;

/// Sends commands to devices through the hub.
///
/// Implementations own transport, sessions, and retries; callers only
/// see the typed command surface.
pub trait HubGateway {
    /// Set a thermostat's target temperature (raw heating value, which
    /// may be a sentinel for off/boost).
    fn set_setpoint(
        &self,
        ain: &str,
        value: HeatingValue,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send;

    /// Switch an outlet relay on or off.
    fn set_switch(&self, ain: &str, on: bool)
    -> impl Future<Output = Result<(), AhaHubError>> + Send;
}

impl<T: HubGateway + Send + Sync> HubGateway for std::sync::Arc<T> {
    fn set_setpoint(
        &self,
        ain: &str,
        value: HeatingValue,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        (**self).set_setpoint(ain, value)
    }

    fn set_switch(
        &self,
        ain: &str,
        on: bool,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        (**self).set_switch(ain, on)
    }
}
