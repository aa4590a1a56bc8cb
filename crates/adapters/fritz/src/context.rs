//! Per-device reconciliation context.
//!
//! The context is the only mutable state the binding keeps per device:
//! the capability set resolved at registration and the last known
//! genuine setpoint. It is passed explicitly into the reconciler and the
//! command planner — there is no ambient storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use ahahub_domain::capability::Capabilities;

/// Mutable per-device state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceContext {
    /// Capability tags resolved once at registration.
    pub capabilities: Capabilities,
    /// Last known genuine (non-sentinel) setpoint in °C.
    ///
    /// Created on first genuine set-temp observation, overwritten by
    /// every genuine read or command, never touched by sentinel values.
    pub stored_setpoint: Option<f64>,
}

impl DeviceContext {
    /// Create a context with no stored setpoint yet.
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            stored_setpoint: None,
        }
    }
}

/// Shared map of device contexts, keyed by AIN.
///
/// A single mutex over the whole map keeps reconciliation and command
/// handling for a device from mutating its stored setpoint
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct Contexts {
    inner: Arc<Mutex<HashMap<String, DeviceContext>>>,
}

impl Contexts {
    /// Create an empty context map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the map for exclusive access.
    pub async fn lock(&self) -> MutexGuard<'_, HashMap<String, DeviceContext>> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahahub_domain::capability::Capability;

    #[tokio::test]
    async fn should_share_state_between_clones() {
        let contexts = Contexts::new();
        let caps = Capabilities::from_tags(&[Capability::HeatingThermostat]);

        {
            let mut map = contexts.lock().await;
            map.insert("ain-1".to_string(), DeviceContext::new(caps));
        }

        let clone = contexts.clone();
        let map = clone.lock().await;
        assert_eq!(map.get("ain-1").unwrap().capabilities, caps);
    }

    #[test]
    fn should_start_without_stored_setpoint() {
        let ctx = DeviceContext::new(Capabilities::none());
        assert!(ctx.stored_setpoint.is_none());
    }
}
