//! # ahahub-adapter-simulator
//!
//! Simulated hub for demos and end-to-end tests.
//!
//! Provides one switchable outlet and one heating thermostat behind the
//! [`SnapshotSource`] and [`HubGateway`] ports, so the full
//! poll → reconcile → publish → command pipeline can run without a real
//! hub on the network.
//!
//! ## Dependency rule
//!
//! Depends on `ahahub-app` (port traits) and `ahahub-domain` only.

pub mod devices;

use std::future::Future;
use std::sync::{Arc, Mutex};

use ahahub_app::ports::{HubGateway, SnapshotSource};
use ahahub_domain::error::AhaHubError;
use ahahub_domain::heating::HeatingValue;
use ahahub_domain::snapshot::DeviceSnapshot;

use crate::devices::{SimulatedOutlet, SimulatedThermostat};

/// In-memory hub state shared between the source and gateway sides.
#[derive(Debug)]
struct HubState {
    outlet: SimulatedOutlet,
    thermostat: SimulatedThermostat,
}

/// A simulated hub. Cloning shares the underlying state, so the clone
/// handed to the poller sees commands applied through the gateway side.
#[derive(Clone)]
pub struct SimulatedHub {
    state: Arc<Mutex<HubState>>,
}

impl Default for SimulatedHub {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState {
                outlet: SimulatedOutlet::new("08761 0000001"),
                thermostat: SimulatedThermostat::new("11960 0089208"),
            })),
        }
    }
}

impl SimulatedHub {
    /// Create a hub with the default outlet and thermostat.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The thermostat's current raw setpoint, for assertions in tests.
    #[must_use]
    pub fn thermostat_set_temp(&self) -> i64 {
        self.lock().thermostat.set_temp
    }

    /// The outlet's current relay state, for assertions in tests.
    #[must_use]
    pub fn outlet_relay_on(&self) -> bool {
        self.lock().outlet.relay_on
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubState> {
        // Simulator state stays usable even if a holder panicked.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SnapshotSource for SimulatedHub {
    fn poll(&self) -> impl Future<Output = Result<Vec<DeviceSnapshot>, AhaHubError>> + Send {
        let snapshots = {
            let state = self.lock();
            vec![state.outlet.snapshot(), state.thermostat.snapshot()]
        };
        async move { Ok(snapshots) }
    }
}

impl HubGateway for SimulatedHub {
    fn set_setpoint(
        &self,
        ain: &str,
        value: HeatingValue,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        let result = {
            let mut state = self.lock();
            if state.thermostat.ain == ain {
                state.thermostat.apply_setpoint(value);
                tracing::debug!(ain, raw = value.raw(), "simulator applied setpoint");
                Ok(())
            } else {
                Err(AhaHubError::NotFound {
                    entity: "Thermostat",
                    id: ain.to_string(),
                })
            }
        };
        async move { result }
    }

    fn set_switch(
        &self,
        ain: &str,
        on: bool,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        let result = {
            let mut state = self.lock();
            if state.outlet.ain == ain {
                state.outlet.relay_on = on;
                tracing::debug!(ain, on, "simulator switched relay");
                Ok(())
            } else {
                Err(AhaHubError::NotFound {
                    entity: "Outlet",
                    id: ain.to_string(),
                })
            }
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_two_snapshots_per_poll() {
        let hub = SimulatedHub::new();
        let snapshots = hub.poll().await.unwrap();
        assert_eq!(snapshots.len(), 2);
    }

    #[tokio::test]
    async fn should_apply_setpoint_through_gateway() {
        let hub = SimulatedHub::new();
        hub.set_setpoint("11960 0089208", HeatingValue::Off)
            .await
            .unwrap();
        assert_eq!(hub.thermostat_set_temp(), 253);
    }

    #[tokio::test]
    async fn should_reject_setpoint_for_unknown_device() {
        let hub = SimulatedHub::new();
        let result = hub.set_setpoint("unknown", HeatingValue::Off).await;
        assert!(matches!(result, Err(AhaHubError::NotFound { .. })));
    }

    #[tokio::test]
    async fn should_switch_relay_through_gateway() {
        let hub = SimulatedHub::new();
        hub.set_switch("08761 0000001", true).await.unwrap();
        assert!(hub.outlet_relay_on());
    }

    #[tokio::test]
    async fn should_reflect_gateway_changes_in_next_poll() {
        let hub = SimulatedHub::new();
        hub.set_setpoint("11960 0089208", HeatingValue::On)
            .await
            .unwrap();

        let snapshots = hub.poll().await.unwrap();
        let thermostat = snapshots
            .iter()
            .find(|s| s.identifier == "11960 0089208")
            .unwrap();
        assert_eq!(thermostat.heating.as_ref().unwrap().set_temp, 254);
    }
}
