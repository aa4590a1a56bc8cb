//! Registered device — the per-device record created on first
//! successful reconciliation.
//!
//! The capability set and device kind are resolved once here, at
//! registration time, instead of being re-derived from the model object
//! on every poll.

use serde::{Deserialize, Serialize};

use crate::capability::{Capabilities, DeviceKind};
use crate::id::DeviceId;
use crate::snapshot::DeviceSnapshot;
use crate::time::{self, Timestamp};

/// A device known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredDevice {
    /// Registry identifier.
    pub id: DeviceId,
    /// Stable device address (AIN).
    pub ain: String,
    /// Product name as reported by the hub.
    pub product_name: String,
    /// Model kind resolved from the product name.
    pub kind: DeviceKind,
    /// Capability tags decoded from the function bitmask.
    pub capabilities: Capabilities,
    /// When the device was first reconciled.
    pub first_seen: Timestamp,
}

impl RegisteredDevice {
    /// Build a registration record from the first snapshot of a device.
    #[must_use]
    pub fn from_snapshot(snapshot: &DeviceSnapshot) -> Self {
        Self {
            id: DeviceId::new(),
            ain: snapshot.identifier.clone(),
            product_name: snapshot.product_name.clone(),
            kind: DeviceKind::from_product_name(&snapshot.product_name),
            capabilities: snapshot.capabilities(),
            first_seen: time::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;

    #[test]
    fn should_resolve_kind_and_capabilities_from_snapshot() {
        let snapshot = DeviceSnapshot {
            identifier: "11960 0089208".to_string(),
            product_name: "Comet DECT".to_string(),
            function_bitmask: 0x140,
            present: 1,
            temperature: None,
            powermeter: None,
            switch: None,
            heating: None,
        };

        let device = RegisteredDevice::from_snapshot(&snapshot);
        assert_eq!(device.ain, "11960 0089208");
        assert_eq!(device.kind, DeviceKind::CometDect);
        assert!(device.capabilities.contains(Capability::HeatingThermostat));
        assert!(device.capabilities.contains(Capability::TempSensor));
    }

    #[test]
    fn should_assign_fresh_registry_ids() {
        let snapshot = DeviceSnapshot {
            identifier: "x".to_string(),
            product_name: "FRITZ!DECT 200".to_string(),
            function_bitmask: 0x380,
            present: 1,
            temperature: None,
            powermeter: None,
            switch: None,
            heating: None,
        };
        let a = RegisteredDevice::from_snapshot(&snapshot);
        let b = RegisteredDevice::from_snapshot(&snapshot);
        assert_ne!(a.id, b.id);
    }
}
