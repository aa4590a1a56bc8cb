//! Device registry — register-on-first-sight bookkeeping.
//!
//! The first successful reconciliation of a device yields its stable
//! AIN; the registry turns that into a [`RegisteredDevice`] record with
//! the capability set resolved once. Subsequent reconciliations reuse
//! the existing record.

use std::collections::HashMap;

use tokio::sync::RwLock;

use ahahub_domain::device::RegisteredDevice;
use ahahub_domain::error::AhaHubError;
use ahahub_domain::snapshot::DeviceSnapshot;

/// In-memory device registry keyed by AIN.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: RwLock<HashMap<String, RegisteredDevice>>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the device behind a snapshot if it is not known yet.
    ///
    /// Returns the registered record and whether it was newly created.
    #[tracing::instrument(skip(self, snapshot), fields(ain = %snapshot.identifier))]
    pub async fn upsert(&self, snapshot: &DeviceSnapshot) -> (RegisteredDevice, bool) {
        let mut devices = self.devices.write().await;
        if let Some(existing) = devices.get(&snapshot.identifier) {
            return (existing.clone(), false);
        }

        let device = RegisteredDevice::from_snapshot(snapshot);
        tracing::info!(
            ain = %device.ain,
            product = %device.product_name,
            kind = ?device.kind,
            "registered new device"
        );
        devices.insert(device.ain.clone(), device.clone());
        (device, true)
    }

    /// Look up a device by AIN.
    ///
    /// # Errors
    ///
    /// Returns [`AhaHubError::NotFound`] when the AIN is unknown.
    pub async fn get(&self, ain: &str) -> Result<RegisteredDevice, AhaHubError> {
        self.devices
            .read()
            .await
            .get(ain)
            .cloned()
            .ok_or_else(|| AhaHubError::NotFound {
                entity: "Device",
                id: ain.to_string(),
            })
    }

    /// List all registered devices.
    pub async fn list(&self) -> Vec<RegisteredDevice> {
        self.devices.read().await.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ain: &str) -> DeviceSnapshot {
        DeviceSnapshot {
            identifier: ain.to_string(),
            product_name: "FRITZ!DECT 200".to_string(),
            function_bitmask: 0x380,
            present: 1,
            temperature: None,
            powermeter: None,
            switch: None,
            heating: None,
        }
    }

    #[tokio::test]
    async fn should_register_device_on_first_sight() {
        let registry = DeviceRegistry::new();
        let (device, created) = registry.upsert(&snapshot("ain-1")).await;
        assert!(created);
        assert_eq!(device.ain, "ain-1");
    }

    #[tokio::test]
    async fn should_reuse_existing_registration() {
        let registry = DeviceRegistry::new();
        let (first, _) = registry.upsert(&snapshot("ain-1")).await;
        let (second, created) = registry.upsert(&snapshot("ain-1")).await;
        assert!(!created);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn should_find_registered_device_by_ain() {
        let registry = DeviceRegistry::new();
        registry.upsert(&snapshot("ain-1")).await;
        let found = registry.get("ain-1").await.unwrap();
        assert_eq!(found.ain, "ain-1");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_ain() {
        let registry = DeviceRegistry::new();
        let result = registry.get("missing").await;
        assert!(matches!(result, Err(AhaHubError::NotFound { .. })));
    }

    #[tokio::test]
    async fn should_list_all_registered_devices() {
        let registry = DeviceRegistry::new();
        registry.upsert(&snapshot("ain-1")).await;
        registry.upsert(&snapshot("ain-2")).await;
        assert_eq!(registry.list().await.len(), 2);
    }
}
