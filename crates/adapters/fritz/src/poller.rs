//! Poll loop — drives reconciliation at a fixed interval.
//!
//! One background task per binding. Devices are reconciled sequentially
//! within a cycle and cycles never overlap, so reconciliation for a
//! given device can never run concurrently with itself; across devices
//! there is no shared state beyond the context map.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use ahahub_app::ports::{SnapshotSource, UpdatePublisher};
use ahahub_app::services::DeviceRegistry;

use crate::context::{Contexts, DeviceContext};
use crate::error::FritzError;
use crate::reconcile;

/// Background device-list poller.
pub struct Poller<S, B> {
    source: S,
    bus: B,
    registry: Arc<DeviceRegistry>,
    contexts: Contexts,
    interval: Duration,
}

impl<S, B> Poller<S, B>
where
    S: SnapshotSource + Send + Sync + 'static,
    B: UpdatePublisher + Send + Sync + 'static,
{
    /// Create a poller over the binding's shared contexts.
    pub fn new(
        source: S,
        bus: B,
        registry: Arc<DeviceRegistry>,
        contexts: Contexts,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            bus,
            registry,
            contexts,
            interval,
        }
    }

    /// Spawn the continuous poll loop.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Continuous loop — polls, waits for the interval, repeats.
    async fn run(self) {
        loop {
            if let Err(err) = self.iterate().await {
                tracing::warn!(%err, "poll cycle failed, retrying next interval");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One poll cycle: fetch snapshots, reconcile each device, publish
    /// the resulting channel updates.
    pub async fn iterate(&self) -> Result<(), FritzError> {
        let snapshots = self.source.poll().await.map_err(FritzError::Poll)?;
        tracing::debug!(devices = snapshots.len(), "polled device list");

        for snapshot in snapshots {
            let (device, _created) = self.registry.upsert(&snapshot).await;

            let updates = {
                let mut map = self.contexts.lock().await;
                let ctx = map
                    .entry(device.ain.clone())
                    .or_insert_with(|| DeviceContext::new(device.capabilities));
                reconcile::reconcile(ctx, &snapshot)
            };

            for update in updates {
                self.bus
                    .publish(update)
                    .await
                    .map_err(FritzError::Publish)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use ahahub_app::event_bus::InProcessUpdateBus;
    use ahahub_domain::channel::{ChannelId, ChannelValue};
    use ahahub_domain::error::AhaHubError;
    use ahahub_domain::snapshot::{DeviceSnapshot, HeatingReport};

    /// Snapshot source test double serving a fixed batch.
    struct FixedSource {
        snapshots: Mutex<Vec<DeviceSnapshot>>,
    }

    impl FixedSource {
        fn new(snapshots: Vec<DeviceSnapshot>) -> Self {
            Self {
                snapshots: Mutex::new(snapshots),
            }
        }
    }

    impl SnapshotSource for FixedSource {
        fn poll(&self) -> impl Future<Output = Result<Vec<DeviceSnapshot>, AhaHubError>> + Send {
            let batch = self.snapshots.lock().unwrap().clone();
            async move { Ok(batch) }
        }
    }

    fn thermostat_snapshot(set_temp: i64) -> DeviceSnapshot {
        DeviceSnapshot {
            identifier: "11960 0089208".to_string(),
            product_name: "Comet DECT".to_string(),
            function_bitmask: 0x140,
            present: 1,
            temperature: None,
            powermeter: None,
            switch: None,
            heating: Some(HeatingReport {
                actual_temp: 43,
                set_temp,
                eco_temp: 32,
                comfort_temp: 42,
                next_change: None,
                battery_low: Some(0),
            }),
        }
    }

    #[tokio::test]
    async fn should_publish_updates_for_polled_device() {
        let bus = Arc::new(InProcessUpdateBus::new(64));
        let mut rx = bus.subscribe();
        let poller = Poller::new(
            FixedSource::new(vec![thermostat_snapshot(42)]),
            bus.clone(),
            Arc::new(DeviceRegistry::new()),
            Contexts::new(),
            Duration::from_secs(15),
        );

        poller.iterate().await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.channel, ChannelId::Online);
        assert_eq!(first.value, ChannelValue::OnOff(true));
    }

    #[tokio::test]
    async fn should_register_device_on_first_cycle() {
        let registry = Arc::new(DeviceRegistry::new());
        let poller = Poller::new(
            FixedSource::new(vec![thermostat_snapshot(42)]),
            Arc::new(InProcessUpdateBus::new(64)),
            registry.clone(),
            Contexts::new(),
            Duration::from_secs(15),
        );

        poller.iterate().await.unwrap();

        let device = registry.get("11960 0089208").await.unwrap();
        assert_eq!(device.product_name, "Comet DECT");
    }

    #[tokio::test]
    async fn should_keep_stored_setpoint_across_cycles() {
        let contexts = Contexts::new();
        let poller = Poller::new(
            FixedSource::new(vec![thermostat_snapshot(42)]),
            Arc::new(InProcessUpdateBus::new(64)),
            Arc::new(DeviceRegistry::new()),
            contexts.clone(),
            Duration::from_secs(15),
        );

        poller.iterate().await.unwrap();
        {
            let mut source = poller.source.snapshots.lock().unwrap();
            *source = vec![thermostat_snapshot(253)];
        }
        poller.iterate().await.unwrap();

        let map = contexts.lock().await;
        assert_eq!(map.get("11960 0089208").unwrap().stored_setpoint, Some(21.0));
    }
}
