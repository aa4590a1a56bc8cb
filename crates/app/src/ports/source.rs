//! Snapshot source port — where polled device state comes from.

use std::future::Future;

use ahahub_domain::error::AhaHubError;
use ahahub_domain::snapshot::DeviceSnapshot;

/// Produces one batch of device snapshots per poll cycle.
///
/// The concrete implementation talks to the hub's device-list API (or a
/// simulation of it); transport, parsing, and session handling live
/// entirely behind this trait.
pub trait SnapshotSource {
    /// Fetch the current snapshot of every known device.
    fn poll(&self) -> impl Future<Output = Result<Vec<DeviceSnapshot>, AhaHubError>> + Send;
}

impl<T: SnapshotSource + Send + Sync> SnapshotSource for std::sync::Arc<T> {
    fn poll(&self) -> impl Future<Output = Result<Vec<DeviceSnapshot>, AhaHubError>> + Send {
        (**self).poll()
    }
}
