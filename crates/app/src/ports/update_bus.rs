//! Update bus port — publish per-channel state updates.

use std::future::Future;

use ahahub_domain::channel::ChannelUpdate;
use ahahub_domain::error::AhaHubError;

/// Publishes channel updates to interested subscribers.
///
/// Publishing is fire-and-forget: delivery to zero subscribers is a
/// success, not an error.
pub trait UpdatePublisher {
    /// Publish an update to all current subscribers.
    fn publish(
        &self,
        update: ChannelUpdate,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send;
}

impl<T: UpdatePublisher + Send + Sync> UpdatePublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        update: ChannelUpdate,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        (**self).publish(update)
    }
}
