//! In-process channel-update bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use ahahub_domain::channel::ChannelUpdate;
use ahahub_domain::error::AhaHubError;

use crate::ports::UpdatePublisher;

/// In-process update bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the update is simply dropped).
pub struct InProcessUpdateBus {
    sender: broadcast::Sender<ChannelUpdate>,
}

impl InProcessUpdateBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to updates on this bus.
    ///
    /// Returns a receiver that will get all updates published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelUpdate> {
        self.sender.subscribe()
    }
}

impl UpdatePublisher for InProcessUpdateBus {
    fn publish(
        &self,
        update: ChannelUpdate,
    ) -> impl Future<Output = Result<(), AhaHubError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(update);
        async { Ok(()) }
    }
}
