//! # ahahub-adapter-fritz
//!
//! Hub binding for AVM-FRITZ!-style home-automation devices.
//!
//! Consumes device snapshots from a [`SnapshotSource`], normalizes them
//! onto the channel model (heating-value codec, set-mode classification,
//! tri-state handling), publishes per-channel updates, and translates
//! inbound channel commands into outbound gateway calls.
//!
//! ## Dependency rule
//!
//! Depends on `ahahub-app` (port traits) and `ahahub-domain` only.
//! Transport against a real hub lives behind the `SnapshotSource` /
//! `HubGateway` ports and is not part of this crate.

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod poller;
pub mod reconcile;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use ahahub_app::ports::{HubGateway, SnapshotSource, UpdatePublisher};
use ahahub_app::services::DeviceRegistry;

use crate::command::CommandHandler;
use crate::config::FritzConfig;
use crate::context::Contexts;
use crate::poller::Poller;

/// Availability of the binding as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingStatus {
    /// Configured and ready to poll.
    Online,
    /// Unusable; `detail` explains why (e.g. a missing credential).
    Offline {
        /// Human-readable reason.
        detail: String,
    },
}

/// The hub binding: configuration, status, and shared per-device state.
pub struct FritzBinding {
    config: FritzConfig,
    status: BindingStatus,
    contexts: Contexts,
}

impl FritzBinding {
    /// Create a binding from its configuration.
    ///
    /// A configuration error does not panic and is not returned — it
    /// puts the binding into [`BindingStatus::Offline`], mirroring how
    /// the host expects unavailable integrations to present themselves.
    #[must_use]
    pub fn new(config: FritzConfig) -> Self {
        let status = match config.validate() {
            Ok(()) => BindingStatus::Online,
            Err(err) => {
                tracing::error!(%err, "binding configuration unusable, going offline");
                BindingStatus::Offline {
                    detail: err.to_string(),
                }
            }
        };
        Self {
            config,
            status,
            contexts: Contexts::new(),
        }
    }

    /// Current binding status.
    #[must_use]
    pub fn status(&self) -> &BindingStatus {
        &self.status
    }

    /// Whether the binding is usable.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self.status, BindingStatus::Online)
    }

    /// Spawn the background poll loop.
    ///
    /// Returns `None` when the binding is offline — an offline binding
    /// never polls.
    pub fn start_polling<S, B>(
        &self,
        source: S,
        bus: B,
        registry: Arc<DeviceRegistry>,
    ) -> Option<JoinHandle<()>>
    where
        S: SnapshotSource + Send + Sync + 'static,
        B: UpdatePublisher + Send + Sync + 'static,
    {
        if !self.is_online() {
            tracing::warn!("binding offline, not starting the poll loop");
            return None;
        }
        let poller = Poller::new(
            source,
            bus,
            registry,
            self.contexts.clone(),
            Duration::from_secs(self.config.poll_interval_secs),
        );
        Some(poller.start())
    }

    /// Build a command handler sharing this binding's device contexts.
    pub fn command_handler<G, B>(&self, gateway: G, bus: B) -> CommandHandler<G, B>
    where
        G: HubGateway,
        B: UpdatePublisher,
    {
        CommandHandler::new(self.contexts.clone(), gateway, bus)
    }
}
