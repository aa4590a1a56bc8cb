//! # ahahubd — hub daemon
//!
//! Composition root that wires the binding, the update bus, and the
//! profiles together and runs the poll loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the snapshot source and gateway (simulated hub)
//! - Construct the binding and start the poll loop
//! - Log channel updates from the bus, through the rounding profile
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use ahahub_adapter_fritz::FritzBinding;
use ahahub_adapter_simulator::SimulatedHub;
use ahahub_app::event_bus::InProcessUpdateBus;
use ahahub_app::services::DeviceRegistry;
use ahahub_domain::channel::ChannelValue;
use ahahub_profiles::RoundProfile;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    if !config.integrations.simulator_enabled {
        anyhow::bail!("no hub transport configured; enable the simulator integration");
    }

    let hub = SimulatedHub::new();
    let binding = FritzBinding::new(config.hub.clone());
    if !binding.is_online() {
        tracing::error!(status = ?binding.status(), "binding offline, nothing to run");
        return Ok(());
    }

    let bus = Arc::new(InProcessUpdateBus::new(256));
    let registry = Arc::new(DeviceRegistry::new());

    // Consumer side: log every channel update, numbers rounded.
    let profile = RoundProfile::from_config(&config.profiles.round);
    let mut updates = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            let value = profile.apply(update.value);
            match &value {
                ChannelValue::Number(n) => {
                    tracing::info!(ain = %update.ain, channel = %update.channel, value = n);
                }
                other => {
                    tracing::info!(ain = %update.ain, channel = %update.channel, value = ?other);
                }
            }
        }
    });

    let Some(poll_handle) = binding.start_polling(hub, bus, registry) else {
        return Ok(());
    };
    tracing::info!("ahahubd running, press ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    poll_handle.abort();

    Ok(())
}
