//! Command intake — commanded values → outbound gateway actions.
//!
//! Planning is a pure function over the device context so the inverse
//! mode logic is testable without IO; [`CommandHandler`] wraps it with
//! the gateway call and the resulting channel updates.

use std::str::FromStr;

use ahahub_app::ports::{HubGateway, UpdatePublisher};
use ahahub_domain::channel::{ChannelId, ChannelUpdate, ChannelValue};
use ahahub_domain::error::{AhaHubError, UnknownModeError};
use ahahub_domain::heating::{HeatingValue, SetMode};

use crate::context::{Contexts, DeviceContext};

/// A command addressed to one device channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelCommand {
    /// Set a thermostat target temperature in °C.
    SetTemperature(f64),
    /// Set the discrete thermostat mode.
    SetMode(SetMode),
    /// Switch an outlet relay.
    Switch(bool),
}

impl ChannelCommand {
    /// Parse a set-mode command from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownModeError`] for anything but `off`/`on`/`boost` —
    /// an unrecognized-mode condition the caller logs and drops.
    pub fn mode_from_str(value: &str) -> Result<Self, UnknownModeError> {
        SetMode::from_str(value).map(Self::SetMode)
    }
}

/// The outbound side effect a command translates to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GatewayAction {
    /// Send a raw setpoint to the device.
    SetSetpoint(HeatingValue),
    /// Switch the relay.
    SetSwitch(bool),
}

/// What a command resolves to: at most one gateway action plus the
/// channel updates reflecting the commanded state.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPlan {
    /// The collaborator call to make, if any.
    pub action: Option<GatewayAction>,
    /// Channel updates to publish alongside the action.
    pub updates: Vec<ChannelUpdate>,
}

impl CommandPlan {
    fn noop() -> Self {
        Self {
            action: None,
            updates: Vec::new(),
        }
    }
}

/// Translate a command into a plan, updating the stored setpoint where
/// a genuine temperature is commanded.
pub fn plan(ctx: &mut DeviceContext, ain: &str, command: &ChannelCommand) -> CommandPlan {
    match command {
        ChannelCommand::SetTemperature(celsius) => {
            let value = HeatingValue::from_celsius(*celsius);
            if let Some(genuine) = value.to_celsius() {
                ctx.stored_setpoint = Some(genuine);
            }
            CommandPlan {
                action: Some(GatewayAction::SetSetpoint(value)),
                updates: setpoint_updates(ain, value),
            }
        }
        ChannelCommand::SetMode(SetMode::Off) => CommandPlan {
            action: Some(GatewayAction::SetSetpoint(HeatingValue::Off)),
            updates: setpoint_updates(ain, HeatingValue::Off),
        },
        ChannelCommand::SetMode(SetMode::Boost) => CommandPlan {
            action: Some(GatewayAction::SetSetpoint(HeatingValue::On)),
            updates: setpoint_updates(ain, HeatingValue::On),
        },
        ChannelCommand::SetMode(SetMode::On) => match ctx.stored_setpoint {
            Some(celsius) => {
                let value = HeatingValue::from_celsius(celsius);
                CommandPlan {
                    action: Some(GatewayAction::SetSetpoint(value)),
                    updates: setpoint_updates(ain, value),
                }
            }
            None => {
                // Recoverable: nothing to restore yet, so nothing is sent.
                tracing::debug!(ain, "mode ON commanded without a stored setpoint");
                CommandPlan::noop()
            }
        },
        ChannelCommand::Switch(on) => CommandPlan {
            action: Some(GatewayAction::SetSwitch(*on)),
            updates: Vec::new(),
        },
    }
}

fn setpoint_updates(ain: &str, value: HeatingValue) -> Vec<ChannelUpdate> {
    vec![
        ChannelUpdate::new(ain, ChannelId::SetTemp, ChannelValue::Number(value.display_celsius())),
        ChannelUpdate::new(ain, ChannelId::SetMode, ChannelValue::Mode(value.set_mode())),
    ]
}

/// Executes command plans: resolves the context, calls the gateway, and
/// publishes the reflected channel updates.
pub struct CommandHandler<G, B> {
    contexts: Contexts,
    gateway: G,
    bus: B,
}

impl<G, B> CommandHandler<G, B>
where
    G: HubGateway,
    B: UpdatePublisher,
{
    /// Create a handler over the binding's shared contexts.
    pub fn new(contexts: Contexts, gateway: G, bus: B) -> Self {
        Self {
            contexts,
            gateway,
            bus,
        }
    }

    /// Handle one command for the device with the given AIN.
    ///
    /// # Errors
    ///
    /// Returns [`AhaHubError::NotFound`] for an unknown AIN and
    /// propagates gateway failures. A mode command without a stored
    /// setpoint is a successful no-op.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, ain: &str, command: ChannelCommand) -> Result<(), AhaHubError> {
        let plan = {
            let mut map = self.contexts.lock().await;
            let ctx = map.get_mut(ain).ok_or_else(|| AhaHubError::NotFound {
                entity: "Device",
                id: ain.to_string(),
            })?;
            plan(ctx, ain, &command)
        };

        match plan.action {
            Some(GatewayAction::SetSetpoint(value)) => {
                self.gateway.set_setpoint(ain, value).await?;
            }
            Some(GatewayAction::SetSwitch(on)) => {
                self.gateway.set_switch(ain, on).await?;
            }
            None => {}
        }

        for update in plan.updates {
            self.bus.publish(update).await?;
        }
        Ok(())
    }
}
