//! Channel model — normalized per-channel device state.
//!
//! Every capability of a device maps onto a fixed set of channels. A
//! reconciliation pass produces one [`ChannelUpdate`] per channel it has
//! something to say about; updates are fire-and-forget notifications
//! routed through the in-process bus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::heating::SetMode;
use crate::time::Timestamp;

/// Identifier of a device channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelId {
    /// Device presence as seen by the hub.
    Online,
    /// Ambient temperature reading in °C.
    Temperature,
    /// Accumulated energy in Wh.
    Energy,
    /// Instantaneous power in W.
    Power,
    /// Switchable outlet on/off state.
    Outlet,
    /// Outlet operating mode reported by the hub.
    OutletMode,
    /// Switching via UI/API locked.
    Locked,
    /// Switching on the device itself locked.
    DeviceLocked,
    /// Thermostat measured temperature in °C.
    ActualTemp,
    /// Thermostat target temperature in °C.
    SetTemp,
    /// Thermostat eco (setback) temperature in °C.
    EcoTemp,
    /// Thermostat comfort temperature in °C.
    ComfortTemp,
    /// End of the current schedule period.
    NextChange,
    /// Target temperature of the next schedule period in °C.
    NextTemp,
    /// Battery-low warning flag.
    BatteryLow,
    /// Derived discrete thermostat mode.
    SetMode,
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Online => "online",
            Self::Temperature => "temperature",
            Self::Energy => "energy",
            Self::Power => "power",
            Self::Outlet => "outlet",
            Self::OutletMode => "outlet_mode",
            Self::Locked => "locked",
            Self::DeviceLocked => "device_locked",
            Self::ActualTemp => "actual_temp",
            Self::SetTemp => "set_temp",
            Self::EcoTemp => "eco_temp",
            Self::ComfortTemp => "comfort_temp",
            Self::NextChange => "next_change",
            Self::NextTemp => "next_temp",
            Self::BatteryLow => "battery_low",
            Self::SetMode => "set_mode",
        };
        f.write_str(name)
    }
}

/// A normalized channel value.
///
/// Absent or unknown readings are an explicit [`Undefined`](Self::Undefined)
/// state — never a silent zero or off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelValue {
    /// The reading exists as a concept but has no known value.
    Undefined,
    /// A binary on/off state.
    OnOff(bool),
    /// A numeric reading (°C, Wh, W, …).
    Number(f64),
    /// A free-form string reported by the hub.
    Text(String),
    /// A point in time.
    Timestamp(Timestamp),
    /// A discrete thermostat mode.
    Mode(SetMode),
}

impl ChannelValue {
    /// Whether this value is defined.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

/// Tri-state flag as reported by the hub: on, off, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    On,
    Off,
    Undefined,
}

impl TriState {
    /// Decode the hub's optional 0/1 encoding.
    ///
    /// `None` means the hub did not report the flag this cycle. Any
    /// integer other than 0 or 1 is unexpected and yields an error so
    /// the caller can log and skip the field instead of defaulting it.
    pub fn decode(raw: Option<i64>) -> Result<Self, i64> {
        match raw {
            None => Ok(Self::Undefined),
            Some(0) => Ok(Self::Off),
            Some(1) => Ok(Self::On),
            Some(other) => Err(other),
        }
    }
}

impl From<TriState> for ChannelValue {
    fn from(state: TriState) -> Self {
        match state {
            TriState::On => Self::OnOff(true),
            TriState::Off => Self::OnOff(false),
            TriState::Undefined => Self::Undefined,
        }
    }
}

/// A fire-and-forget "update channel X of device A to value V" notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    /// Stable device address (AIN) the update belongs to.
    pub ain: String,
    /// The channel being updated.
    pub channel: ChannelId,
    /// The new normalized value.
    pub value: ChannelValue,
}

impl ChannelUpdate {
    /// Convenience constructor.
    #[must_use]
    pub fn new(ain: impl Into<String>, channel: ChannelId, value: ChannelValue) -> Self {
        Self {
            ain: ain.into(),
            channel,
            value,
        }
    }
}
