//! Polled device snapshot — the raw per-device state handed over by the
//! external poll collaborator each cycle.
//!
//! Values are kept in the hub's own units here: temperatures from the
//! sensor block in tenths of a degree, thermostat temperatures in raw
//! heating units (see [`crate::heating`]), tri-state flags as optional
//! 0/1 integers. Normalization happens in the reconciler, not here.

use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;

/// A full device snapshot from one poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Stable device address (AIN).
    pub identifier: String,
    /// Device model string (e.g. `"FRITZ!DECT 200"`).
    pub product_name: String,
    /// Capability announcement bitmask.
    pub function_bitmask: u32,
    /// Presence flag; any non-zero value means present.
    pub present: i64,
    /// Ambient temperature block, when reported this cycle.
    #[serde(default)]
    pub temperature: Option<TemperatureReading>,
    /// Power metering block, when reported this cycle.
    #[serde(default)]
    pub powermeter: Option<PowerMeter>,
    /// Switchable outlet block, when reported this cycle.
    #[serde(default)]
    pub switch: Option<SwitchReport>,
    /// Heating thermostat block, when reported this cycle.
    #[serde(default)]
    pub heating: Option<HeatingReport>,
}

impl DeviceSnapshot {
    /// Decode the announced capability set.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_bitmask(self.function_bitmask)
    }

    /// Whether the hub currently sees the device.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present != 0
    }
}

/// Ambient temperature in tenths of a degree Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Temperature in 0.1 °C steps (255 = 25.5 °C).
    pub deci_celsius: i64,
}

impl TemperatureReading {
    /// The reading in °C.
    #[must_use]
    pub fn celsius(self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let deci = self.deci_celsius as f64;
        deci / 10.0
    }
}

/// Power metering block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerMeter {
    /// Accumulated energy in Wh.
    pub energy_wh: f64,
    /// Instantaneous power in W.
    pub power_w: f64,
}

/// Switchable outlet block. All flags are hub tri-states: absent means
/// unknown, 0/1 mean off/on, anything else is an anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchReport {
    /// Relay state.
    #[serde(default)]
    pub state: Option<i64>,
    /// Operating mode string (e.g. `"manuell"`).
    #[serde(default)]
    pub mode: Option<String>,
    /// Switching via UI/API locked.
    #[serde(default)]
    pub lock: Option<i64>,
    /// Switching on the device itself locked.
    #[serde(default)]
    pub device_lock: Option<i64>,
}

/// Heating thermostat block. All temperatures are raw heating units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatingReport {
    /// Measured temperature (raw units).
    pub actual_temp: i64,
    /// Target temperature (raw units, possibly a sentinel).
    pub set_temp: i64,
    /// Eco / setback temperature (raw units, never a sentinel).
    pub eco_temp: i64,
    /// Comfort temperature (raw units, never a sentinel).
    pub comfort_temp: i64,
    /// Upcoming schedule change, when the hub reports one.
    #[serde(default)]
    pub next_change: Option<NextChange>,
    /// Battery-low tri-state.
    #[serde(default)]
    pub battery_low: Option<i64>,
}

/// Upcoming schedule change of a heating thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextChange {
    /// End of the current period as epoch seconds; 0 means no schedule.
    pub end_period: i64,
    /// Target temperature of the next period (raw units).
    pub next_temp: i64,
}
