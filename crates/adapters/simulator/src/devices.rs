//! Simulated device implementations — outlet and heating thermostat.
//!
//! Each device holds the state a real hub would report and renders it
//! as a [`DeviceSnapshot`] on demand.

use ahahub_domain::heating::HeatingValue;
use ahahub_domain::snapshot::{
    DeviceSnapshot, HeatingReport, NextChange, PowerMeter, SwitchReport, TemperatureReading,
};

/// A simulated DECT 200 style switchable outlet with power metering and
/// a temperature sensor.
#[derive(Debug, Clone)]
pub struct SimulatedOutlet {
    /// Stable device address.
    pub ain: String,
    /// Relay state.
    pub relay_on: bool,
    /// Accumulated energy in Wh.
    pub energy_wh: f64,
    /// Instantaneous power in W.
    pub power_w: f64,
    /// Ambient temperature in tenths of a degree.
    pub deci_celsius: i64,
}

impl SimulatedOutlet {
    /// Create an outlet with typical idle readings.
    #[must_use]
    pub fn new(ain: impl Into<String>) -> Self {
        Self {
            ain: ain.into(),
            relay_on: false,
            energy_wh: 1234.0,
            power_w: 0.0,
            deci_celsius: 215,
        }
    }

    /// Render the current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            identifier: self.ain.clone(),
            product_name: "FRITZ!DECT 200".to_string(),
            function_bitmask: 0x380,
            present: 1,
            temperature: Some(TemperatureReading {
                deci_celsius: self.deci_celsius,
            }),
            powermeter: Some(PowerMeter {
                energy_wh: self.energy_wh,
                power_w: self.power_w,
            }),
            switch: Some(SwitchReport {
                state: Some(i64::from(self.relay_on)),
                mode: Some("manuell".to_string()),
                lock: Some(0),
                device_lock: Some(0),
            }),
            heating: None,
        }
    }
}

/// A simulated Comet DECT heating thermostat.
#[derive(Debug, Clone)]
pub struct SimulatedThermostat {
    /// Stable device address.
    pub ain: String,
    /// Measured temperature (raw heating units).
    pub actual_temp: i64,
    /// Target temperature (raw heating units, possibly a sentinel).
    pub set_temp: i64,
    /// Eco temperature (raw heating units).
    pub eco_temp: i64,
    /// Comfort temperature (raw heating units).
    pub comfort_temp: i64,
    /// Battery-low flag.
    pub battery_low: bool,
}

impl SimulatedThermostat {
    /// Create a thermostat regulating at 21 °C.
    #[must_use]
    pub fn new(ain: impl Into<String>) -> Self {
        Self {
            ain: ain.into(),
            actual_temp: 43,
            set_temp: 42,
            eco_temp: 32,
            comfort_temp: 42,
            battery_low: false,
        }
    }

    /// Apply a commanded setpoint the way the hub firmware would.
    pub fn apply_setpoint(&mut self, value: HeatingValue) {
        self.set_temp = value.raw();
    }

    /// Render the current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            identifier: self.ain.clone(),
            product_name: "Comet DECT".to_string(),
            function_bitmask: 0x140,
            present: 1,
            temperature: Some(TemperatureReading {
                deci_celsius: self.actual_temp * 5,
            }),
            powermeter: None,
            switch: None,
            heating: Some(HeatingReport {
                actual_temp: self.actual_temp,
                set_temp: self.set_temp,
                eco_temp: self.eco_temp,
                comfort_temp: self.comfort_temp,
                next_change: Some(NextChange {
                    end_period: 0,
                    next_temp: self.eco_temp,
                }),
                battery_low: Some(i64::from(self.battery_low)),
            }),
        }
    }
}
