//! Heating-value codec — hub-native fixed-point heating units ⇔ Celsius.
//!
//! Heating thermostats report setpoints in the hub's native encoding:
//! integer steps of 0.5 °C, with raw 16 = 8.0 °C and raw 56 = 28.0 °C.
//! Two raw values sit *outside* that linear range and are reserved:
//! 253 means "thermostat fully off" and 254 means "thermostat fully on"
//! (boost). They are modelled as explicit [`HeatingValue`] variants so
//! the linear formula can never be applied to a sentinel by accident.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownModeError;

/// Reserved raw value: thermostat fully off.
pub const TEMP_OFF_RAW: i64 = 253;
/// Reserved raw value: thermostat fully on (boost).
pub const TEMP_ON_RAW: i64 = 254;

/// Lowest raw value of the linear range (8.0 °C).
pub const RAW_MIN: u8 = 16;
/// Highest raw value of the linear range (28.0 °C).
pub const RAW_MAX: u8 = 56;

/// Lowest Celsius setpoint the hub accepts.
pub const CELSIUS_MIN: f64 = 8.0;
/// Highest Celsius setpoint the hub accepts.
pub const CELSIUS_MAX: f64 = 28.0;

/// Degrees Celsius per raw step.
const STEP: f64 = 0.5;

/// A heating setpoint in the hub's native encoding.
///
/// `Linear` carries a raw value within [`RAW_MIN`]..=[`RAW_MAX`]; the
/// sentinels are separate variants and never pass through the linear
/// conversion formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingValue {
    /// Thermostat fully off (raw 253).
    Off,
    /// Thermostat fully on / boost (raw 254).
    On,
    /// A genuine setpoint within the linear range.
    Linear(u8),
}

impl HeatingValue {
    /// Decode a raw value reported by the hub.
    ///
    /// Sentinels are recognized before the linear range is considered.
    /// Raw values outside the linear range that are not sentinels are
    /// clamped to the nearest bound — bounds violations are policy, not
    /// errors.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            TEMP_OFF_RAW => Self::Off,
            TEMP_ON_RAW => Self::On,
            r if r < i64::from(RAW_MIN) => Self::Linear(RAW_MIN),
            r if r > i64::from(RAW_MAX) => Self::Linear(RAW_MAX),
            r => Self::Linear(u8::try_from(r).unwrap_or(RAW_MAX)),
        }
    }

    /// Encode a Celsius value as a heating value.
    ///
    /// Values at or below [`CELSIUS_MIN`] map to [`Off`](Self::Off),
    /// values at or above [`CELSIUS_MAX`] map to [`On`](Self::On), and
    /// everything in between is rounded to the nearest 0.5 °C step.
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius <= CELSIUS_MIN {
            Self::Off
        } else if celsius >= CELSIUS_MAX {
            Self::On
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let raw = (celsius / STEP).round() as u8;
            Self::Linear(raw.clamp(RAW_MIN, RAW_MAX))
        }
    }

    /// The Celsius equivalent of a genuine setpoint.
    ///
    /// Sentinels have no Celsius equivalent and yield `None` — use
    /// [`display_celsius`](Self::display_celsius) for the user-facing
    /// value.
    #[must_use]
    pub fn to_celsius(self) -> Option<f64> {
        match self {
            Self::Off | Self::On => None,
            Self::Linear(raw) => Some(f64::from(raw) * STEP),
        }
    }

    /// The user-facing Celsius value for the setpoint channel.
    ///
    /// Sentinels display as the range bounds per hub convention:
    /// `Off` shows 8.0 °C and `On` shows 28.0 °C.
    #[must_use]
    pub fn display_celsius(self) -> f64 {
        match self {
            Self::Off => CELSIUS_MIN,
            Self::On => CELSIUS_MAX,
            Self::Linear(raw) => f64::from(raw) * STEP,
        }
    }

    /// The raw wire value to send back to the hub.
    #[must_use]
    pub fn raw(self) -> i64 {
        match self {
            Self::Off => TEMP_OFF_RAW,
            Self::On => TEMP_ON_RAW,
            Self::Linear(raw) => i64::from(raw),
        }
    }

    /// Whether this is a genuine (non-sentinel) setpoint.
    #[must_use]
    pub fn is_genuine(self) -> bool {
        matches!(self, Self::Linear(_))
    }

    /// Classify the setpoint as a discrete set-mode.
    ///
    /// Purely a function of the value: `Off` for the off sentinel,
    /// `Boost` for the on sentinel, `On` for everything else.
    #[must_use]
    pub fn set_mode(self) -> SetMode {
        match self {
            Self::Off => SetMode::Off,
            Self::On => SetMode::Boost,
            Self::Linear(_) => SetMode::On,
        }
    }
}

/// Discrete user-facing thermostat mode derived from the setpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetMode {
    /// Thermostat off.
    Off,
    /// Regulating at the stored setpoint.
    On,
    /// Fully open valve.
    Boost,
}

impl fmt::Display for SetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
            Self::Boost => f.write_str("boost"),
        }
    }
}

impl FromStr for SetMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "boost" => Ok(Self::Boost),
            other => Err(UnknownModeError {
                value: other.to_string(),
            }),
        }
    }
}
