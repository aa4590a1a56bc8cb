//! Decimal rounding profile for numeric channel values.
//!
//! Rounds `Number` values to a configured number of decimal digits with
//! a configurable rounding mode. Non-numeric values pass through with a
//! warning, `Undefined` passes through silently.

use std::str::FromStr;

use ahahub_domain::channel::ChannelValue;

/// How ties and remainders are resolved when truncating decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// To nearest; ties away from zero.
    #[default]
    HalfUp,
    /// To nearest; ties toward zero.
    HalfDown,
    /// To nearest; ties to the even neighbour.
    HalfEven,
}

impl FromStr for RoundingMode {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "ceiling" => Ok(Self::Ceiling),
            "floor" => Ok(Self::Floor),
            "half-up" => Ok(Self::HalfUp),
            "half-down" => Ok(Self::HalfDown),
            "half-even" => Ok(Self::HalfEven),
            _ => Err(()),
        }
    }
}

/// Rounding profile settings as they appear in configuration files.
///
/// The mode is kept as free text so an unknown name degrades to the
/// default instead of rejecting the whole configuration.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of decimal digits to keep.
    pub scale: i32,
    /// Rounding mode name (`up`, `down`, `ceiling`, `floor`, `half-up`,
    /// `half-down`, `half-even`).
    pub mode: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            scale: 0,
            mode: "half-up".to_string(),
        }
    }
}

/// A rounding profile ready to apply to channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProfile {
    scale: u32,
    mode: RoundingMode,
}

impl Default for RoundProfile {
    fn default() -> Self {
        Self::new(0, RoundingMode::HalfUp)
    }
}

impl RoundProfile {
    /// Create a profile with an explicit scale and mode.
    #[must_use]
    pub fn new(scale: u32, mode: RoundingMode) -> Self {
        Self { scale, mode }
    }

    /// Build a profile from its configuration.
    ///
    /// Misconfiguration degrades gracefully: an unknown mode name falls
    /// back to [`RoundingMode::HalfUp`] and a negative scale to `0`,
    /// each with a warning.
    #[must_use]
    pub fn from_config(config: &RoundConfig) -> Self {
        let mode = match RoundingMode::from_str(&config.mode) {
            Ok(mode) => mode,
            Err(()) => {
                tracing::warn!(
                    mode = %config.mode,
                    "unknown rounding mode, falling back to half-up"
                );
                RoundingMode::default()
            }
        };
        let scale = match u32::try_from(config.scale) {
            Ok(scale) => scale,
            Err(_) => {
                tracing::warn!(scale = config.scale, "negative scale, falling back to 0");
                0
            }
        };
        Self { scale, mode }
    }

    /// Apply the profile to a channel value.
    ///
    /// `Number` values are rounded; `Undefined` passes through silently;
    /// any other variant passes through with a warning.
    #[must_use]
    pub fn apply(&self, value: ChannelValue) -> ChannelValue {
        match value {
            ChannelValue::Number(n) => ChannelValue::Number(self.round(n)),
            ChannelValue::Undefined => ChannelValue::Undefined,
            other => {
                tracing::warn!(value = ?other, "rounding profile not compatible, passing through");
                other
            }
        }
    }

    fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powf(f64::from(self.scale));
        let scaled = value * factor;
        let rounded = match self.mode {
            RoundingMode::Up => scaled.abs().ceil().copysign(scaled),
            RoundingMode::Down => scaled.trunc(),
            RoundingMode::Ceiling => scaled.ceil(),
            RoundingMode::Floor => scaled.floor(),
            RoundingMode::HalfUp => scaled.round(),
            RoundingMode::HalfDown => half_down(scaled),
            RoundingMode::HalfEven => scaled.round_ties_even(),
        };
        rounded / factor
    }
}

fn half_down(value: f64) -> f64 {
    if (value - value.trunc()).abs() == 0.5 {
        value.trunc()
    } else {
        value.round()
    }
}
