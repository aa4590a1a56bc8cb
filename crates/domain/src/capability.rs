//! Device capabilities — what a polled device can do.
//!
//! Capabilities are independent flags: a device may combine any subset
//! (a DECT 200 outlet is simultaneously a temp sensor, a powermeter and
//! a switchable outlet). They are decoded once from the hub's function
//! bitmask when the device is registered, not re-derived per poll.

use serde::{Deserialize, Serialize};

/// A single device capability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Reports an ambient temperature.
    TempSensor,
    /// Meters energy and power.
    Powermeter,
    /// Has a switchable outlet relay.
    SwitchableOutlet,
    /// Is a heating thermostat (radiator valve).
    HeatingThermostat,
    /// Acts as a DECT repeater.
    DectRepeater,
}

impl Capability {
    /// The bit this capability occupies in the hub's function bitmask.
    #[must_use]
    fn bitmask_bit(self) -> u32 {
        match self {
            Self::HeatingThermostat => 1 << 6,
            Self::Powermeter => 1 << 7,
            Self::TempSensor => 1 << 8,
            Self::SwitchableOutlet => 1 << 9,
            Self::DectRepeater => 1 << 10,
        }
    }

    const ALL: [Self; 5] = [
        Self::TempSensor,
        Self::Powermeter,
        Self::SwitchableOutlet,
        Self::HeatingThermostat,
        Self::DectRepeater,
    ];
}

/// An immutable set of capability tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities(u8);

impl Capabilities {
    /// The empty set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a set from explicit tags.
    #[must_use]
    pub fn from_tags(tags: &[Capability]) -> Self {
        let mut set = Self::default();
        for tag in tags {
            set.0 |= Self::local_bit(*tag);
        }
        set
    }

    /// Decode the hub's function bitmask.
    ///
    /// Unknown bits are ignored — new hub firmware may announce
    /// capabilities this bridge does not model yet.
    #[must_use]
    pub fn from_bitmask(bitmask: u32) -> Self {
        let mut set = Self::default();
        for tag in Capability::ALL {
            if bitmask & tag.bitmask_bit() != 0 {
                set.0 |= Self::local_bit(tag);
            }
        }
        set
    }

    /// Whether the set contains the given tag.
    #[must_use]
    pub fn contains(self, tag: Capability) -> bool {
        self.0 & Self::local_bit(tag) != 0
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the contained tags.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |tag| self.contains(*tag))
    }

    fn local_bit(tag: Capability) -> u8 {
        match tag {
            Capability::TempSensor => 1,
            Capability::Powermeter => 1 << 1,
            Capability::SwitchableOutlet => 1 << 2,
            Capability::HeatingThermostat => 1 << 3,
            Capability::DectRepeater => 1 << 4,
        }
    }
}

/// Known device models, resolved from the product name at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// FRITZ!DECT 200 switchable outlet.
    Dect200,
    /// FRITZ!DECT 210 outdoor switchable outlet.
    Dect210,
    /// FRITZ!DECT 300 heating thermostat.
    Dect300,
    /// Comet DECT heating thermostat.
    CometDect,
    /// FRITZ!DECT Repeater 100.
    Repeater100,
    /// FRITZ!Powerline 546E outlet.
    Powerline546e,
    /// A model this bridge has no dedicated kind for.
    Other,
}

impl DeviceKind {
    /// Resolve the kind from the product name reported by the hub.
    #[must_use]
    pub fn from_product_name(name: &str) -> Self {
        match name {
            "FRITZ!DECT 200" => Self::Dect200,
            "FRITZ!DECT 210" => Self::Dect210,
            "FRITZ!DECT 300" => Self::Dect300,
            "Comet DECT" => Self::CometDect,
            "FRITZ!DECT Repeater 100" => Self::Repeater100,
            "FRITZ!Powerline 546E" => Self::Powerline546e,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_thermostat_bitmask() {
        // Comet DECT announces thermostat + temp sensor.
        let caps = Capabilities::from_bitmask(0x140);
        assert!(caps.contains(Capability::HeatingThermostat));
        assert!(caps.contains(Capability::TempSensor));
        assert!(!caps.contains(Capability::SwitchableOutlet));
    }

    #[test]
    fn should_decode_outlet_bitmask() {
        // DECT 200 announces outlet + powermeter + temp sensor.
        let caps = Capabilities::from_bitmask(0x380);
        assert!(caps.contains(Capability::SwitchableOutlet));
        assert!(caps.contains(Capability::Powermeter));
        assert!(caps.contains(Capability::TempSensor));
        assert!(!caps.contains(Capability::HeatingThermostat));
    }

    #[test]
    fn should_ignore_unknown_bitmask_bits() {
        let caps = Capabilities::from_bitmask(0x8000_0100);
        assert!(caps.contains(Capability::TempSensor));
        assert_eq!(caps.iter().count(), 1);
    }

    #[test]
    fn should_build_from_explicit_tags() {
        let caps = Capabilities::from_tags(&[Capability::Powermeter, Capability::TempSensor]);
        assert!(caps.contains(Capability::Powermeter));
        assert!(caps.contains(Capability::TempSensor));
        assert!(!caps.contains(Capability::DectRepeater));
    }

    #[test]
    fn should_report_empty_set() {
        assert!(Capabilities::none().is_empty());
        assert!(!Capabilities::from_bitmask(0x200).is_empty());
    }

    #[test]
    fn should_iterate_contained_tags() {
        let caps = Capabilities::from_tags(&[Capability::SwitchableOutlet]);
        let tags: Vec<_> = caps.iter().collect();
        assert_eq!(tags, vec![Capability::SwitchableOutlet]);
    }

    #[test]
    fn should_resolve_known_product_names() {
        assert_eq!(DeviceKind::from_product_name("FRITZ!DECT 200"), DeviceKind::Dect200);
        assert_eq!(DeviceKind::from_product_name("Comet DECT"), DeviceKind::CometDect);
        assert_eq!(
            DeviceKind::from_product_name("FRITZ!DECT Repeater 100"),
            DeviceKind::Repeater100
        );
    }

    #[test]
    fn should_fall_back_to_other_for_unknown_product() {
        assert_eq!(DeviceKind::from_product_name("HAN-FUN Widget"), DeviceKind::Other);
    }
}
