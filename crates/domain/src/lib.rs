//! # ahahub-domain
//!
//! Pure domain model for the ahahub home-automation bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **channel model** (channel ids, tagged channel values,
//!   per-channel update notifications)
//! - Define **device capabilities** (independent capability flags decoded
//!   from the hub's function bitmask, device kinds resolved from product
//!   names)
//! - Define the **polled snapshot model** (the heterogeneous per-device
//!   state the external poller hands over each cycle)
//! - Define the **heating-value codec** (hub-native fixed-point heating
//!   units ⇔ Celsius, sentinel handling, set-mode classification)
//! - Define **registered devices** (the per-device record created on
//!   first reconciliation)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod capability;
pub mod channel;
pub mod device;
pub mod heating;
pub mod snapshot;
