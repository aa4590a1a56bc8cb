//! # ahahub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `UpdatePublisher` — fire-and-forget per-channel state updates
//!   - `HubGateway` — outbound "set setpoint / set switch" collaborator calls
//!   - `SnapshotSource` — one device-list snapshot batch per poll cycle
//! - Provide **in-process infrastructure** (channel-update bus) that
//!   doesn't need IO
//! - Provide the **device registry** use-case (register-on-first-sight,
//!   capability resolution)
//!
//! ## Dependency rule
//! Depends on `ahahub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
