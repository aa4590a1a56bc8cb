//! # ahahub-profiles
//!
//! Value-transform profiles sitting between channel updates and their
//! consumers. A profile rewrites compatible values and lets everything
//! else pass through untouched, so attaching one is never destructive.
//!
//! ## Dependency rule
//!
//! Depends on `ahahub-domain` only.

pub mod round;

pub use round::{RoundConfig, RoundProfile, RoundingMode};
