//! Application services — use-case entry points.

pub mod registry_service;

pub use registry_service::DeviceRegistry;
