//! Utils Module - Shared Constants & Telemetry
//!
//! Helpers used across the whole application.

pub mod constants;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
