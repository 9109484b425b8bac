//! Core domain logic for the wardstake staking front-end.
//!
//! This crate provides:
//! - Stake amount parsing and unit conversion (`amount` module)
//! - Derived staking metrics (`metrics` module)
//! - Core domain types (`types` module)
//! - Formatted detail strings for UI frontends (`display` module)
//!
//! Everything here is pure computation: no I/O, no chain access. The
//! chain boundary lives in `wardstake-chain`.

pub mod amount;
pub mod display;
pub mod metrics;
pub mod types;

// Re-export commonly used items from core modules
pub use amount::*;
pub use display::*;
pub use metrics::*;
pub use types::*;
