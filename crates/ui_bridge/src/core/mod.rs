//! # Core Module
//!
//! Shared configuration for the bridge subsystems.

pub mod config;

pub use config::{BridgeConfig, GrowthPolicy, DEFAULT_DELTA_TIME};
