//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the bridge:
//! - Growable per-frame buffers
//! - Frame timing
//! - Logging utilities

pub mod collections;
pub mod time;
pub mod logging;
