//! Bridge error taxonomy

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised by the bridge
///
/// None of these are retried. Consistency errors mean the UI library and the bridge
/// disagree about the frame layout, so the frame is dropped before anything reaches
/// the host.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A draw list whose command element counts do not add up to its index count
    #[error("Malformed draw list {list}: commands consume {actual} indices, list holds {expected}")]
    MalformedDrawList {
        /// Position of the list in the frame
        list: usize,
        /// Index count of the list
        expected: usize,
        /// Sum of the element counts of its commands
        actual: usize,
    },

    /// A frame whose combined buffers outgrow the 32-bit offsets given to the host
    #[error("Combined {what} offset overflows at draw list {list}")]
    OffsetOverflow {
        /// Position of the list that pushed the offset past `u32::MAX`
        list: usize,
        /// Which offset ("vertex" or "index")
        what: &'static str,
    },

    /// Font atlas whose pixel count does not match its dimensions
    #[error("Malformed font atlas: {width}x{height} needs {expected} bytes, got {actual}")]
    MalformedFontAtlas {
        /// Atlas width
        width: u32,
        /// Atlas height
        height: u32,
        /// `width * height`
        expected: usize,
        /// Bytes actually provided
        actual: usize,
    },

    /// Growing a combined buffer failed
    #[error("Failed to grow combined {what} buffer to {requested} elements")]
    Allocation {
        /// Which buffer ("vertex" or "index")
        what: &'static str,
        /// Element count that was requested
        requested: usize,
    },

    /// A file dialog was opened while another one is still running
    #[error("One dialog at a time")]
    DialogAlreadyOpen,

    /// A file dialog was opened without a starting directory
    #[error("Need a starting directory before opening a dialog")]
    MissingStartDirectory,

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration was loaded but is not usable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
