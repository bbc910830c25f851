//! UI rendering module
//!
//! Turns the UI library's per-frame draw lists into one buffer upload and a run of
//! draw calls on the host.

pub mod data;
pub mod vertex;
pub mod batcher;
pub mod replayer;

// Re-export commonly used types
pub use data::{DrawData, DrawList, DrawCommand, ClipRect};
pub use vertex::{DrawVert, DrawIdx};
pub use batcher::{DrawListBatcher, BufferUpload};
pub use replayer::{DrawCommandReplayer, DrawPrimitives};
