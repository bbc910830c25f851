//! UI Bridge Module
//!
//! Moves the immediate-mode UI library's output to the host renderer and host input
//! into the library.
//!
//! Architecture:
//! - UiBridge: lifecycle controller (init, per-frame update/render, shutdown)
//! - backend: host callback contract
//! - context: UI library and file chooser seams
//! - rendering/: draw data model, batcher, replayer
//! - input/: input model, key map, sampler, input backend
//! - dialog: file dialog sessions

pub mod manager;
pub mod backend;
pub mod context;
pub mod dialog;
pub mod rendering;
pub mod input;

#[cfg(test)]
pub(crate) mod tests;

pub use manager::{UiBridge, BridgeParts, FrameStats};
pub use backend::{HostCallbacks, CallbackTable, TextureHandle};
pub use context::{ImmediateUi, FileChooser, FontAtlasData};
pub use dialog::{FileDialog, DialogMode, DialogOutcome};

// Re-export rendering types
pub use rendering::{
    DrawListBatcher, DrawCommandReplayer, BufferUpload, DrawPrimitives,
    DrawData, DrawList, DrawCommand, ClipRect, DrawVert, DrawIdx,
};

// Re-export input types
pub use input::{
    InputBackend, InputEvent, InputSampler, InputState, PointerState,
    KeyMap, UiKey, KeyModifiers, MouseButtons, ClipboardSlot,
};
#[cfg(feature = "glfw")]
pub use input::GlfwInputBackend;
