//! UI input handling module

pub mod state;
pub mod keymap;
pub mod processor;
pub mod backend;
#[cfg(feature = "glfw")]
pub mod glfw_backend;

// Re-export commonly used types
pub use state::{ClipboardSlot, InputState, KeyModifiers, MouseButtons, KEYS_DOWN_LEN};
pub use keymap::{KeyMap, UiKey};
pub use processor::{InputSampler, InputEvent, PointerState};
pub use backend::InputBackend;
#[cfg(feature = "glfw")]
pub use glfw_backend::GlfwInputBackend;
