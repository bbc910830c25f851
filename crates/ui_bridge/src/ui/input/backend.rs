//! Input backend trait
//!
//! The bridge never talks to a windowing library directly. Exactly one backend is
//! compiled in (see [`super::glfw_backend`]); a build without one fails at compile time.

use super::keymap::{KeyMap, UiKey};
use super::processor::{InputEvent, PointerState};

/// Source of host input for the bridge
pub trait InputBackend {
    /// Start collecting host input events
    fn subscribe(&mut self);

    /// Stop collecting host input events and drop anything pending
    fn unsubscribe(&mut self);

    /// Whether events are currently collected
    fn is_subscribed(&self) -> bool;

    /// Host key code for a UI key; must be below `KEYS_DOWN_LEN`
    fn key_code(&self, key: UiKey) -> usize;

    /// Events received since the last drain, in arrival order
    fn drain_events(&mut self) -> Vec<InputEvent>;

    /// Pointer position and buttons right now
    fn pointer_state(&self) -> PointerState;

    /// Monotonic time in seconds
    fn now_seconds(&self) -> f64;

    /// Text on the host clipboard, `None` when it holds no text
    fn clipboard_text(&self) -> Option<String>;

    /// Replace the host clipboard contents
    fn set_clipboard_text(&mut self, text: &str);

    /// Complete key map for this backend
    fn key_map(&self) -> KeyMap {
        KeyMap::from_fn(|key| self.key_code(key))
    }
}
