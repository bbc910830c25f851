//! Input model consumed by the UI library's layout pass

use super::keymap::KeyMap;
use bitflags::bitflags;

/// Size of the key-down table; host key codes must stay below this
pub const KEYS_DOWN_LEN: usize = 512;

bitflags! {
    /// Modifier keys held when a key event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift
        const SHIFT = 1 << 0;
        /// Control
        const CTRL = 1 << 1;
        /// Alt
        const ALT = 1 << 2;
    }
}

bitflags! {
    /// Pointer buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Primary (left)
        const PRIMARY = 1 << 0;
        /// Secondary (right)
        const SECONDARY = 1 << 1;
        /// Middle
        const MIDDLE = 1 << 2;
    }
}

/// Host clipboard as the UI library sees it
///
/// Connected by the bridge at init and disconnected at shutdown. Reads return the
/// host text captured at the start of the frame; writes are handed to the host the
/// next time the bridge runs (`render`, `update` or `shutdown`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSlot {
    connected: bool,
    text: Option<String>,
    outgoing: Option<String>,
}

impl ClipboardSlot {
    /// Whether a host clipboard is behind this slot
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Clipboard text, `None` when empty or disconnected
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Put text on the host clipboard
    pub fn set_text(&mut self, text: &str) {
        if !self.connected {
            log::trace!("Clipboard not connected, dropping {} bytes", text.len());
            return;
        }
        self.text = Some(text.to_string());
        self.outgoing = Some(text.to_string());
    }

    pub(crate) fn connect(&mut self, text: Option<String>) {
        self.connected = true;
        self.text = text;
        self.outgoing = None;
    }

    pub(crate) fn disconnect(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn refresh(&mut self, text: Option<String>) {
        if self.connected {
            self.text = text;
        }
    }

    pub(crate) fn take_outgoing(&mut self) -> Option<String> {
        self.outgoing.take()
    }
}

/// Per-frame input model
///
/// Written by the bridge, read by the UI library. Pointer fields are overwritten
/// once per frame; key and text fields change as events arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Absolute pointer position in window pixels
    pub mouse_pos: [f32; 2],
    /// Primary, secondary, middle
    pub mouse_down: [bool; 3],
    /// Wheel movement since the previous frame (positive = away from the user)
    pub mouse_wheel: f32,
    /// Key state indexed by host key code
    pub keys_down: [bool; KEYS_DOWN_LEN],
    /// Modifiers at the most recent key event
    pub modifiers: KeyModifiers,
    /// Host codes of the keys the library handles itself
    pub key_map: KeyMap,
    /// Host clipboard
    pub clipboard: ClipboardSlot,
    input_characters: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            delta_time: 0.0,
            mouse_pos: [0.0, 0.0],
            mouse_down: [false; 3],
            mouse_wheel: 0.0,
            keys_down: [false; KEYS_DOWN_LEN],
            modifiers: KeyModifiers::empty(),
            key_map: KeyMap::default(),
            clipboard: ClipboardSlot::default(),
            input_characters: String::new(),
        }
    }
}

impl InputState {
    /// Queue typed text for the next layout pass
    pub fn add_input_characters(&mut self, text: &str) {
        self.input_characters.push_str(text);
    }

    /// Text typed since the library last drained it
    pub fn input_characters(&self) -> &str {
        &self.input_characters
    }

    /// Hand queued text to the library
    pub fn take_input_characters(&mut self) -> String {
        std::mem::take(&mut self.input_characters)
    }

    /// Whether a host key code is held
    pub fn is_key_down(&self, code: usize) -> bool {
        self.keys_down.get(code).copied().unwrap_or(false)
    }

    /// Shift held at the last key event
    pub fn key_shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Control held at the last key event
    pub fn key_ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Alt held at the last key event
    pub fn key_alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Copy held buttons into `mouse_down`
    pub fn set_mouse_buttons(&mut self, buttons: MouseButtons) {
        self.mouse_down = [
            buttons.contains(MouseButtons::PRIMARY),
            buttons.contains(MouseButtons::SECONDARY),
            buttons.contains(MouseButtons::MIDDLE),
        ];
    }
}
