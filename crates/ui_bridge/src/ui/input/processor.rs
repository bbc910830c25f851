//! UI Input Processing
//!
//! Moves host input into the UI library's input model. Text and keys are applied as
//! events arrive; pointer position, buttons and the wheel are sampled once per frame.

use super::state::{InputState, KeyModifiers, MouseButtons};

/// Input event forwarded by the input backend
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Wheel moved; positive is away from the user
    Wheel(f32),
    /// Text typed (already composed, UTF-8)
    Text(String),
    /// Key pressed or released
    Key {
        /// Host key code, an index into `InputState::keys_down`
        code: usize,
        /// Pressed (`true`) or released (`false`)
        pressed: bool,
        /// Modifiers held at the moment of the event
        modifiers: KeyModifiers,
    },
}

/// Pointer state at the moment of the frame sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Absolute position in window pixels
    pub position: [f32; 2],
    /// Buttons held
    pub buttons: MouseButtons,
}

/// Frame input sampler
///
/// The wheel is level-triggered per frame: every wheel event between two samples is
/// summed and the sum is handed to the library once, then cleared.
#[derive(Debug, Default)]
pub struct InputSampler {
    pending_wheel: f32,
}

impl InputSampler {
    /// Create a new sampler
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the input model
    pub fn handle_event(&mut self, event: InputEvent, io: &mut InputState) {
        match event {
            InputEvent::Wheel(delta) => {
                self.pending_wheel += delta;
            }
            InputEvent::Text(text) => {
                io.add_input_characters(&text);
            }
            InputEvent::Key { code, pressed, modifiers } => {
                match io.keys_down.get_mut(code) {
                    Some(slot) => *slot = pressed,
                    None => log::trace!("Ignoring key code {} outside the key table", code),
                }
                io.modifiers = modifiers;
            }
        }
    }

    /// Write the frame's pointer sample into the input model and reset the wheel
    pub fn sample(&mut self, pointer: PointerState, io: &mut InputState) {
        io.mouse_pos = pointer.position;
        io.set_mouse_buttons(pointer.buttons);
        io.mouse_wheel = self.pending_wheel;
        self.pending_wheel = 0.0;
    }

    /// Wheel movement collected since the last sample
    pub fn pending_wheel(&self) -> f32 {
        self.pending_wheel
    }
}
