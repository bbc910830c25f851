//! GLFW input backend
//!
//! GLFW delivers events through the host's own receiver, so the host forwards each
//! `glfw::WindowEvent` to [`GlfwInputBackend::handle_window_event`] from its event loop.
//! Scroll, text and key events are taken by the bridge; cursor and button events
//! are only observed so the host still sees them.
//!
//! GLFW's clipboard belongs to a window, which the host keeps. The backend mirrors
//! it: [`GlfwInputBackend::sync_clipboard`] pushes text the UI copied and reads the
//! current clipboard back, once per frame before `UiBridge::update`.

use super::backend::InputBackend;
use super::keymap::UiKey;
use super::processor::{InputEvent, PointerState};
use super::state::{KeyModifiers, MouseButtons};
use glfw::{Action, Key, Modifiers, MouseButton, Window, WindowEvent};
use std::time::Instant;

/// Input backend fed with GLFW window events
#[derive(Debug)]
pub struct GlfwInputBackend {
    subscribed: bool,
    pending: Vec<InputEvent>,
    pointer: PointerState,
    epoch: Instant,
    clipboard: Option<String>,
    clipboard_outgoing: Option<String>,
}

impl Default for GlfwInputBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GlfwInputBackend {
    /// Create an unsubscribed backend
    pub fn new() -> Self {
        Self {
            subscribed: false,
            pending: Vec::new(),
            pointer: PointerState::default(),
            epoch: Instant::now(),
            clipboard: None,
            clipboard_outgoing: None,
        }
    }

    /// Exchange clipboard text with the window's clipboard
    ///
    /// Text the UI library copied since the last sync is written first, then the
    /// mirror is refreshed from the window.
    pub fn sync_clipboard(&mut self, window: &mut Window) {
        if let Some(text) = self.clipboard_outgoing.take() {
            window.set_clipboard_string(&text);
        }
        self.clipboard = window.get_clipboard_string();
    }

    /// Offer a window event to the bridge
    ///
    /// Returns `true` when the bridge consumed the event and the host should not
    /// act on it. Nothing is consumed while unsubscribed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        if !self.subscribed {
            return false;
        }

        match event {
            WindowEvent::Scroll(_, y) => {
                if *y != 0.0 {
                    self.pending.push(InputEvent::Wheel(y.signum() as f32));
                }
                true
            }
            WindowEvent::Char(ch) => {
                self.pending.push(InputEvent::Text(ch.to_string()));
                true
            }
            WindowEvent::Key(key, _, action, mods) => {
                let Some(code) = key_index(*key) else {
                    return false;
                };
                self.pending.push(InputEvent::Key {
                    code,
                    pressed: *action != Action::Release,
                    modifiers: convert_modifiers(*mods),
                });
                true
            }
            WindowEvent::CursorPos(x, y) => {
                self.pointer.position = [*x as f32, *y as f32];
                false
            }
            WindowEvent::MouseButton(button, action, _) => {
                if let Some(flag) = button_flag(*button) {
                    self.pointer.buttons.set(flag, *action != Action::Release);
                }
                false
            }
            _ => false,
        }
    }
}

impl InputBackend for GlfwInputBackend {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.pending.clear();
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn key_code(&self, key: UiKey) -> usize {
        let glfw_key = match key {
            UiKey::Tab => Key::Tab,
            UiKey::LeftArrow => Key::Left,
            UiKey::RightArrow => Key::Right,
            UiKey::UpArrow => Key::Up,
            UiKey::DownArrow => Key::Down,
            UiKey::PageUp => Key::PageUp,
            UiKey::PageDown => Key::PageDown,
            UiKey::Home => Key::Home,
            UiKey::End => Key::End,
            UiKey::Delete => Key::Delete,
            UiKey::Backspace => Key::Backspace,
            UiKey::Enter => Key::Enter,
            UiKey::Escape => Key::Escape,
            UiKey::A => Key::A,
            UiKey::C => Key::C,
            UiKey::V => Key::V,
            UiKey::X => Key::X,
            UiKey::Y => Key::Y,
            UiKey::Z => Key::Z,
        };
        // Every key above has a non-negative GLFW code
        glfw_key as usize
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    fn now_seconds(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
        self.clipboard_outgoing = Some(text.to_string());
    }
}

/// GLFW key code as a key-table index; `None` for `Key::Unknown`
fn key_index(key: Key) -> Option<usize> {
    usize::try_from(key as i32).ok()
}

fn convert_modifiers(mods: Modifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, mods.contains(Modifiers::Shift));
    out.set(KeyModifiers::CTRL, mods.contains(Modifiers::Control));
    out.set(KeyModifiers::ALT, mods.contains(Modifiers::Alt));
    out
}

fn button_flag(button: MouseButton) -> Option<MouseButtons> {
    match button {
        MouseButton::Button1 => Some(MouseButtons::PRIMARY),
        MouseButton::Button2 => Some(MouseButtons::SECONDARY),
        MouseButton::Button3 => Some(MouseButtons::MIDDLE),
        _ => None,
    }
}
