//! Key map between the UI library's navigation/editing keys and host key codes

/// Keys the UI library asks the host to map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiKey {
    /// Tab
    Tab,
    /// Left arrow
    LeftArrow,
    /// Right arrow
    RightArrow,
    /// Up arrow
    UpArrow,
    /// Down arrow
    DownArrow,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Delete
    Delete,
    /// Backspace
    Backspace,
    /// Enter
    Enter,
    /// Escape
    Escape,
    /// A, select all
    A,
    /// C, copy
    C,
    /// V, paste
    V,
    /// X, cut
    X,
    /// Y, redo
    Y,
    /// Z, undo
    Z,
}

impl UiKey {
    /// Number of mapped keys
    pub const COUNT: usize = 19;

    /// Every key, in table order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Tab,
        Self::LeftArrow,
        Self::RightArrow,
        Self::UpArrow,
        Self::DownArrow,
        Self::PageUp,
        Self::PageDown,
        Self::Home,
        Self::End,
        Self::Delete,
        Self::Backspace,
        Self::Enter,
        Self::Escape,
        Self::A,
        Self::C,
        Self::V,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Slot of the key in a [`KeyMap`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Host key code for each [`UiKey`]
///
/// Host key codes index `InputState::keys_down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyMap {
    codes: [Option<usize>; UiKey::COUNT],
}

impl KeyMap {
    /// Build a complete map from a lookup function
    pub fn from_fn(mut lookup: impl FnMut(UiKey) -> usize) -> Self {
        let mut map = Self::default();
        for key in UiKey::ALL {
            map.set(key, lookup(key));
        }
        map
    }

    /// Map one key
    pub fn set(&mut self, key: UiKey, code: usize) {
        self.codes[key.index()] = Some(code);
    }

    /// Host code of a key, if mapped
    pub fn get(&self, key: UiKey) -> Option<usize> {
        self.codes[key.index()]
    }

    /// Whether every key has a host code
    pub fn is_complete(&self) -> bool {
        self.codes.iter().all(Option::is_some)
    }
}
