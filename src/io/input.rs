//! The raw user input the game reacts to.

/// A key which can be pressed in an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Char(char),
    F(u8),
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Insert,
    Tab,
    Enter,
}

/// A single raw input from the [`IoSystem`](super::sys::IoSystem).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// A key was pressed. Modifiers are already folded in, e.g. shift+a arrives as `Char('A')`.
    KeyPress { key: Key },
    /// The display changed (e.g. a resize) and whatever's on screen needs to be drawn again.
    Redraw,
    /// User requested the program end, e.g. with Ctrl-C
    Closed,
    /// Some unknown input was received, with a description of what it was
    Unknown(String),
    /// Trying to read input led to some kind of error, with a description
    Error(String),
}

impl From<Key> for Action {
    fn from(key: Key) -> Self {
        Self::KeyPress { key }
    }
}
