#![forbid(unsafe_code)]

//! Keyboard input delivered by the host while a tour holds the keyboard
//! scope.
//!
//! These types are the host-facing key vocabulary: hosts translate their
//! platform events into [`KeyEvent`] in full. The engine itself only acts
//! on an Escape press and ignores modifiers.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish it
//! - `Modifiers` use bitflags for easy combination
//! - Only presses are acted upon; repeats and releases are ignored

use bitflags::bitflags;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Map a legacy DOM `keyCode`/`which` value.
    #[must_use]
    pub const fn from_key_code(code: u32) -> Self {
        let code = match code {
            8 => KeyCode::Backspace,
            9 => KeyCode::Tab,
            13 => KeyCode::Enter,
            27 => KeyCode::Escape,
            37 => KeyCode::Left,
            38 => KeyCode::Up,
            39 => KeyCode::Right,
            40 => KeyCode::Down,
            other => KeyCode::Other(other),
        };
        Self::new(code)
    }

    /// An Escape press, regardless of modifiers.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Escape && self.kind == KeyEventKind::Press
    }
}

/// Key codes the tour engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Any other host key code.
    Other(u32),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_key_codes_map_to_named_keys() {
        assert_eq!(KeyEvent::from_key_code(27).code, KeyCode::Escape);
        assert_eq!(KeyEvent::from_key_code(13).code, KeyCode::Enter);
        assert_eq!(KeyEvent::from_key_code(65).code, KeyCode::Other(65));
    }

    #[test]
    fn escape_release_is_not_a_press() {
        let press = KeyEvent::new(KeyCode::Escape);
        let release = press.with_kind(KeyEventKind::Release);
        assert!(press.is_escape());
        assert!(!release.is_escape());
    }

    #[test]
    fn modifiers_combine() {
        let event = KeyEvent::new(KeyCode::Char('k')).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(event.modifiers.contains(Modifiers::CTRL));
        assert!(!event.modifiers.contains(Modifiers::ALT));
    }
}
