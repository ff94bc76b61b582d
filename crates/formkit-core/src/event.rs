#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types used throughout FormKit for
//! input handling. All events derive `Clone`, `PartialEq`, and `Eq` for
//! use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Events are supplied by the host rendering layer; FormKit has no
//!   backend of its own and never reads input devices directly.
//! - Pointer events are target-addressed, not coordinate-addressed. Hit
//!   testing is a rendering concern; the host reports *what* was hit.
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish
//!   press from repeat or release.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

/// Canonical input event.
///
/// This enum represents all interaction events a FormKit widget can
/// receive from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer event addressed to a semantic target.
    Pointer(PointerEvent),

    /// Focus entered or left the widget's subtree.
    ///
    /// `true` = focus gained, `false` = focus lost. "Subtree" covers the
    /// trigger together with any popup surface it owns; the host decides
    /// when focus has genuinely left that group.
    Focus(bool),
}

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

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether widgets should act on this event (press or repeat).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes for keyboard events.
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

    /// Delete key.
    Delete,

    /// Tab key.
    Tab,

    /// Shift+Tab (back-tab).
    BackTab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
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

/// A pointer event addressed to a semantic target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// What the pointer hit, as reported by the host's hit testing.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, target: PointerTarget) -> Self {
        Self { kind, target }
    }

    /// Pointer-down on the widget's trigger surface.
    #[must_use]
    pub const fn down_on_trigger() -> Self {
        Self::new(PointerEventKind::Down, PointerTarget::Trigger)
    }

    /// Click on a popup menu item by index.
    #[must_use]
    pub const fn click_item(index: usize) -> Self {
        Self::new(PointerEventKind::Click, PointerTarget::MenuItem(index))
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer button pressed.
    Down,

    /// Pointer button released.
    Up,

    /// Press and release on the same target.
    Click,
}

/// Semantic target of a pointer event within a widget's subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The widget's trigger surface (e.g. the input box of a dropdown).
    Trigger,

    /// An item in the widget's popup list, by index.
    MenuItem(usize),

    /// Anywhere outside the widget's subtree.
    Outside,
}
