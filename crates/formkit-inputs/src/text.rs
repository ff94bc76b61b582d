#![forbid(unsafe_code)]

//! Minimal pending-text input.
//!
//! A single-line text value holder, grapheme-cluster aware for correct
//! Unicode handling. Cursor movement, selection, and scrolling are
//! rendering concerns and live in the host; this type only maintains the
//! pending value that [`Committable`](crate::commit::Committable)
//! finalizes.

use formkit_core::event::{Event, KeyCode};
use unicode_segmentation::UnicodeSegmentation;

use crate::commit::Editable;

/// A single-line pending-text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    /// Create a new empty text input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Handle a host event. Returns `true` if the value changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if !key.is_active() || key.ctrl() || key.alt() {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => self.delete_grapheme_back(),
            _ => false,
        }
    }

    fn delete_grapheme_back(&mut self) -> bool {
        let Some((offset, _)) = self.value.grapheme_indices(true).last() else {
            return false;
        };
        self.value.truncate(offset);
        true
    }
}

impl Editable for TextInput {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::event::{KeyEvent, Modifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn typing_appends_characters() {
        let mut input = TextInput::new();
        assert!(input.handle_event(&press(KeyCode::Char('h'))));
        assert!(input.handle_event(&press(KeyCode::Char('i'))));
        assert_eq!(input.value(), "hi");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = TextInput::new().with_value("ae\u{301}"); // "a" + "é" (combining)
        assert!(input.handle_event(&press(KeyCode::Backspace)));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.handle_event(&press(KeyCode::Backspace)));
    }

    #[test]
    fn modified_keys_are_ignored() {
        let mut input = TextInput::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL));
        assert!(!input.handle_event(&event));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn focus_events_do_not_change_value() {
        let mut input = TextInput::new().with_value("x");
        assert!(!input.handle_event(&Event::Focus(false)));
        assert_eq!(input.value(), "x");
    }
}
