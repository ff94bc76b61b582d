#![forbid(unsafe_code)]

//! Dropdown menu input.
//!
//! A "pick a value from a list" input built around a small open/closed
//! popup machine. The trigger surface opens the popup on pointer-down or
//! on the Down arrow while focused; selecting an item updates the
//! displayed value and label, commits, and closes; Escape or losing focus
//! closes without committing.
//!
//! Within one interaction the display update happens before the commit
//! callback, which happens before the close notification. All three are
//! synchronous; callers may rely on that order.

use core::fmt;

use formkit_core::event::{Event, KeyCode, KeyEvent, PointerEvent, PointerEventKind, PointerTarget};
use formkit_core::path::Path;
use formkit_core::value::Value;

use crate::commit::{CommitHandler, commit};
use crate::options::{MenuOption, display_label};

/// Open/closed state of a popup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PopupState {
    /// The popup is not shown.
    #[default]
    Closed,

    /// The popup is shown.
    Open,
}

/// Callback invoked when the popup opens or closes.
pub type ToggleHandler = Box<dyn FnMut()>;

/// A dropdown input that picks one value from an option list.
pub struct DropdownMenuInput {
    options: Vec<MenuOption>,
    path: Path,
    /// Committed/displayed value.
    value: Value,
    /// Displayed label, maintained per the precedence rule in
    /// [`display_label`].
    value_label: String,
    /// Caller-supplied label override for the current value.
    label_override: Option<String>,
    state: PopupState,
    /// Targeted menu item while open.
    cursor: Option<usize>,
    trigger_focused: bool,
    menu_focused: bool,
    /// Opaque header content for the rendering layer.
    menu_header: Option<String>,
    /// Opaque footer content for the rendering layer.
    menu_footer: Option<String>,
    on_open: Option<ToggleHandler>,
    on_close: Option<ToggleHandler>,
    on_commit: Option<CommitHandler>,
}

impl DropdownMenuInput {
    /// Create a dropdown committing to the given path, with no options
    /// and no value.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self {
            options: Vec::new(),
            path,
            value: Value::Null,
            value_label: String::new(),
            label_override: None,
            state: PopupState::Closed,
            cursor: None,
            trigger_focused: false,
            menu_focused: false,
            menu_header: None,
            menu_footer: None,
            on_open: None,
            on_close: None,
            on_commit: None,
        }
    }

    // --- Builder methods ---

    /// Set the option list (builder).
    #[must_use]
    pub fn with_options(mut self, options: Vec<MenuOption>) -> Self {
        self.options = options;
        self.recompute_label();
        self
    }

    /// Set the current value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self.recompute_label();
        self
    }

    /// Set an explicit label for the current value (builder). The
    /// override is shown verbatim even when an option matches the value
    /// with a different label.
    #[must_use]
    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.label_override = Some(label.into());
        self.recompute_label();
        self
    }

    /// Seed the popup open or closed (builder). Seeding open does not
    /// fire `on_open`; notifications report transitions, not starting
    /// conditions.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        if open {
            self.state = PopupState::Open;
            self.cursor = self.initial_cursor();
        } else {
            self.state = PopupState::Closed;
            self.cursor = None;
        }
        self
    }

    /// Set header content carried opaquely for the rendering layer
    /// (builder).
    #[must_use]
    pub fn with_menu_header(mut self, content: impl Into<String>) -> Self {
        self.menu_header = Some(content.into());
        self
    }

    /// Set footer content carried opaquely for the rendering layer
    /// (builder).
    #[must_use]
    pub fn with_menu_footer(mut self, content: impl Into<String>) -> Self {
        self.menu_footer = Some(content.into());
        self
    }

    /// Set the open notification callback (builder).
    #[must_use]
    pub fn on_open(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(handler));
        self
    }

    /// Set the close notification callback (builder).
    #[must_use]
    pub fn on_close(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Set the commit callback (builder).
    #[must_use]
    pub fn on_commit(mut self, handler: impl FnMut(&Path, &Value) + 'static) -> Self {
        self.on_commit = Some(Box::new(handler));
        self
    }

    // --- State access ---

    /// Current popup state.
    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    /// Whether the popup is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, PopupState::Open)
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The displayed label for the current value.
    #[must_use]
    pub fn value_label(&self) -> &str {
        &self.value_label
    }

    /// The path this input commits to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The option list.
    #[must_use]
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Index of the targeted menu item while open.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether the menu surface holds programmatic focus.
    #[must_use]
    pub const fn menu_focused(&self) -> bool {
        self.menu_focused
    }

    /// Header content for the rendering layer, if any.
    #[must_use]
    pub fn menu_header(&self) -> Option<&str> {
        self.menu_header.as_deref()
    }

    /// Footer content for the rendering layer, if any.
    #[must_use]
    pub fn menu_footer(&self) -> Option<&str> {
        self.menu_footer.as_deref()
    }

    // --- Host-driven synchronization ---

    /// Apply an external value change.
    ///
    /// Recomputes the displayed label (override first, then the matching
    /// option's label, then empty). Does not change the open/closed
    /// state and fires no notifications.
    pub fn sync_value(&mut self, value: impl Into<Value>, label_override: Option<String>) {
        self.value = value.into();
        self.label_override = label_override;
        self.recompute_label();
    }

    /// Apply an external open/closed change without notifications.
    pub fn set_open(&mut self, open: bool) {
        if open && self.state == PopupState::Closed {
            self.state = PopupState::Open;
            self.cursor = self.initial_cursor();
        } else if !open && self.state == PopupState::Open {
            self.state = PopupState::Closed;
            self.cursor = None;
            self.menu_focused = false;
        }
    }

    /// Request programmatic focus for the menu surface.
    ///
    /// No-op while closed: no focus change, no error, no state change.
    pub fn focus_menu(&mut self) {
        if self.is_open() {
            self.menu_focused = true;
        }
    }

    /// Return programmatic focus to the trigger surface.
    pub fn focus_trigger(&mut self) {
        self.menu_focused = false;
        self.trigger_focused = true;
    }

    // --- Event handling ---

    /// Handle a host event. Returns `true` if the state changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("dropdown_event", state = ?self.state).entered();

        match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Key(key) if key.is_active() => self.handle_key(key),
            Event::Key(_) => false,
            Event::Focus(focused) => self.handle_focus(*focused),
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent) -> bool {
        match (self.state, pointer.kind, pointer.target) {
            (PopupState::Closed, PointerEventKind::Down, PointerTarget::Trigger) => self.open(),
            (PopupState::Open, PointerEventKind::Click, PointerTarget::MenuItem(index)) => {
                self.select(index)
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.state {
            PopupState::Closed => match key.code {
                KeyCode::Down if self.trigger_focused => self.open(),
                _ => false,
            },
            PopupState::Open => match key.code {
                KeyCode::Escape => self.close(),
                KeyCode::Enter => match self.cursor {
                    Some(index) => self.select(index),
                    None => false,
                },
                KeyCode::Down => self.move_cursor(1),
                KeyCode::Up => self.move_cursor(-1),
                _ => false,
            },
        }
    }

    fn handle_focus(&mut self, focused: bool) -> bool {
        if focused {
            let changed = !self.trigger_focused;
            self.trigger_focused = true;
            changed
        } else {
            let had_focus = self.trigger_focused || self.menu_focused;
            self.trigger_focused = false;
            self.menu_focused = false;
            if self.is_open() {
                self.close()
            } else {
                had_focus
            }
        }
    }

    // --- Transitions ---

    fn open(&mut self) -> bool {
        self.state = PopupState::Open;
        self.cursor = self.initial_cursor();
        if let Some(handler) = &mut self.on_open {
            handler();
        }
        true
    }

    fn close(&mut self) -> bool {
        self.state = PopupState::Closed;
        self.cursor = None;
        self.menu_focused = false;
        if let Some(handler) = &mut self.on_close {
            handler();
        }
        true
    }

    fn select(&mut self, index: usize) -> bool {
        let Some(option) = self.options.get(index).cloned() else {
            return false;
        };

        // Display update first, then commit, then close.
        self.value = Value::Text(option.value);
        self.value_label = option.label;
        self.label_override = None;

        if let Some(handler) = &mut self.on_commit {
            commit(&self.path, &self.value, handler.as_mut());
        }

        self.close();
        self.focus_trigger();
        true
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let last = self.options.len() - 1;
        let current = self.cursor.unwrap_or(0);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize).min(last)
        };
        let changed = self.cursor != Some(next);
        self.cursor = Some(next);
        changed
    }

    fn initial_cursor(&self) -> Option<usize> {
        if self.options.is_empty() {
            return None;
        }
        let index = self
            .value
            .as_text()
            .and_then(|value| self.options.iter().position(|o| o.value == value))
            .unwrap_or(0);
        Some(index)
    }

    fn recompute_label(&mut self) {
        let value = self.value.as_text().unwrap_or("");
        self.value_label =
            display_label(&self.options, value, self.label_override.as_deref()).to_string();
    }
}

impl fmt::Debug for DropdownMenuInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownMenuInput")
            .field("path", &self.path)
            .field("state", &self.state)
            .field("value", &self.value)
            .field("value_label", &self.value_label)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
