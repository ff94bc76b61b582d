#![forbid(unsafe_code)]

//! Commit-on-blur / commit-on-enter behavior.
//!
//! [`Committable`] wraps any base input implementing [`Editable`] and
//! detects that a change to its value has been committed: the base loses
//! focus, or the Enter key is pressed while it has focus. The committed
//! `(path, value)` pair is handed synchronously to a caller-supplied
//! callback and not retained.

use core::fmt;

use formkit_core::event::{Event, KeyCode};
use formkit_core::path::Path;
use formkit_core::value::Value;

/// Callback invoked with a finalized `(path, value)` pair.
pub type CommitHandler = Box<dyn FnMut(&Path, &Value)>;

/// Forward a finalized `(path, value)` pair to a commit callback.
///
/// Pure forwarding: no transformation and no validation of the value.
pub fn commit(path: &Path, value: &Value, handler: &mut dyn FnMut(&Path, &Value)) {
    handler(path, value);
}

/// Capability interface for inputs that can be wrapped by [`Committable`]:
/// a pending scalar value, a blur notification, and a confirm-key
/// notification.
pub trait Editable {
    /// Replace the pending value.
    fn set_value(&mut self, value: &str);

    /// The current pending value.
    fn value(&self) -> &str;

    /// Notification that the input lost focus.
    fn notify_blur(&mut self) {}

    /// Notification that the confirm key was pressed.
    fn notify_confirm_key(&mut self) {}
}

/// Wrapper adding commit semantics to a base input.
///
/// The wrapper forwards blur and confirm-key notifications to the base
/// before committing, so the base observes events in the same order the
/// host dispatched them. Committing is pure forwarding: the pending value
/// is reported as-is, with no transformation or validation.
pub struct Committable<T: Editable> {
    base: T,
    path: Path,
    on_commit: Option<CommitHandler>,
}

impl<T: Editable> Committable<T> {
    /// Wrap a base input, committing to the given path.
    #[must_use]
    pub fn new(base: T, path: Path) -> Self {
        Self {
            base,
            path,
            on_commit: None,
        }
    }

    /// Set the commit callback (builder).
    #[must_use]
    pub fn on_commit(mut self, handler: impl FnMut(&Path, &Value) + 'static) -> Self {
        self.on_commit = Some(Box::new(handler));
        self
    }

    /// The wrapped base input.
    pub fn base(&self) -> &T {
        &self.base
    }

    /// The wrapped base input, mutably.
    pub fn base_mut(&mut self) -> &mut T {
        &mut self.base
    }

    /// The path this input commits to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle a host event.
    ///
    /// Blur commits the pending value after forwarding the blur to the
    /// base; an Enter key press commits after forwarding the confirm-key
    /// notification. Returns `true` if the event triggered a commit.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Focus(false) => {
                self.base.notify_blur();
                self.commit();
                true
            }
            Event::Key(key) if key.is_active() && key.code == KeyCode::Enter => {
                self.base.notify_confirm_key();
                self.commit();
                true
            }
            _ => false,
        }
    }

    fn commit(&mut self) {
        if let Some(handler) = &mut self.on_commit {
            let value = Value::text(self.base.value());
            commit(&self.path, &value, handler.as_mut());
        }
    }
}

impl<T: Editable + fmt::Debug> fmt::Debug for Committable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Committable")
            .field("base", &self.base)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
