#![forbid(unsafe_code)]

//! FormKit: composable form-input behaviors, decoupled from rendering.
//!
//! FormKit's contract with a host rendering layer is small: the host
//! supplies a value tree, an input descriptor tree, option lists, and raw
//! interaction events; FormKit hands back committed `(path, value)` pairs
//! and open/close notifications. Rendering, styling, and event dispatch
//! stay on the host's side of the line.
//!
//! # Quick start
//!
//! ```
//! use formkit::prelude::*;
//!
//! // Distribute a record over a compound input.
//! let record = Value::Map(ValueMap::new().with(
//!     "a",
//!     ValueMap::new().with("b", "1-200").with("c", "Hello"),
//! ));
//!
//! let form = InputNode::input()
//!     .with_subpath(["a"])
//!     .child(InputNode::input().with_name("b"))
//!     .child(InputNode::input().with_name("c"));
//!
//! let resolved = distribute(&record, &form)?;
//! assert_eq!(resolved[1].value, Some(&Value::text("1-200")));
//! # Ok::<(), formkit::Error>(())
//! ```

use std::fmt;

pub use formkit_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerTarget,
};
pub use formkit_core::path::{Path, PathError, Subpath, resolve_value};
pub use formkit_core::value::{Value, ValueMap};
pub use formkit_inputs::commit::{CommitHandler, Committable, Editable, commit};
pub use formkit_inputs::dropdown::{DropdownMenuInput, PopupState};
pub use formkit_inputs::node::{InputNode, Resolved, distribute, resolve_path, visit_inputs};
pub use formkit_inputs::options::{MenuOption, display_label, label_for_value};
pub use formkit_inputs::text::TextInput;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for FormKit hosts.
#[derive(Debug)]
pub enum Error {
    /// Malformed input-tree configuration (bad subpath shape).
    Config(PathError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for FormKit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Committable, DropdownMenuInput, Editable, Error, Event, InputNode, KeyCode, KeyEvent,
        MenuOption, Modifiers, Path, PointerEvent, PointerTarget, PopupState, Result, Subpath,
        TextInput, Value, ValueMap, distribute, resolve_value,
    };

    pub use crate::{core, inputs};
}

pub use formkit_core as core;
pub use formkit_inputs as inputs;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_and_display() {
        let err = Error::from(PathError::EmptySubpath);
        assert!(err.to_string().contains("non-empty"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
