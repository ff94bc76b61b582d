#![forbid(unsafe_code)]

//! Core: canonical value, path, and event types for FormKit.

pub mod event;
pub mod logging;
pub mod path;
pub mod value;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerTarget};
pub use path::{Path, PathError, Subpath, resolve_value};
pub use value::{Value, ValueMap};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
