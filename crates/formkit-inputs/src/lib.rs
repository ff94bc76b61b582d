#![forbid(unsafe_code)]

//! Input behaviors for FormKit: descriptor trees and value distribution,
//! commit-on-blur/enter, option lists, and the dropdown popup machine.

pub mod commit;
pub mod dropdown;
pub mod node;
pub mod options;
pub mod text;

pub use commit::{CommitHandler, Committable, Editable, commit};
pub use dropdown::{DropdownMenuInput, PopupState, ToggleHandler};
pub use node::{InputNode, NodeKind, Resolved, distribute, resolve_path, visit_inputs};
pub use options::{MenuOption, display_label, label_for_value};
pub use text::TextInput;
