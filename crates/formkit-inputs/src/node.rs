#![forbid(unsafe_code)]

//! Input descriptor trees and value distribution.
//!
//! An [`InputNode`] tree describes the logical shape of a compound input:
//! which descendants are inputs, what they are named, and where they read
//! their values from. The tree is an explicit data structure owned by the
//! host, decoupled from whatever render tree the host maintains.
//!
//! [`distribute`] walks a value tree and an input tree together, computing
//! for every input node the exact sub-value it should display.
//!
//! # Example
//!
//! ```
//! use formkit_core::{Path, Value, ValueMap};
//! use formkit_inputs::node::{InputNode, distribute};
//!
//! let tree = Value::Map(ValueMap::new().with(
//!     "a",
//!     ValueMap::new().with("b", "1-200").with("c", "Hello"),
//! ));
//!
//! let root = InputNode::input()
//!     .with_subpath(["a"])
//!     .child(InputNode::input().with_name("b"))
//!     .child(InputNode::input().with_name("c"));
//!
//! let resolved = distribute(&tree, &root).unwrap();
//! assert_eq!(resolved[1].path, Path::from(["a", "b"]));
//! assert_eq!(resolved[1].value, Some(&Value::text("1-200")));
//! ```

use formkit_core::path::{Path, PathError, Subpath, resolve_value};
use formkit_core::value::Value;

/// Whether a node participates in path resolution or is purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// An input: resolves a path and receives a value.
    #[default]
    Input,

    /// A structural wrapper: traversed through, contributes nothing to
    /// the path, and receives no value.
    Structural,
}

/// A node in the logical input tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputNode {
    kind: NodeKind,
    name: Option<String>,
    subpath: Option<Subpath>,
    default_child_subpath: Option<String>,
    children: Vec<InputNode>,
}

impl InputNode {
    /// Create an input node with no name or subpath (pass-through until
    /// configured otherwise).
    #[must_use]
    pub fn input() -> Self {
        Self::default()
    }

    /// Create a structural wrapper node.
    #[must_use]
    pub fn structural() -> Self {
        Self {
            kind: NodeKind::Structural,
            ..Self::default()
        }
    }

    /// Set the node's name (builder).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an explicit subpath override (builder). Accepts a single
    /// segment or a segment sequence.
    #[must_use]
    pub fn with_subpath(mut self, subpath: impl Into<Subpath>) -> Self {
        self.subpath = Some(subpath.into());
        self
    }

    /// Set the subpath offered to direct children that specify neither a
    /// name nor a subpath of their own (builder).
    #[must_use]
    pub fn with_default_child_subpath(mut self, segment: impl Into<String>) -> Self {
        self.default_child_subpath = Some(segment.into());
        self
    }

    /// Add a child node (builder).
    #[must_use]
    pub fn child(mut self, node: InputNode) -> Self {
        self.children.push(node);
        self
    }

    /// Whether this node participates in path resolution as an input.
    ///
    /// Containers use this to decide whether a node is a leaf input or a
    /// transparent structural wrapper.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self.kind, NodeKind::Input)
    }

    /// The node's name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The node's explicit subpath override, if any.
    #[must_use]
    pub fn subpath(&self) -> Option<&Subpath> {
        self.subpath.as_ref()
    }

    /// The subpath this node offers to its direct children, if any.
    #[must_use]
    pub fn default_child_subpath(&self) -> Option<&str> {
        self.default_child_subpath.as_deref()
    }

    /// Child nodes in declaration order.
    #[must_use]
    pub fn children(&self) -> &[InputNode] {
        &self.children
    }
}

/// Compute a node's path relative to its accumulated ancestor path.
///
/// Precedence: an explicit `subpath` is appended (its segments spliced in
/// as-is), ignoring the node's name; otherwise the name contributes one
/// segment; otherwise the `default_subpath` offered by the node's direct
/// parent applies; otherwise the node is transparent and the ancestor path
/// is returned unchanged.
pub fn resolve_path(
    ancestor: &Path,
    node: &InputNode,
    default_subpath: Option<&str>,
) -> Result<Path, PathError> {
    if let Some(subpath) = node.subpath() {
        return ancestor.join(subpath);
    }
    if let Some(name) = node.name() {
        return ancestor.child(name);
    }
    if let Some(segment) = default_subpath {
        return ancestor.child(segment);
    }
    Ok(ancestor.clone())
}

/// One input node's resolved location and display value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// The input node this entry belongs to. Node identity is the
    /// reference; two nodes resolving to the same path each get their own
    /// entry.
    pub node: &'a InputNode,

    /// The node's full path from the root of the value tree.
    pub path: Path,

    /// The sub-value at that path, or `None` if absent.
    pub value: Option<&'a Value>,
}

/// Depth-first traversal over the input nodes of a descriptor tree.
///
/// The visitor is called once per input node, in pre-order, with the
/// node's resolved path and display value. Structural wrappers are
/// traversed through without a visit and without altering the path; a
/// parent's `default_child_subpath` offer survives any number of
/// interposed structural wrappers but does not cross a deeper input node.
pub fn visit_inputs<'a, F>(
    tree: &'a Value,
    root: &'a InputNode,
    mut visit: F,
) -> Result<(), PathError>
where
    F: FnMut(&'a InputNode, &Path, Option<&'a Value>),
{
    walk(tree, root, &Path::root(), None, &mut visit)
}

fn walk<'a, F>(
    tree: &'a Value,
    node: &'a InputNode,
    ancestor: &Path,
    default_subpath: Option<&str>,
    visit: &mut F,
) -> Result<(), PathError>
where
    F: FnMut(&'a InputNode, &Path, Option<&'a Value>),
{
    if !node.is_input() {
        // Transparent wrapper: children resolve against the same ancestor
        // path and the same inherited default offer.
        for child in node.children() {
            walk(tree, child, ancestor, default_subpath, visit)?;
        }
        return Ok(());
    }

    let path = resolve_path(ancestor, node, default_subpath)?;
    let value = resolve_value(tree, &path);
    visit(node, &path, value);

    for child in node.children() {
        walk(tree, child, &path, node.default_child_subpath(), visit)?;
    }
    Ok(())
}

/// Distribute a value tree over an input descriptor tree.
///
/// Returns one [`Resolved`] entry per input node in pre-order. Identical
/// computed paths are not deduplicated; every input node gets its own
/// entry.
pub fn distribute<'a>(
    tree: &'a Value,
    root: &'a InputNode,
) -> Result<Vec<Resolved<'a>>, PathError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("distribute").entered();

    let mut resolved = Vec::new();
    visit_inputs(tree, root, |node, path, value| {
        resolved.push(Resolved {
            node,
            path: path.clone(),
            value,
        });
    })?;
    Ok(resolved)
}
