#![forbid(unsafe_code)]

//! Paths into hierarchical form values.
//!
//! A [`Path`] is an ordered sequence of string segments locating a value
//! within a [`Value`](crate::value::Value) tree. Paths are built by input
//! containers while walking their descriptor tree; a [`Subpath`] is an
//! explicit override that redirects where a node reads and writes,
//! bypassing its name-derived segment.

use core::fmt;

use crate::value::Value;

/// An ordered sequence of string segments locating a value in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The empty path, addressing the root of a value tree.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Extend this path with one segment.
    ///
    /// Fails with [`PathError::EmptySegment`] if the segment is empty.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        if segment.is_empty() {
            return Err(PathError::EmptySegment);
        }
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// Extend this path with all segments of a subpath.
    pub fn join(&self, subpath: &Subpath) -> Result<Self, PathError> {
        subpath.validate()?;
        let mut segments = self.segments.clone();
        segments.extend(subpath.iter().map(str::to_string));
        Ok(Self { segments })
    }

    /// The path's segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self::from(&segments[..])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

/// An explicit path override: one segment or an ordered segment sequence.
///
/// `Subpath::segment("x")` and `Subpath::segments(["x"])` resolve to
/// equivalent paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subpath {
    /// A single segment.
    Segment(String),

    /// An ordered sequence of segments, spliced in as-is.
    Segments(Vec<String>),
}

impl Subpath {
    /// Create a single-segment subpath.
    #[must_use]
    pub fn segment(s: impl Into<String>) -> Self {
        Self::Segment(s.into())
    }

    /// Create a multi-segment subpath.
    #[must_use]
    pub fn segments<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Segments(iter.into_iter().map(Into::into).collect())
    }

    /// Iterate segments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Segment(s) => core::slice::from_ref(s),
            Self::Segments(v) => v,
        };
        slice.iter().map(String::as_str)
    }

    /// Check this subpath for malformed shapes.
    ///
    /// An empty segment string or an empty segment sequence is a
    /// configuration error on the caller's part and fails resolution
    /// synchronously.
    pub fn validate(&self) -> Result<(), PathError> {
        match self {
            Self::Segment(s) if s.is_empty() => Err(PathError::EmptySegment),
            Self::Segments(v) if v.is_empty() => Err(PathError::EmptySubpath),
            Self::Segments(v) if v.iter().any(String::is_empty) => Err(PathError::EmptySegment),
            _ => Ok(()),
        }
    }
}

impl From<&str> for Subpath {
    fn from(s: &str) -> Self {
        Self::Segment(s.to_string())
    }
}

impl From<String> for Subpath {
    fn from(s: String) -> Self {
        Self::Segment(s)
    }
}

impl From<Vec<String>> for Subpath {
    fn from(v: Vec<String>) -> Self {
        Self::Segments(v)
    }
}

impl<const N: usize> From<[&str; N]> for Subpath {
    fn from(segments: [&str; N]) -> Self {
        Self::segments(segments)
    }
}

/// Configuration errors in path construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A path or subpath segment is the empty string.
    EmptySegment,
    /// An explicit segment sequence has no elements.
    EmptySubpath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySegment => write!(f, "path segment must be non-empty"),
            Self::EmptySubpath => write!(f, "subpath segment sequence must be non-empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// Walk a value tree by successive path segments.
///
/// Returns `None` if any segment is absent or an intermediate value is a
/// scalar. Absence is a normal state (a new, empty record resolves every
/// path to `None`) and never an error.
#[must_use]
pub fn resolve_value<'a>(tree: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = current.get(segment)?;
    }
    Some(current)
}
