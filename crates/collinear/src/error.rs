//! Construction-time failures shared by both finders.

use crate::geom::Point;

/// Precondition violations detected before any detection work runs.
///
/// Both are deterministic properties of the input; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollinearError {
    /// The collection itself (`index == None`) or the entry at `index` is absent.
    #[error(
        "null input{}",
        .index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    NullInput { index: Option<usize> },

    /// Two entries share identical coordinates.
    #[error("duplicate point {point}")]
    DuplicatePoint { point: Point },
}
