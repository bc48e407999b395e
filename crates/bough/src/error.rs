//! Errors for edits the editor refuses to apply.

use std::fmt;

/// An edit the editor aborted instead of applying.
///
/// Distinct from the silent no-op paths: a no-op returns the forest
/// unchanged, an error means the caller's data and the active instruction
/// disagree and the edit (e.g. the in-flight drag) should be cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// A reparent instruction pointed at a target, or an ancestor level of
    /// that target, that no longer exists in the forest.
    TargetVanished {
        /// Key the active instruction pointed at.
        target_id: String,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::TargetVanished { target_id } => {
                write!(f, "drop target `{target_id}` vanished from the forest")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Result of applying one edit action: the new forest, or an aborted edit.
pub type EditResult<T> = Result<Vec<T>, EditError>;
