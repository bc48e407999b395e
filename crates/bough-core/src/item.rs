//! Node abstraction for forests edited by `bough`.
//!
//! The embedding application owns its node type; the editor only needs to
//! walk an ordered child sequence and produce edited copies. Keys are *not*
//! part of this trait — every editing operation takes a caller-supplied
//! key-extraction function, so items are free to derive their key from any
//! field or combination of fields.
//!
//! # Example
//!
//! ```
//! use bough_core::{TreeItem, has_children};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Entry {
//!     id: String,
//!     children: Vec<Entry>,
//! }
//!
//! impl TreeItem for Entry {
//!     fn children(&self) -> &[Self] {
//!         &self.children
//!     }
//!
//!     fn with_children(&self, children: Vec<Self>) -> Self {
//!         Entry { id: self.id.clone(), children }
//!     }
//! }
//!
//! let leaf = Entry { id: "a".into(), children: Vec::new() };
//! assert!(!has_children(&leaf));
//! ```

/// A node in an ordered forest.
///
/// Implementations must uphold the immutable-copy contract: `with_children`
/// and `opened` return fresh values and never mutate `self`. The editor
/// relies on this to keep prior forest snapshots intact across edits.
pub trait TreeItem: Clone {
    /// Ordered child sequence. A leaf returns an empty slice.
    fn children(&self) -> &[Self];

    /// Copy of this item with the child sequence replaced.
    #[must_use]
    fn with_children(&self, children: Vec<Self>) -> Self;

    /// Copy of this item marked expanded/open.
    ///
    /// Called when the item receives a new first child, so the inserted
    /// child is visible in a collapsed-by-default view. Items that keep
    /// expansion state elsewhere (see `ExpandState`) leave the default,
    /// which is the identity.
    #[must_use]
    fn opened(&self) -> Self {
        self.clone()
    }
}

/// True iff the item's child sequence is non-empty.
///
/// An empty sequence and an absent one are both "no children"; only a
/// sequence with at least one entry counts.
#[must_use]
pub fn has_children<T: TreeItem>(item: &T) -> bool {
    !item.children().is_empty()
}
