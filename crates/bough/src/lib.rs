#![forbid(unsafe_code)]

//! Pure-data tree editing for drag-and-drop UIs.
//!
//! `bough` applies structural edits — remove, reorder, reparent, nest — to
//! an ordered forest of application-defined items, in response to drag/drop
//! instructions or modal-driven moves. The caller owns the forest snapshot
//! (typically inside a reactive store), submits one [`TreeAction`] at a
//! time, and replaces its snapshot with the returned forest. The editor
//! keeps no state between calls: each invocation is a self-contained
//! transform, and inputs are never mutated, so prior snapshots stay valid
//! for concurrent readers.
//!
//! Rendering, drag affordances, and hitbox geometry live in whatever widget
//! layer sits above; this crate is only the shape-deriving core it calls
//! into.
//!
//! # Example
//!
//! ```
//! use bough::{DropInstruction, TreeAction, TreeItem, apply};
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
//! let entry = |id: &str| Entry { id: id.into(), children: Vec::new() };
//! let forest = vec![entry("a"), entry("b"), entry("c")];
//!
//! // Drag "a" below "c".
//! let action = TreeAction::Instruction {
//!     item_id: "a".into(),
//!     target_id: "c".into(),
//!     instruction: DropInstruction::ReorderBelow,
//!     item: entry("a"),
//! };
//! let edited = apply(&forest, &action, &|e: &Entry| e.id.as_str()).unwrap();
//!
//! let order: Vec<&str> = edited.iter().map(|e| e.id.as_str()).collect();
//! assert_eq!(order, ["b", "c", "a"]);
//! ```
//!
//! # Diagnostics
//!
//! Consistency problems surface as `tracing` events rather than panics:
//! warnings for recoverable desyncs (an action naming a vanished item, an
//! unimplemented instruction), errors for the one aborted edit
//! ([`EditError::TargetVanished`]). Install any `tracing` subscriber to
//! observe them.

pub mod editor;
pub mod error;
pub mod ops;

pub use bough_core::{
    DropInstruction, ExpandState, ROOT_TARGET, TreeAction, TreeItem, has_children,
};
pub use editor::{ChildLookup, apply, child_items};
pub use error::{EditError, EditResult};
