#![forbid(unsafe_code)]

//! Item model and action vocabulary for the `bough` tree editor.
//!
//! This crate defines the vocabulary shared between a tree widget layer and
//! the structural editor in the `bough` crate: the [`TreeItem`] abstraction
//! over application-defined nodes, the [`TreeAction`] / [`DropInstruction`]
//! tagged unions describing one edit, and [`ExpandState`] for the
//! expanded/collapsed view state the structural editor deliberately does not
//! own.

pub mod action;
pub mod expand;
pub mod item;

pub use action::{DropInstruction, ROOT_TARGET, TreeAction};
pub use expand::ExpandState;
pub use item::{TreeItem, has_children};
