//! Edit actions understood by the tree editor.
//!
//! A [`TreeAction`] describes one desired edit against the current forest:
//! a drag-and-drop [`DropInstruction`], an expansion toggle, a modal-driven
//! move to a numeric position, or a removal. Actions are plain data — the
//! editor interprets them without retaining any state between calls.
//!
//! With the `serde` feature the unions (de)serialize internally tagged under
//! `type`, using the kebab-case names a front end would post
//! (`"modal-move"`, `"reorder-above"`, ...).

/// Sentinel target key addressing the root level of the forest.
///
/// A [`TreeAction::ModalMove`] whose `target_id` equals this sentinel moves
/// the item among the root-level siblings instead of under a node.
pub const ROOT_TARGET: &str = "";

/// One desired edit against the current forest.
///
/// `item_id` is always the key of the item being acted on. For
/// [`Instruction`](TreeAction::Instruction) the dragged item's current
/// snapshot travels in the action itself — the drag started from a snapshot
/// the caller already held — while every other variant is resolved against
/// the forest at apply time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum TreeAction<T> {
    /// Apply a drag-and-drop instruction relative to `target_id`.
    Instruction {
        /// Key of the dragged item.
        item_id: String,
        /// Key of the drop target.
        target_id: String,
        /// What the drop gesture asked for.
        instruction: DropInstruction,
        /// Snapshot of the dragged item taken when the drag started.
        item: T,
    },
    /// Flip the item's expanded state. View-level; structurally inert.
    Toggle {
        /// Key of the item to toggle.
        item_id: String,
    },
    /// Expand the item. View-level; structurally inert.
    Expand {
        /// Key of the item to expand.
        item_id: String,
    },
    /// Collapse the item. View-level; structurally inert.
    Collapse {
        /// Key of the item to collapse.
        item_id: String,
    },
    /// Move the item to position `index` among `target_id`'s children
    /// ([`ROOT_TARGET`] for the root level).
    ModalMove {
        /// Key of the item to move.
        item_id: String,
        /// Key of the new parent, or [`ROOT_TARGET`].
        target_id: String,
        /// Position among the target's children after the move.
        index: usize,
    },
    /// Delete the item and its subtree.
    Remove {
        /// Key of the item to delete.
        item_id: String,
    },
}

impl<T> TreeAction<T> {
    /// Key of the item the action applies to.
    #[must_use]
    pub fn item_id(&self) -> &str {
        match self {
            TreeAction::Instruction { item_id, .. }
            | TreeAction::Toggle { item_id }
            | TreeAction::Expand { item_id }
            | TreeAction::Collapse { item_id }
            | TreeAction::ModalMove { item_id, .. }
            | TreeAction::Remove { item_id } => item_id,
        }
    }

    /// Key of the drop/move target, for the variants that have one.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            TreeAction::Instruction { target_id, .. }
            | TreeAction::ModalMove { target_id, .. } => Some(target_id),
            _ => None,
        }
    }
}

/// What a drop gesture asked for, as resolved by the drag layer's hitbox
/// logic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum DropInstruction {
    /// Insert the dragged item immediately before the target, as a sibling.
    ReorderAbove,
    /// Insert the dragged item immediately after the target, as a sibling.
    ReorderBelow,
    /// Insert the dragged item as the target's first child.
    MakeChild,
    /// Move the dragged item next to one of the target's ancestors.
    Reparent {
        /// Index into the target's ancestor chain (0 = root level) naming
        /// the ancestor the item lands after.
        desired_level: usize,
    },
    /// An instruction the hitbox logic recognized but disallowed for this
    /// target. The editor leaves the forest unchanged.
    Blocked {
        /// The instruction that would have applied were it not blocked.
        desired: Box<DropInstruction>,
    },
}

impl DropInstruction {
    /// True for the sibling reorder kinds.
    #[must_use]
    pub fn is_reorder(&self) -> bool {
        matches!(
            self,
            DropInstruction::ReorderAbove | DropInstruction::ReorderBelow
        )
    }

    /// Requested ancestor depth, for a reparent.
    #[must_use]
    pub fn desired_level(&self) -> Option<usize> {
        match self {
            DropInstruction::Reparent { desired_level } => Some(*desired_level),
            _ => None,
        }
    }
}
