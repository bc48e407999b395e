//! Action dispatcher: one edit action in, one new forest out.
//!
//! [`apply`] interprets a [`TreeAction`] by composing the primitives in
//! [`ops`](crate::ops). Each call is self-contained — the editor holds no
//! state between calls, so the caller owns the current snapshot and replaces
//! it with whatever `apply` returns.
//!
//! # Failure modes
//!
//! | Condition | Outcome |
//! |-----------|---------|
//! | Item/target key absent on an idempotent path | forest unchanged, silent |
//! | Action references an item missing from the forest | unchanged + `warn!` |
//! | Drop instruction not implemented (`Blocked`) | unchanged + `warn!` |
//! | Modal-move index beyond the sibling count | clamped to append + `warn!` |
//! | Reparent target or ancestor level vanished | [`EditError::TargetVanished`] + `error!` |
//!
//! Nothing here panics or unwinds; the log events are observability
//! signals, the `Err` is the only hard failure.

use bough_core::{DropInstruction, ROOT_TARGET, TreeAction, TreeItem};

use crate::error::{EditError, EditResult};
use crate::ops;

/// Apply one edit action to the forest, producing the new forest.
///
/// The input is never mutated; on the no-op paths the result is a
/// structurally equal copy. See the module table for the failure modes.
///
/// `get_key` must be pure, deterministic, and injective over the forest for
/// the duration of the call. Duplicate keys and cyclic inputs are
/// precondition violations the editor does not detect.
pub fn apply<T, F>(forest: &[T], action: &TreeAction<T>, get_key: &F) -> EditResult<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    match action {
        TreeAction::Remove { item_id } => Ok(ops::remove(forest, item_id, get_key)),
        TreeAction::Instruction {
            item_id,
            target_id,
            instruction,
            item,
        } => apply_instruction(forest, item_id, target_id, instruction, item, get_key),
        TreeAction::ModalMove {
            item_id,
            target_id,
            index,
        } => {
            let Some(item) = ops::find(forest, item_id, get_key) else {
                tracing::warn!(
                    item_id = %item_id,
                    "modal move references an item missing from the forest, leaving it unchanged"
                );
                return Ok(forest.to_vec());
            };
            modal_move(forest, item, target_id, *index, get_key)
        }
        TreeAction::Toggle { item_id }
        | TreeAction::Expand { item_id }
        | TreeAction::Collapse { item_id } => {
            // View-level actions are structurally inert; still surface the
            // desync when the item is gone.
            if ops::find(forest, item_id, get_key).is_none() {
                tracing::warn!(
                    item_id = %item_id,
                    "expansion action references an item missing from the forest"
                );
            }
            Ok(forest.to_vec())
        }
    }
}

fn apply_instruction<T, F>(
    forest: &[T],
    item_id: &str,
    target_id: &str,
    instruction: &DropInstruction,
    item: &T,
    get_key: &F,
) -> EditResult<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    if let DropInstruction::Reparent { desired_level } = instruction {
        // The drag layer computed `desired_level` against the same forest
        // the path is resolved from; a missing path or level means the data
        // and the in-flight instruction disagree. Abort rather than guess.
        let Some(path) = ops::path_to_item(forest, target_id, get_key) else {
            tracing::error!(
                target_id = %target_id,
                "reparent target vanished from the forest, aborting edit"
            );
            return Err(EditError::TargetVanished {
                target_id: target_id.to_string(),
            });
        };
        let Some(desired_id) = path.get(*desired_level) else {
            tracing::error!(
                target_id = %target_id,
                desired_level = *desired_level,
                depth = path.len(),
                "reparent level outside the target's ancestor chain, aborting edit"
            );
            return Err(EditError::TargetVanished {
                target_id: target_id.to_string(),
            });
        };
        let removed = ops::remove(forest, item_id, get_key);
        return Ok(ops::insert_after(&removed, desired_id, item, get_key));
    }

    // Dropping an item relative to itself is a no-op for the sibling and
    // nesting kinds. Reparent lands after an ancestor of the target, never
    // the target itself, so it needs no guard.
    if item_id == target_id {
        return Ok(forest.to_vec());
    }

    match instruction {
        DropInstruction::ReorderAbove => {
            let removed = ops::remove(forest, item_id, get_key);
            Ok(ops::insert_before(&removed, target_id, item, get_key))
        }
        DropInstruction::ReorderBelow => {
            let removed = ops::remove(forest, item_id, get_key);
            Ok(ops::insert_after(&removed, target_id, item, get_key))
        }
        DropInstruction::MakeChild => {
            let removed = ops::remove(forest, item_id, get_key);
            Ok(ops::insert_child(&removed, target_id, item, get_key))
        }
        other => {
            tracing::warn!(
                instruction = ?other,
                "drop instruction not implemented, leaving the forest unchanged"
            );
            Ok(forest.to_vec())
        }
    }
}

fn modal_move<T, F>(
    forest: &[T],
    item: &T,
    target_id: &str,
    index: usize,
    get_key: &F,
) -> EditResult<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let removed = ops::remove(forest, get_key(item), get_key);
    let siblings = child_items(&removed, target_id, get_key).items();

    if siblings.is_empty() {
        if target_id == ROOT_TARGET {
            // Root siblings can only be empty when the removal emptied the
            // whole forest, so nothing is discarded here.
            return Ok(vec![item.clone()]);
        }
        return Ok(ops::insert_child(&removed, target_id, item, get_key));
    }

    let len = siblings.len();
    if index >= len {
        if index > len {
            tracing::warn!(
                index,
                len,
                "modal move index beyond the sibling count, appending"
            );
        }
        let relative = &siblings[len - 1];
        Ok(ops::insert_after(&removed, get_key(relative), item, get_key))
    } else {
        let relative = &siblings[index];
        Ok(ops::insert_before(&removed, get_key(relative), item, get_key))
    }
}

/// Result of resolving a sibling list for a target key.
///
/// "No node with that key" and "an existing node with no children" are
/// different answers; this enum keeps them apart instead of collapsing both
/// into an empty list.
#[derive(Debug)]
pub enum ChildLookup<'a, T> {
    /// Root-level items: the target was the [`ROOT_TARGET`] sentinel.
    Root(&'a [T]),
    /// Children of an existing target node; possibly empty.
    Node(&'a [T]),
    /// No node with the target key exists in the forest.
    TargetMissing,
}

// Manual impls: the derives would needlessly require `T: Copy`/`T: Clone`
// for what is only a pair of borrows.
impl<T> Clone for ChildLookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChildLookup<'_, T> {}

impl<'a, T> ChildLookup<'a, T> {
    /// The resolved sibling sequence, empty when the target is missing.
    ///
    /// Collapses [`TargetMissing`](ChildLookup::TargetMissing) into an
    /// empty list — the dispatcher's behavior. Callers that need to tell
    /// the cases apart match on the enum instead.
    #[must_use]
    pub fn items(&self) -> &'a [T] {
        match self {
            ChildLookup::Root(items) | ChildLookup::Node(items) => items,
            ChildLookup::TargetMissing => &[],
        }
    }

    /// True when no node with the target key exists.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, ChildLookup::TargetMissing)
    }
}

/// Resolve the ordered sibling list under `target_id`.
///
/// The [`ROOT_TARGET`] sentinel resolves to the forest's root level. A
/// missing target emits an error-level diagnostic and returns
/// [`ChildLookup::TargetMissing`].
pub fn child_items<'a, T, F>(forest: &'a [T], target_id: &str, get_key: &F) -> ChildLookup<'a, T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    if target_id == ROOT_TARGET {
        return ChildLookup::Root(forest);
    }
    match ops::find(forest, target_id, get_key) {
        Some(target) => ChildLookup::Node(target.children()),
        None => {
            tracing::error!(
                target_id = %target_id,
                "sibling lookup for a target missing from the forest"
            );
            ChildLookup::TargetMissing
        }
    }
}
