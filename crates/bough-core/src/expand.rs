//! Expanded/collapsed view state, kept apart from the structural data.
//!
//! The structural editor treats [`TreeAction::Toggle`], `Expand`, and
//! `Collapse` as inert — which node is open is a presentation concern. This
//! type gives callers whose node type carries no open flag a place to put
//! that state: feed it the same actions the editor sees and render from
//! [`is_open`](ExpandState::is_open).

use std::collections::HashSet;

use crate::action::{DropInstruction, ROOT_TARGET, TreeAction};
use crate::item::TreeItem;

/// Set of item keys currently expanded.
///
/// Items absent from the set are collapsed; a forest rendered against a
/// fresh `ExpandState` starts fully collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandState {
    open: HashSet<String>,
}

impl ExpandState {
    /// Empty state: everything collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the item with this key is expanded.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Mark the item expanded.
    pub fn expand(&mut self, id: &str) {
        self.open.insert(id.to_string());
    }

    /// Mark the item collapsed.
    pub fn collapse(&mut self, id: &str) {
        self.open.remove(id);
    }

    /// Flip the item's expanded state.
    pub fn toggle(&mut self, id: &str) {
        if !self.open.remove(id) {
            self.open.insert(id.to_string());
        }
    }

    /// Keys currently expanded, in arbitrary order.
    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    /// Number of expanded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// True when nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Track the view-state consequences of one action.
    ///
    /// Interprets the three expansion actions, opens the target an item was
    /// just dropped into (`MakeChild`, and `ModalMove` into a real node) so
    /// the moved item is visible, and forgets removed keys. Structural
    /// variants are otherwise ignored — apply them to the forest with the
    /// editor.
    pub fn apply<T>(&mut self, action: &TreeAction<T>) {
        match action {
            TreeAction::Toggle { item_id } => self.toggle(item_id),
            TreeAction::Expand { item_id } => self.expand(item_id),
            TreeAction::Collapse { item_id } => self.collapse(item_id),
            TreeAction::Instruction {
                target_id,
                instruction: DropInstruction::MakeChild,
                ..
            } => self.expand(target_id),
            TreeAction::ModalMove { target_id, .. } if target_id != ROOT_TARGET => {
                self.expand(target_id);
            }
            TreeAction::Remove { item_id } => self.collapse(item_id),
            _ => {}
        }
    }

    /// Drop keys that no longer name an item in `forest`.
    ///
    /// Call after edits that may have deleted subtrees, so stale keys do not
    /// accumulate across long sessions.
    pub fn retain_in_forest<T, F>(&mut self, forest: &[T], get_key: &F)
    where
        T: TreeItem,
        F: Fn(&T) -> &str,
    {
        let mut present = HashSet::new();
        collect_keys(forest, get_key, &mut present);
        self.open.retain(|id| present.contains(id));
    }
}

fn collect_keys<T, F>(forest: &[T], get_key: &F, out: &mut HashSet<String>)
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    for item in forest {
        out.insert(get_key(item).to_string());
        collect_keys(item.children(), get_key, out);
    }
}
