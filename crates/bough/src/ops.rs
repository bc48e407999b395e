//! Structural primitives over an ordered forest.
//!
//! Pure, recursive, immutable-copy operations: every function takes the
//! forest by slice and returns a fresh `Vec`, cloning nodes along the
//! rebuilt path and leaving the input untouched. Keys are resolved through
//! the caller-supplied `get_key` function on every call.
//!
//! Absent keys are silent no-ops for `remove` and the inserts — the result
//! is a structurally equal copy of the input. Callers are responsible for
//! key uniqueness across the whole forest; with a duplicate key the first
//! match in depth-first order wins and the rest is unspecified.

use bough_core::{TreeItem, has_children};

/// Remove the item with key `id`, wherever it sits, together with its
/// subtree.
///
/// At most one item is removed (keys are unique); its former siblings are
/// untouched. An absent `id` returns a structurally equal copy.
#[must_use]
pub fn remove<T, F>(forest: &[T], id: &str, get_key: &F) -> Vec<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let mut out = Vec::with_capacity(forest.len());
    for item in forest {
        if get_key(item) == id {
            continue;
        }
        if has_children(item) {
            out.push(item.with_children(remove(item.children(), id, get_key)));
        } else {
            out.push(item.clone());
        }
    }
    out
}

/// Splice `new_item` immediately before the item with key `target_id`, in
/// the target's own sibling sequence, at any depth.
///
/// An absent target returns a structurally equal copy.
#[must_use]
pub fn insert_before<T, F>(forest: &[T], target_id: &str, new_item: &T, get_key: &F) -> Vec<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let mut out = Vec::with_capacity(forest.len() + 1);
    for item in forest {
        if get_key(item) == target_id {
            out.push(new_item.clone());
            out.push(item.clone());
        } else if has_children(item) {
            out.push(item.with_children(insert_before(
                item.children(),
                target_id,
                new_item,
                get_key,
            )));
        } else {
            out.push(item.clone());
        }
    }
    out
}

/// Splice `new_item` immediately after the item with key `target_id`.
///
/// Symmetric to [`insert_before`].
#[must_use]
pub fn insert_after<T, F>(forest: &[T], target_id: &str, new_item: &T, get_key: &F) -> Vec<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let mut out = Vec::with_capacity(forest.len() + 1);
    for item in forest {
        if get_key(item) == target_id {
            out.push(item.clone());
            out.push(new_item.clone());
        } else if has_children(item) {
            out.push(item.with_children(insert_after(
                item.children(),
                target_id,
                new_item,
                get_key,
            )));
        } else {
            out.push(item.clone());
        }
    }
    out
}

/// Prepend `new_item` as the first child of the item with key `target_id`,
/// marking the target [`opened`](TreeItem::opened).
///
/// An absent target returns a structurally equal copy.
#[must_use]
pub fn insert_child<T, F>(forest: &[T], target_id: &str, new_item: &T, get_key: &F) -> Vec<T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let mut out = Vec::with_capacity(forest.len());
    for item in forest {
        if get_key(item) == target_id {
            let mut children = Vec::with_capacity(item.children().len() + 1);
            children.push(new_item.clone());
            children.extend_from_slice(item.children());
            out.push(item.with_children(children).opened());
        } else if has_children(item) {
            out.push(item.with_children(insert_child(
                item.children(),
                target_id,
                new_item,
                get_key,
            )));
        } else {
            out.push(item.clone());
        }
    }
    out
}

/// Depth-first search for the item with key `id`.
///
/// Siblings are visited left to right, children before the next sibling;
/// the first match wins.
#[must_use]
pub fn find<'a, T, F>(forest: &'a [T], id: &str, get_key: &F) -> Option<&'a T>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    for item in forest {
        if get_key(item) == id {
            return Some(item);
        }
        if has_children(item) {
            if let Some(found) = find(item.children(), id, get_key) {
                return Some(found);
            }
        }
    }
    None
}

/// Ordered ancestor keys leading to the item with key `target_id`,
/// root-first and exclusive of the target itself.
///
/// A root-level target yields an empty path; an absent target yields
/// `None`.
#[must_use]
pub fn path_to_item<T, F>(forest: &[T], target_id: &str, get_key: &F) -> Option<Vec<String>>
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    let mut path = Vec::new();
    if walk_path(forest, target_id, get_key, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn walk_path<T, F>(forest: &[T], target_id: &str, get_key: &F, path: &mut Vec<String>) -> bool
where
    T: TreeItem,
    F: Fn(&T) -> &str,
{
    for item in forest {
        if get_key(item) == target_id {
            return true;
        }
        path.push(get_key(item).to_string());
        if walk_path(item.children(), target_id, get_key, path) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
        open: bool,
        children: Vec<Item>,
    }

    impl Item {
        fn new(id: &str) -> Self {
            Self {
                id: id.to_string(),
                open: false,
                children: Vec::new(),
            }
        }

        fn child(mut self, item: Item) -> Self {
            self.children.push(item);
            self
        }
    }

    impl TreeItem for Item {
        fn children(&self) -> &[Self] {
            &self.children
        }

        fn with_children(&self, children: Vec<Self>) -> Self {
            Self {
                children,
                ..self.clone()
            }
        }

        fn opened(&self) -> Self {
            Self {
                open: true,
                ..self.clone()
            }
        }
    }

    fn key(item: &Item) -> &str {
        &item.id
    }

    /// Root-level ids, in order.
    fn ids(forest: &[Item]) -> Vec<&str> {
        forest.iter().map(|item| item.id.as_str()).collect()
    }

    fn count(forest: &[Item]) -> usize {
        forest
            .iter()
            .map(|item| 1 + count(&item.children))
            .sum()
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("a")
                .child(Item::new("a-1"))
                .child(Item::new("a-2").child(Item::new("a-2-x"))),
            Item::new("b"),
            Item::new("c").child(Item::new("c-1")),
        ]
    }

    // === remove ===

    #[test]
    fn remove_root_level_item() {
        let forest = sample();
        let result = remove(&forest, "b", &key);
        assert_eq!(ids(&result), ["a", "c"]);
        assert_eq!(count(&result), count(&forest) - 1);
    }

    #[test]
    fn remove_nested_item_keeps_siblings() {
        let forest = sample();
        let result = remove(&forest, "a-1", &key);
        assert_eq!(ids(&result[0].children), ["a-2"]);
        assert_eq!(ids(&result), ["a", "b", "c"]);
    }

    #[test]
    fn remove_takes_the_subtree_along() {
        let forest = sample();
        let result = remove(&forest, "a-2", &key);
        assert!(find(&result, "a-2-x", &key).is_none());
        assert_eq!(count(&result), count(&forest) - 2);
    }

    #[test]
    fn remove_absent_id_is_a_structural_noop() {
        let forest = sample();
        let result = remove(&forest, "nope", &key);
        assert_eq!(result, forest);
    }

    #[test]
    fn remove_does_not_mutate_the_input() {
        let forest = sample();
        let _ = remove(&forest, "a", &key);
        assert_eq!(ids(&forest), ["a", "b", "c"]);
    }

    // === insert_before / insert_after ===

    #[test]
    fn insert_before_root_level_target() {
        let forest = sample();
        let result = insert_before(&forest, "b", &Item::new("x"), &key);
        assert_eq!(ids(&result), ["a", "x", "b", "c"]);
    }

    #[test]
    fn insert_before_nested_target() {
        let forest = sample();
        let result = insert_before(&forest, "a-2", &Item::new("x"), &key);
        assert_eq!(ids(&result[0].children), ["a-1", "x", "a-2"]);
    }

    #[test]
    fn insert_before_absent_target_is_a_structural_noop() {
        let forest = sample();
        let result = insert_before(&forest, "nope", &Item::new("x"), &key);
        assert_eq!(result, forest);
    }

    #[test]
    fn insert_after_root_level_target() {
        let forest = sample();
        let result = insert_after(&forest, "a", &Item::new("x"), &key);
        assert_eq!(ids(&result), ["a", "x", "b", "c"]);
    }

    #[test]
    fn insert_after_last_sibling_appends() {
        let forest = sample();
        let result = insert_after(&forest, "c", &Item::new("x"), &key);
        assert_eq!(ids(&result), ["a", "b", "c", "x"]);
    }

    #[test]
    fn insert_after_nested_target() {
        let forest = sample();
        let result = insert_after(&forest, "c-1", &Item::new("x"), &key);
        assert_eq!(ids(&result[2].children), ["c-1", "x"]);
    }

    // === insert_child ===

    #[test]
    fn insert_child_prepends_and_opens_the_target() {
        let forest = sample();
        let result = insert_child(&forest, "a", &Item::new("x"), &key);
        assert_eq!(ids(&result[0].children), ["x", "a-1", "a-2"]);
        assert!(result[0].open);
    }

    #[test]
    fn insert_child_on_a_leaf_creates_the_sequence() {
        let forest = sample();
        let result = insert_child(&forest, "b", &Item::new("x"), &key);
        assert_eq!(ids(&result[1].children), ["x"]);
        assert!(result[1].open);
    }

    #[test]
    fn insert_child_on_a_nested_target() {
        let forest = sample();
        let result = insert_child(&forest, "a-2", &Item::new("x"), &key);
        assert_eq!(ids(&result[0].children[1].children), ["x", "a-2-x"]);
    }

    #[test]
    fn insert_child_absent_target_is_a_structural_noop() {
        let forest = sample();
        let result = insert_child(&forest, "nope", &Item::new("x"), &key);
        assert_eq!(result, forest);
    }

    // === find ===

    #[test]
    fn find_visits_children_before_the_next_sibling() {
        use std::cell::RefCell;

        let forest = vec![
            Item::new("1").child(Item::new("1-1")),
            Item::new("2"),
        ];
        let visits: RefCell<Vec<String>> = RefCell::new(Vec::new());
        fn hrtb<F: Fn(&Item) -> &str>(f: F) -> F {
            f
        }
        let logging_key = hrtb(|item| {
            visits.borrow_mut().push(item.id.clone());
            item.id.as_str()
        });

        let found = find(&forest, "1-1", &logging_key).unwrap();
        assert_eq!(found.id, "1-1");
        // "1-1" is reached by descending into "1"; "2" is never visited.
        assert_eq!(*visits.borrow(), ["1", "1-1"]);
    }

    #[test]
    fn find_returns_the_first_match_at_any_depth() {
        let forest = sample();
        assert_eq!(find(&forest, "a-2-x", &key).map(|i| i.id.as_str()), Some("a-2-x"));
        assert_eq!(find(&forest, "c", &key).map(|i| i.id.as_str()), Some("c"));
    }

    #[test]
    fn find_absent_id_is_none() {
        let forest = sample();
        assert!(find(&forest, "nope", &key).is_none());
    }

    // === path_to_item ===

    #[test]
    fn path_collects_ancestors_root_first() {
        let forest = vec![Item::new("a").child(Item::new("b").child(Item::new("c")))];
        assert_eq!(
            path_to_item(&forest, "c", &key),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn path_to_root_level_item_is_empty() {
        let forest = sample();
        assert_eq!(path_to_item(&forest, "b", &key), Some(Vec::new()));
    }

    #[test]
    fn path_to_absent_item_is_none() {
        let forest = sample();
        assert_eq!(path_to_item(&forest, "nope", &key), None);
    }

    #[test]
    fn path_does_not_leak_siblings_of_ancestors() {
        let forest = sample();
        assert_eq!(
            path_to_item(&forest, "a-2-x", &key),
            Some(vec!["a".to_string(), "a-2".to_string()])
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn shape() -> impl Strategy<Value = Item> {
            let leaf = Just(Item::new("n"));
            leaf.prop_recursive(3, 24, 4, |inner| {
                proptest::collection::vec(inner, 0..4).prop_map(|children| Item {
                    id: "n".to_string(),
                    open: false,
                    children,
                })
            })
        }

        fn relabel(forest: &mut [Item], next: &mut usize) {
            for item in forest {
                item.id = format!("n{next}");
                *next += 1;
                relabel(&mut item.children, next);
            }
        }

        /// Forests with guaranteed-unique keys `n0..nN` in depth-first order.
        fn forest() -> impl Strategy<Value = Vec<Item>> {
            proptest::collection::vec(shape(), 1..5).prop_map(|mut forest| {
                let mut next = 0;
                relabel(&mut forest, &mut next);
                forest
            })
        }

        proptest! {
            #[test]
            fn remove_absent_key_preserves_structure(forest in forest()) {
                let result = remove(&forest, "absent", &key);
                prop_assert_eq!(result, forest);
            }

            #[test]
            fn remove_then_find_misses(forest in forest(), pick in any::<prop::sample::Index>()) {
                let n = count(&forest);
                let id = format!("n{}", pick.index(n));
                let result = remove(&forest, &id, &key);
                prop_assert!(find(&result, &id, &key).is_none());
            }

            #[test]
            fn find_agrees_with_the_key_function(forest in forest(), pick in any::<prop::sample::Index>()) {
                let n = count(&forest);
                let id = format!("n{}", pick.index(n));
                let found = find(&forest, &id, &key);
                prop_assert_eq!(found.map(key), Some(id.as_str()));
            }

            /// Removing a nested item and re-inserting it under its former
            /// parent restores the node count.
            #[test]
            fn remove_then_reinsert_restores_the_count(
                forest in forest(),
                pick in any::<prop::sample::Index>(),
            ) {
                let n = count(&forest);
                let id = format!("n{}", pick.index(n));
                let path = path_to_item(&forest, &id, &key).unwrap();
                prop_assume!(!path.is_empty());
                let parent = path.last().unwrap().clone();
                let item = find(&forest, &id, &key).unwrap().clone();

                let removed = remove(&forest, &id, &key);
                let restored = insert_child(&removed, &parent, &item, &key);
                prop_assert_eq!(count(&restored), n);
                prop_assert!(find(&restored, &id, &key).is_some());
            }

            #[test]
            fn path_walks_down_to_the_target(forest in forest(), pick in any::<prop::sample::Index>()) {
                let n = count(&forest);
                let id = format!("n{}", pick.index(n));
                let path = path_to_item(&forest, &id, &key).unwrap();

                // Each prefix of the path names a node whose subtree holds the target.
                let mut level: &[Item] = &forest;
                for ancestor in &path {
                    let node = level
                        .iter()
                        .find(|item| key(item) == ancestor)
                        .expect("ancestor key resolves at its level");
                    level = node.children();
                }
                prop_assert!(level.iter().any(|item| key(item) == id));
            }
        }
    }
}
