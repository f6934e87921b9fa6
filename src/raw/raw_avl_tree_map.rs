use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The AVL tree backing `AvlTreeMap`.
///
/// Nodes live in an arena and refer to each other by [`Handle`]. Every
/// mutation first does the plain binary-search-tree relinking and then walks
/// back up the parent chain restoring `|balance| <= 1` with rotations.
#[derive(Clone)]
pub(crate) struct RawAvlTreeMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Balance delta seen by the parent when the subtree on this side grows.
    const fn grown(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Balance delta seen by the parent when the subtree on this side shrinks.
    const fn shrunk(self) -> i8 {
        -self.grown()
    }
}

impl<K, V> RawAvlTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node at once and forgets the root.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Height of the tree, following the cached balance factors down the
    /// taller side. An empty tree has height 0.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            height += 1;
            let node = self.nodes.get(handle);
            current = if node.balance() < 0 { node.left() } else { node.right() };
        }
        height
    }

    /// Handle of the node with the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Handle of the node with the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// In-order successor: the leftmost node of the right subtree, or else the
    /// nearest ancestor whose left subtree contains `handle`.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes.get(handle).right() {
            return Some(self.leftmost(right));
        }
        let mut current = handle;
        while let Some(parent) = self.nodes.get(current).parent() {
            if self.nodes.get(parent).left() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// In-order predecessor: the rightmost node of the left subtree, or else
    /// the nearest ancestor whose right subtree contains `handle`.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes.get(handle).left() {
            return Some(self.rightmost(left));
        }
        let mut current = handle;
        while let Some(parent) = self.nodes.get(current).parent() {
            if self.nodes.get(parent).right() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Returns the first key-value pair in the tree.
    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        self.first().map(|handle| self.nodes.get(handle).key_value())
    }

    /// Returns the last key-value pair in the tree.
    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        self.last().map(|handle| self.nodes.get(handle).key_value())
    }

    /// Empties the tree into a vector of its entries in key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }

        let entries = handles.into_iter().map(|handle| self.nodes.take(handle).into_key_value()).collect();
        self.clear();
        entries
    }

    /// Mutable access to every value at once, in key order.
    ///
    /// Each arena slot is borrowed exactly once, so the references are disjoint.
    pub(crate) fn entries_mut(&mut self) -> Vec<(&K, &mut V)> {
        let mut rank = alloc::vec![usize::MAX; self.nodes.slot_count()];
        let mut position = 0;
        let mut current = self.first();
        while let Some(handle) = current {
            rank[handle.to_index()] = position;
            position += 1;
            current = self.successor(handle);
        }

        let mut ordered: Vec<Option<(&K, &mut V)>> = (0..self.len).map(|_| None).collect();
        for (index, slot) in self.nodes.slots_mut().enumerate() {
            if let Some(node) = slot {
                ordered[rank[index]] = Some(node.key_value_mut());
            }
        }
        ordered.into_iter().flatten().collect()
    }

    /// Points whichever link referred to `old` (a child link of `parent`, or
    /// the root) at `new`, and reparents `new`. Returns the side `old` hung
    /// from, or `None` if `old` was the root.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) -> Option<Side> {
        if let Some(new) = new {
            self.nodes.get_mut(new).set_parent(parent);
        }
        let Some(parent) = parent else {
            self.root = new;
            return None;
        };
        let parent_node = self.nodes.get_mut(parent);
        if parent_node.left() == Some(old) {
            parent_node.set_left(new);
            Some(Side::Left)
        } else {
            assert_eq!(
                parent_node.right(),
                Some(old),
                "`RawAvlTreeMap::replace_child()` - `old` is not a child of `parent`!"
            );
            parent_node.set_right(new);
            Some(Side::Right)
        }
    }

    /// Rotates `node` down to the left; its right child takes its place.
    ///
    /// ```text
    ///     node              child
    ///    /    \            /     \
    ///   a    child  =>   node     c
    ///       /    \      /    \
    ///      b      c    a      b
    /// ```
    ///
    /// Balance factors are left for the caller to assign.
    fn rotate_left(&mut self, node: Handle) {
        let child = self.nodes.get(node).right().expect("`RawAvlTreeMap::rotate_left()` - `node` has no right child!");
        log::trace!("rotate_left at {node:?}");

        let parent = self.nodes.get(node).parent();
        self.replace_child(parent, node, Some(child));

        let inner = self.nodes.get(child).left();
        self.nodes.get_mut(node).set_right(inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(node));
        }

        self.nodes.get_mut(child).set_left(Some(node));
        self.nodes.get_mut(node).set_parent(Some(child));
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, node: Handle) {
        let child = self.nodes.get(node).left().expect("`RawAvlTreeMap::rotate_right()` - `node` has no left child!");
        log::trace!("rotate_right at {node:?}");

        let parent = self.nodes.get(node).parent();
        self.replace_child(parent, node, Some(child));

        let inner = self.nodes.get(child).right();
        self.nodes.get_mut(node).set_left(inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(node));
        }

        self.nodes.get_mut(child).set_right(Some(node));
        self.nodes.get_mut(node).set_parent(Some(child));
    }

    /// Assigns balances after a double rotation that lifted `pivot` above
    /// `left` and `right`. `pivot`'s inner subtrees were split between the two,
    /// so whichever side `pivot` leaned away from ends up one short.
    fn set_double_rotation_balances(&mut self, left: Handle, right: Handle, pivot: Handle) {
        let pivot_balance = self.nodes.get(pivot).balance();
        self.nodes.get_mut(left).set_balance(if pivot_balance > 0 { -1 } else { 0 });
        self.nodes.get_mut(right).set_balance(if pivot_balance < 0 { 1 } else { 0 });
        self.nodes.get_mut(pivot).set_balance(0);
    }

    /// Restores balance above a freshly attached leaf.
    ///
    /// `parent`'s balance has just moved away from zero because `child`'s
    /// side grew. Walk upward until a balance returns to zero, the root is
    /// passed, or one rotation absorbs the growth.
    fn insert_fix(&mut self, mut parent: Handle, mut child: Handle) {
        while let Some(grand) = self.nodes.get(parent).parent() {
            let parent_side = if self.nodes.get(grand).left() == Some(parent) { Side::Left } else { Side::Right };
            let balance = self.nodes.get(grand).balance() + parent_side.grown();

            match balance {
                0 => {
                    self.nodes.get_mut(grand).set_balance(0);
                    return;
                }
                -1 | 1 => {
                    self.nodes.get_mut(grand).set_balance(balance);
                    child = parent;
                    parent = grand;
                }
                _ => {
                    let child_side = if self.nodes.get(parent).left() == Some(child) { Side::Left } else { Side::Right };
                    match (parent_side, child_side) {
                        (Side::Left, Side::Left) => {
                            self.rotate_right(grand);
                            self.nodes.get_mut(parent).set_balance(0);
                            self.nodes.get_mut(grand).set_balance(0);
                        }
                        (Side::Right, Side::Right) => {
                            self.rotate_left(grand);
                            self.nodes.get_mut(parent).set_balance(0);
                            self.nodes.get_mut(grand).set_balance(0);
                        }
                        (Side::Left, Side::Right) => {
                            self.rotate_left(parent);
                            self.rotate_right(grand);
                            self.set_double_rotation_balances(parent, grand, child);
                        }
                        (Side::Right, Side::Left) => {
                            self.rotate_right(parent);
                            self.rotate_left(grand);
                            self.set_double_rotation_balances(grand, parent, child);
                        }
                    }
                    return;
                }
            }
        }
    }

    /// Restores balance after a subtree of `node` lost one level of height.
    ///
    /// `diff` is the balance delta `node` absorbs: `+1` when its left side
    /// shrank, `-1` when its right side did. Unlike insertion, a rotation here
    /// may itself shorten the subtree, so the walk can continue past it.
    fn remove_fix(&mut self, mut node: Handle, mut diff: i8) {
        loop {
            // Taken before rotating, since rotations move `node` under a new parent.
            let parent = self.nodes.get(node).parent();
            let next_diff = match parent {
                Some(parent) if self.nodes.get(parent).left() == Some(node) => Side::Left.shrunk(),
                Some(_) => Side::Right.shrunk(),
                None => 0,
            };

            let balance = self.nodes.get(node).balance() + diff;
            match balance {
                -2 => {
                    let child = self.nodes.get(node).left().expect("`RawAvlTreeMap::remove_fix()` - left-heavy node has no left child!");
                    match self.nodes.get(child).balance() {
                        -1 => {
                            self.rotate_right(node);
                            self.nodes.get_mut(node).set_balance(0);
                            self.nodes.get_mut(child).set_balance(0);
                        }
                        0 => {
                            self.rotate_right(node);
                            self.nodes.get_mut(node).set_balance(-1);
                            self.nodes.get_mut(child).set_balance(1);
                            log::trace!("remove_fix stopped by rotation at {node:?}");
                            return;
                        }
                        _ => {
                            let grand = self.nodes.get(child).right().expect("`RawAvlTreeMap::remove_fix()` - right-heavy child has no right child!");
                            self.rotate_left(child);
                            self.rotate_right(node);
                            self.set_double_rotation_balances(child, node, grand);
                        }
                    }
                }
                2 => {
                    let child = self.nodes.get(node).right().expect("`RawAvlTreeMap::remove_fix()` - right-heavy node has no right child!");
                    match self.nodes.get(child).balance() {
                        1 => {
                            self.rotate_left(node);
                            self.nodes.get_mut(node).set_balance(0);
                            self.nodes.get_mut(child).set_balance(0);
                        }
                        0 => {
                            self.rotate_left(node);
                            self.nodes.get_mut(node).set_balance(1);
                            self.nodes.get_mut(child).set_balance(-1);
                            log::trace!("remove_fix stopped by rotation at {node:?}");
                            return;
                        }
                        _ => {
                            let grand = self.nodes.get(child).left().expect("`RawAvlTreeMap::remove_fix()` - left-heavy child has no left child!");
                            self.rotate_right(child);
                            self.rotate_left(node);
                            self.set_double_rotation_balances(node, child, grand);
                        }
                    }
                }
                -1 | 1 => {
                    // The taller side still sets the height; nothing above changes.
                    self.nodes.get_mut(node).set_balance(balance);
                    return;
                }
                _ => {
                    self.nodes.get_mut(node).set_balance(0);
                }
            }

            match parent {
                Some(parent) => {
                    node = parent;
                    diff = next_diff;
                }
                None => return,
            }
        }
    }

    /// Removes the node at `target`, returning its entry.
    ///
    /// A node with two children first trades its payload with its in-order
    /// predecessor, so the slot actually unlinked always has at most one child.
    pub(crate) fn remove_handle(&mut self, target: Handle) -> (K, V) {
        let unlinked = if self.nodes.get(target).has_two_children() {
            let predecessor = self
                .predecessor(target)
                .expect("`RawAvlTreeMap::remove_handle()` - node with a left child has no predecessor!");
            let (target_node, predecessor_node) = self.nodes.pair_mut(target, predecessor);
            target_node.swap_payload(predecessor_node);
            predecessor
        } else {
            target
        };

        let node = self.nodes.get(unlinked);
        let parent = node.parent();
        let child = node.sole_child();
        let side = self.replace_child(parent, unlinked, child);
        let removed = self.nodes.take(unlinked);
        self.len -= 1;

        match (parent, side) {
            (Some(parent), Some(side)) => self.remove_fix(parent, side.shrunk()),
            _ if self.root.is_none() => self.clear(),
            _ => {}
        }

        removed.into_key_value()
    }

    /// Removes and returns the entry with the smallest key.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first()?;
        Some(self.remove_handle(first))
    }

    /// Removes and returns the entry with the largest key.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last()?;
        Some(self.remove_handle(last))
    }
}

impl<K: Ord, V> RawAvlTreeMap<K, V> {
    /// Unbalanced binary search for `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match node.compare(key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).key_value())
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_handle(key, value).1
    }

    /// Inserts a key-value pair, returning the handle of the node now holding
    /// `key` together with the value it replaced, if any.
    ///
    /// An existing key keeps its node and only has its value overwritten.
    pub(crate) fn insert_handle(&mut self, key: K, value: V) -> (Handle, Option<V>) {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, value, None));
            self.root = Some(handle);
            self.len = 1;
            return (handle, None);
        };

        loop {
            let node = self.nodes.get_mut(current);
            let (side, next) = match node.compare(&key) {
                Ordering::Equal => return (current, Some(node.set_value(value))),
                Ordering::Less => (Side::Left, node.left()),
                Ordering::Greater => (Side::Right, node.right()),
            };
            match next {
                Some(next) => current = next,
                None => return (self.attach_leaf(current, side, key, value), None),
            }
        }
    }

    /// Hangs a new leaf off `parent` and rebalances above it.
    fn attach_leaf(&mut self, parent: Handle, side: Side, key: K, value: V) -> Handle {
        let leaf = self.nodes.alloc(Node::new(key, value, Some(parent)));
        self.len += 1;

        let parent_node = self.nodes.get_mut(parent);
        match side {
            Side::Left => parent_node.set_left(Some(leaf)),
            Side::Right => parent_node.set_right(Some(leaf)),
        }
        let balance = parent_node.balance() + side.grown();
        parent_node.set_balance(balance);

        // A parent back at zero just filled its shorter side; its height is unchanged.
        if balance != 0 {
            self.insert_fix(parent, leaf);
        }
        leaf
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.remove_handle(handle))
    }

    /// Removes a key from the tree, returning its value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }
}
