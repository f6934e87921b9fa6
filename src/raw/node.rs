use core::borrow::Borrow;
use core::cmp::Ordering;

use super::handle::Handle;

/// A binary search tree node carrying its AVL balance factor.
///
/// `left` and `right` are the owning edges of the tree; `parent` is only a
/// back-reference for walking upward and is never followed to free anything.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    // height(right) - height(left); one of -1, 0, 1 whenever the tree is at rest.
    balance: i8,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf with balance 0.
    pub(crate) fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            balance: 0,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the previous one.
    pub(crate) fn set_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn key_value(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    pub(crate) fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Exchanges key and value with `other`. Links and balances stay put.
    pub(crate) fn swap_payload(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.key, &mut other.key);
        core::mem::swap(&mut self.value, &mut other.value);
    }

    #[inline]
    pub(crate) fn balance(&self) -> i8 {
        self.balance
    }

    #[inline]
    pub(crate) fn set_balance(&mut self, balance: i8) {
        self.balance = balance;
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Returns the only child of a node with at most one child.
    pub(crate) fn sole_child(&self) -> Option<Handle> {
        debug_assert!(
            self.left.is_none() || self.right.is_none(),
            "`Node::sole_child()` - node has two children!"
        );
        self.left.or(self.right)
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Compares a probe key against this node's key.
    #[inline]
    pub(crate) fn compare<Q>(&self, key: &Q) -> Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        key.cmp(self.key.borrow())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_a_balanced_leaf() {
        let parent = Handle::from_index(3);
        let node = Node::new(7, "seven", Some(parent));
        assert_eq!(node.balance(), 0);
        assert_eq!(node.parent(), Some(parent));
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node.key_value(), (&7, &"seven"));
    }

    #[test]
    fn swap_payload_keeps_links() {
        let mut a = Node::new(1, 'a', None);
        let mut b = Node::new(2, 'b', Some(Handle::from_index(0)));
        a.set_balance(-1);
        a.set_left(Some(Handle::from_index(5)));
        a.swap_payload(&mut b);
        assert_eq!(a.key_value(), (&2, &'b'));
        assert_eq!(b.key_value(), (&1, &'a'));
        assert_eq!(a.balance(), -1);
        assert_eq!(a.left(), Some(Handle::from_index(5)));
        assert_eq!(b.parent(), Some(Handle::from_index(0)));
    }

    #[test]
    fn compare_orders_probe_against_node() {
        let node: Node<alloc::string::String, ()> = Node::new("m".into(), (), None);
        assert_eq!(node.compare("a"), Ordering::Less);
        assert_eq!(node.compare("m"), Ordering::Equal);
        assert_eq!(node.compare("z"), Ordering::Greater);
    }

    #[test]
    fn set_value_returns_previous() {
        let mut node = Node::new(1, 10, None);
        assert_eq!(node.set_value(20), 10);
        *node.value_mut() += 1;
        assert_eq!(*node.value(), 21);
        assert_eq!(node.sole_child(), None);
        assert!(!node.has_two_children());
    }
}
