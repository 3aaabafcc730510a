use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The unbalanced binary search tree backing `Dictionary`.
pub(crate) struct RawDictionary<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

impl<K, V> RawDictionary<K, V> {
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

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Releases every node and returns to the empty state.
    pub(crate) fn clear(&mut self) {
        tracing::trace!(released = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Iterative descent from the root. Returns the node holding `key`, if any.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn min_from(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn max_from(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right {
            handle = right;
        }
        handle
    }

    /// Node with the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.min_from(root))
    }

    /// Node with the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.max_from(root))
    }

    /// In-order successor of `handle`, or `None` if it holds the largest key.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.node(handle).right {
            return Some(self.min_from(right));
        }
        // Climb until we arrive at an ancestor from its left side.
        let mut child = handle;
        let mut parent = self.node(handle).parent;
        while let Some(p) = parent {
            if self.node(p).right != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// In-order predecessor of `handle`, or `None` if it holds the smallest key.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.node(handle).left {
            return Some(self.max_from(left));
        }
        let mut child = handle;
        let mut parent = self.node(handle).parent;
        while let Some(p) = parent {
            if self.node(p).left != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// Puts the subtree `v` where the subtree `u` hangs, updating `u`'s parent (or the
    /// root) and `v`'s parent link. `u`'s own links are left as they were.
    fn transplant(&mut self, u: Handle, v: Option<Handle>) {
        let parent = self.node(u).parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                let p = self.node_mut(p);
                if p.left == Some(u) {
                    p.left = v;
                } else {
                    p.right = v;
                }
            }
        }
        if let Some(v) = v {
            self.node_mut(v).parent = parent;
        }
    }

    /// Overwrites the value at `key` in place, or attaches a new leaf under the last node
    /// visited during descent. Returns the overwritten value.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let mut parent = None;
        let mut current = self.root;
        let mut went_left = false;
        while let Some(handle) = current {
            let node = self.node_mut(handle);
            match key.cmp(&node.key) {
                Ordering::Equal => {
                    tracing::trace!("overwriting value in place");
                    return Some(core::mem::replace(&mut node.value, value));
                }
                Ordering::Less => {
                    went_left = true;
                    current = node.left;
                }
                Ordering::Greater => {
                    went_left = false;
                    current = node.right;
                }
            }
            parent = Some(handle);
        }

        let handle = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(p) if went_left => self.node_mut(p).left = Some(handle),
            Some(p) => self.node_mut(p).right = Some(handle),
        }
        self.len += 1;
        debug_assert_eq!(self.len, self.nodes.len());
        tracing::trace!(len = self.len, "attached new node");
        None
    }

    /// Unlinks and releases the node at `z`, returning its pair.
    ///
    /// Nodes are relinked, never swapped, so every handle other than `z` keeps pointing at
    /// the same pair.
    pub(crate) fn remove_node(&mut self, z: Handle) -> (K, V) {
        let (left, right) = {
            let node = self.node(z);
            (node.left, node.right)
        };
        match (left, right) {
            (None, _) => self.transplant(z, right),
            (_, None) => self.transplant(z, left),
            (Some(left), Some(right)) => {
                // `y` is the successor of `z` and has no left child.
                let y = self.min_from(right);
                if self.node(y).parent != Some(z) {
                    let y_right = self.node(y).right;
                    self.transplant(y, y_right);
                    self.node_mut(y).right = Some(right);
                    self.node_mut(right).parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(left);
                self.node_mut(left).parent = Some(y);
            }
        }

        self.len -= 1;
        let pair = self.nodes.take(z).into_pair();
        debug_assert_eq!(self.len, self.nodes.len());
        tracing::trace!(len = self.len, "removed node");
        pair
    }

    /// Inserts every pair of `source` into `self` in ascending key order. The resulting
    /// shape is whatever that insertion order produces, not a mirror of `source`.
    pub(crate) fn insert_in_order_from(&mut self, source: &Self)
    where
        K: Clone + Ord,
        V: Clone,
    {
        let mut current = source.first();
        while let Some(handle) = current {
            let node = source.node(handle);
            self.insert(node.key.clone(), node.value.clone());
            current = source.successor(handle);
        }
    }

    /// Node handles in preorder, gathered with an explicit stack.
    pub(crate) fn pre_order(&self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            order.push(handle);
            let node = self.node(handle);
            // Right first so the left subtree is visited first.
            stack.extend(node.right);
            stack.extend(node.left);
        }
        order
    }
}
