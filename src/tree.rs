//! The ordered tree itself.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(3);
//! tree.add(1);
//! tree.add(2);
//! assert!(tree.contains(&1));
//!
//! // Adding the same key again keeps both copies.
//! tree.add(1);
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
//!
//! // Removing hands back one copy.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.remove(&42), None);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::Cursor;
use crate::iter::{IntoIter, Iter};
use crate::node::{Arena, NodeId};

/// An ordered collection of keys kept in a plain (unbalanced) binary search tree.
///
/// Keys are ordered by the comparator `C`, which is [`Ord::cmp`] for trees made with
/// [`new`][Self::new]. Equal keys are all kept: a key equal to one already present is placed in
/// that node's right subtree, so iteration yields duplicates next to each other in insertion
/// order.
///
/// Nothing rebalances the tree. Adding keys in ascending (or descending) order builds a tree
/// that is a linked list and every operation costs `O(len)`.
#[derive(Clone)]
pub struct OrderedTree<K, C = fn(&K, &K) -> Ordering> {
    pub(crate) arena: Arena<K>,
    pub(crate) root: Option<NodeId>,
    len: usize,
    comparator: C,
}

/// What [`OrderedTree::delete`] took out of the tree.
pub(crate) struct Deleted<K> {
    /// The node that was unlinked and freed. In the two-child case this is the in-order
    /// successor of the node passed in, whose key was copied into that node.
    pub(crate) spliced: NodeId,
    /// The key that was logically removed, i.e. the key the deleted node held.
    pub(crate) key: K,
}

impl<K> OrderedTree<K>
where
    K: Ord,
{
    /// Generates a new, empty tree ordered by `K`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(<K as Ord>::cmp)
    }
}

impl<K> Default for OrderedTree<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> OrderedTree<K, C> {
    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.root.map(|root| &self.arena[self.arena.minimum(root)].key)
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.root.map(|root| &self.arena[self.arena.maximum(root)].key)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        log::trace!("clearing {} nodes", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// A cursor positioned before the smallest key. Unlike [`iter`][Self::iter], it can remove
    /// the key it most recently yielded.
    ///
    /// The cursor holds the tree mutably borrowed, so the tree can't be changed except through
    /// the cursor while it lives.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = (1..=5).collect();
    /// let mut cursor = tree.cursor();
    /// while cursor.has_more() {
    ///     if cursor.advance().unwrap() % 2 == 0 {
    ///         cursor.remove_current().unwrap();
    ///     }
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, K, C> {
        Cursor::new(self)
    }

    /// Keeps only the keys for which `f` returns `true`, visiting them in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// tree.retain(|k| k % 2 == 1);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        let mut cursor = self.cursor();
        while let Ok(key) = cursor.advance() {
            if !f(key) {
                // We just advanced so there is always a key to remove.
                let _removed = cursor.remove_current();
            }
        }
    }

    /// Unlinks `node` from the tree and returns its key.
    ///
    /// A node with at most one child is spliced out directly, its child (if any) taking its
    /// place. A node with two children instead takes over its in-order successor's key and the
    /// successor, which has no left child, is spliced out in its place.
    ///
    /// `node` must be a live node of this tree. Ids are crate-internal so that holds for every
    /// caller.
    pub(crate) fn delete(&mut self, node: NodeId) -> Deleted<K> {
        let spliced = match (self.arena[node].left, self.arena[node].right) {
            (Some(_), Some(right)) => self.arena.minimum(right),
            _ => node,
        };

        let (child, parent) = {
            let spliced_node = &self.arena[spliced];
            (spliced_node.left.or(spliced_node.right), spliced_node.parent)
        };
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(spliced) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }

        let removed = self.arena.free(spliced);
        let key = if spliced == node {
            removed.key
        } else {
            std::mem::replace(&mut self.arena[node].key, removed.key)
        };
        self.len -= 1;

        log::trace!(
            "spliced out node {} (deleting {}, two children: {}), len {}",
            spliced,
            node,
            spliced != node,
            self.len
        );
        Deleted { spliced, key }
    }
}

impl<K, C> OrderedTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Generates a new, empty tree ordered by `comparator`.
    ///
    /// The comparator must be a total order. If it isn't, the tree won't lose keys but lookups
    /// may miss them and iteration may not be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.add_all([1, 3, 2]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Builds a tree ordered by `comparator` by adding each key in iteration order. The keys are
    /// not sorted first, so their order decides the shape of the tree.
    pub fn from_iter_with_comparator<I>(keys: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::with_comparator(comparator);
        tree.add_all(keys);
        tree
    }

    /// Adds `key` to the tree. Keys equal to ones already present are kept alongside them.
    ///
    /// Always returns `true`: every key can be added.
    pub fn add(&mut self, key: K) -> bool {
        let mut parent = None;
        let mut goes_left = false;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            parent = Some(id);
            goes_left = (self.comparator)(&key, &node.key) == Ordering::Less;
            current = if goes_left { node.left } else { node.right };
        }

        let id = self.arena.alloc(key, parent);
        match parent {
            None => self.root = Some(id),
            Some(parent) if goes_left => self.arena[parent].left = Some(id),
            Some(parent) => self.arena[parent].right = Some(id),
        }
        self.len += 1;

        log::trace!("attached node {} under {:?}, len {}", id, parent, self.len);
        true
    }

    /// Adds every key of `keys`. Returns whether the tree changed.
    pub fn add_all<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .fold(false, |changed, key| self.add(key) || changed)
    }

    /// The node holding a key equal to `key`. With duplicates, this is the matching node
    /// closest to the root.
    pub(crate) fn find(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match (self.comparator)(&node.key, key) {
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// The stored key equal to `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// tree.add((1, 'a'));
    ///
    /// assert_eq!(tree.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(tree.get(&(2, 'a')), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|id| &self.arena[id].key)
    }

    /// Whether a key equal to `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes one key equal to `key` and returns it. If the tree has no such key, nothing
    /// happens.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let node = self.find(key)?;
        Some(self.delete(node).key)
    }

    /// Removes every key equal to any of `keys`, duplicates included. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = [2, 1, 2, 3, 2].into_iter().collect();
    ///
    /// assert!(tree.remove_all(&[2, 42]));
    /// assert!(!tree.remove_all(&[42]));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove_all<'k, I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        let mut changed = false;
        for key in keys {
            while self.remove(key).is_some() {
                changed = true;
            }
        }
        changed
    }
}

impl<K, C> fmt::Debug for OrderedTree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, C> Extend<K> for OrderedTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.add_all(keys);
    }
}

impl<K> FromIterator<K> for OrderedTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_iter_with_comparator(keys, <K as Ord>::cmp)
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> IntoIterator for OrderedTree<K, C> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.root, self.len)
    }
}
