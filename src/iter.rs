//! Iterators over the keys of an [`OrderedTree`][crate::OrderedTree], in ascending order.

use std::iter::FusedIterator;

use crate::node::{Arena, NodeId};

/// A borrowing iterator over the keys of an [`OrderedTree`][crate::OrderedTree]. Made by
/// [`OrderedTree::iter`][crate::OrderedTree::iter].
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: Option<NodeId>, len: usize) -> Self {
        Self {
            arena,
            next: root.map(|root| arena.minimum(root)),
            remaining: len,
        }
    }
}

/// Manual implementation of `Clone` so `K` doesn't have to be `Clone`.
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.arena.successor(id);
        self.remaining -= 1;
        Some(&self.arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator over the keys of an [`OrderedTree`][crate::OrderedTree]. Made by its
/// `into_iter`.
pub struct IntoIter<K> {
    arena: Arena<K>,
    /// The smallest node still in the arena. It never has a left child.
    next: Option<NodeId>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(arena: Arena<K>, root: Option<NodeId>, len: usize) -> Self {
        let next = root.map(|root| arena.minimum(root));
        Self {
            arena,
            next,
            remaining: len,
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.free(id);

        // `id` was the minimum so it is its parent's left child, and its right subtree
        // takes its place.
        if let Some(right) = node.right {
            self.arena[right].parent = node.parent;
        }
        if let Some(parent) = node.parent {
            self.arena[parent].left = node.right;
        }
        self.next = match node.right {
            Some(right) => Some(self.arena.minimum(right)),
            None => node.parent,
        };

        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
