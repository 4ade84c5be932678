//! In-order traversal that can remove as it goes.
//!
//! A [`Cursor`] starts before the smallest key. Each [`advance`][Cursor::advance] yields the
//! next key, and [`remove_current`][Cursor::remove_current] may then remove that key once. The
//! cursor borrows its tree mutably, so nothing else can change the tree while it is alive.

use crate::error::CursorError;
use crate::node::NodeId;
use crate::tree::OrderedTree;

/// A position in an [`OrderedTree`] supporting advance and remove-current. Made by
/// [`OrderedTree::cursor`].
pub struct Cursor<'a, K, C> {
    tree: &'a mut OrderedTree<K, C>,
    /// The node the last `advance` yielded from.
    current: Option<NodeId>,
    /// The node the next `advance` will yield from.
    next: Option<NodeId>,
    /// Whether `current` hasn't been removed yet.
    removable: bool,
}

impl<'a, K, C> Cursor<'a, K, C> {
    pub(crate) fn new(tree: &'a mut OrderedTree<K, C>) -> Self {
        let next = tree.root.map(|root| tree.arena.minimum(root));
        Self {
            tree,
            current: None,
            next,
            removable: false,
        }
    }

    /// Whether [`advance`][Self::advance] would yield another key.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// The key the next [`advance`][Self::advance] would yield, without moving.
    pub fn peek(&self) -> Option<&K> {
        self.next.map(|next| &self.tree.arena[next].key)
    }

    /// Moves to the next key in ascending order and returns it.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoMoreElements`] if every key has already been yielded.
    pub fn advance(&mut self) -> Result<&K, CursorError> {
        let current = self.next.ok_or(CursorError::NoMoreElements)?;
        // The successor has to be found now since removing `current` can unlink the nodes the
        // walk would pass through.
        self.next = self.tree.arena.successor(current);
        self.current = Some(current);
        self.removable = true;
        Ok(&self.tree.arena[current].key)
    }

    /// Removes the key most recently yielded by [`advance`][Self::advance] and returns it. The
    /// cursor's position is unaffected: the next `advance` yields the key that followed it.
    ///
    /// # Errors
    ///
    /// [`CursorError::NothingToRemove`] before the first `advance`, or if the current key was
    /// already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{CursorError, OrderedTree};
    ///
    /// let mut tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.cursor();
    ///
    /// assert_eq!(cursor.remove_current(), Err(CursorError::NothingToRemove));
    /// assert_eq!(cursor.advance(), Ok(&1));
    /// assert_eq!(cursor.remove_current(), Ok(1));
    /// assert_eq!(cursor.remove_current(), Err(CursorError::NothingToRemove));
    /// assert_eq!(cursor.advance(), Ok(&2));
    /// ```
    pub fn remove_current(&mut self) -> Result<K, CursorError> {
        let current = match self.current {
            Some(current) if self.removable => current,
            _ => return Err(CursorError::NothingToRemove),
        };
        self.removable = false;

        let deleted = self.tree.delete(current);
        // With two children, `current` takes over its successor's key and the successor's node
        // is the one freed. That successor is exactly `next`, which now lives in `current`.
        if self.next == Some(deleted.spliced) {
            log::trace!("next {} moved into {}", deleted.spliced, current);
            self.next = Some(current);
        }
        Ok(deleted.key)
    }
}
