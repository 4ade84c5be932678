//! This crate exposes an ordered collection backed by a plain Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores its keys in `Node`s. Each `Node` holds one key and may have a
//! left and a right child. The invariants kept here are:
//!
//! 1. For every `Node`, all the keys in its left subtree compare less than its own key.
//! 2. For every `Node`, all the keys in its right subtree compare greater than or equal to its
//!    own key. Equal keys are allowed, so the tree is a multiset.
//!
//! Searching, adding and removing take `O(height)` where `height` is the longest path from the
//! root to a leaf. The tree does not rebalance itself so `height` depends on the order keys were
//! added in. Random order gives `O(lg N)` on average but sorted order gives a tree that is
//! a linked list with `height == N`.
//!
//! ## Layout
//!
//! Nodes live in a slot table owned by the [`OrderedTree`] and refer to each other (including
//! the parent back-reference) by index. Walking in order only needs the `parent` links, so
//! neither [`Iter`] nor [`Cursor`] keep a stack.
//!
//! A [`Cursor`] can remove the key it just yielded and keep going. It borrows the tree mutably,
//! so the compiler rejects any other change to the tree while it is in use.
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.len(), 7);
//!
//! // 5 has two children. Its node takes over 7's key and 7's node is unlinked.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod error;
mod iter;
mod node;
mod render;
mod tree;


pub use cursor::Cursor;
pub use error::CursorError;
pub use iter::{IntoIter, Iter};
pub use tree::OrderedTree;
