//! Nodes and the slot table that owns them.
//!
//! Every link between nodes (`left`, `right` and the `parent` back-reference) is a [`NodeId`]
//! indexing into an [`Arena`]. The arena is the only owner of the nodes, so the parent/child
//! cycle never has to be expressed with pointers.

use std::fmt;
use std::ops::{Index, IndexMut};

/// The index of a slot in an [`Arena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single key with its links. The left subtree holds keys ordered before `key` and the right
/// subtree holds keys ordered after or equal to it.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<K> {
    Occupied(Node<K>),
    /// A freed slot. Vacant slots form a singly linked free list.
    Vacant { next_free: Option<NodeId> },
}

/// Contiguous storage for the nodes of one tree. Freed slots are reused by later allocations so
/// the table never grows past the largest size the tree has had.
#[derive(Clone, Debug)]
pub(crate) struct Arena<K> {
    slots: Vec<Slot<K>>,
    free: Option<NodeId>,
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Arena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Stores a new childless node and returns its id.
    pub(crate) fn alloc(&mut self, key: K, parent: Option<NodeId>) -> NodeId {
        let node = Slot::Occupied(Node::new(key, parent));
        match self.free {
            Some(id) => {
                let next_free = match self.slots[id.0] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => panic!("Free list points at occupied slot {}", id),
                };
                self.slots[id.0] = node;
                self.free = next_free;
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list. The caller must already
    /// have unlinked it from the tree.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => panic!("Freeing vacant slot {}", id),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Follows `left` links from `id` until there are none. This is the node holding the
    /// smallest key of the subtree rooted at `id`.
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Follows `right` links from `id` until there are none.
    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    /// The node holding the next key in order after `id`'s, or `None` if `id` holds the largest
    /// key of the whole tree.
    ///
    /// With a right subtree that is its minimum. Otherwise it is the first ancestor that we reach
    /// by stepping up from a left child.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self[id].right {
            return Some(self.minimum(right));
        }

        let mut child = id;
        let mut parent = self[id].parent;
        while let Some(p) = parent {
            if self[p].right != Some(child) {
                break;
            }
            child = p;
            parent = self[p].parent;
        }
        parent
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("Link to vacant slot {}", id),
        }
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("Link to vacant slot {}", id),
        }
    }
}
