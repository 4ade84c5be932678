//! A sideways drawing of the tree's shape, for debugging.
//!
//! The root is at the left edge, right subtrees are drawn above their parent and left subtrees
//! below, so reading the keys top to bottom gives them in descending order.
//!
//! ```text
//!        +-- 3
//! -- 2 --|
//!        +-- 1
//! ```

use std::fmt;

use crate::node::{Arena, NodeId};
use crate::tree::OrderedTree;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<K, C> fmt::Display for OrderedTree<K, C>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.iter().map(key_width).max().unwrap_or(0);
        let mut path = Vec::new();
        render(&self.arena, self.root, &mut path, width, f)
    }
}

fn key_width<K: fmt::Display>(key: &K) -> usize {
    key.to_string().chars().count()
}

// TODO stack based render
fn render<K>(
    arena: &Arena<K>,
    id: Option<NodeId>,
    path: &mut Vec<Side>,
    width: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    K: fmt::Display,
{
    let Some(id) = id else {
        return Ok(());
    };
    let node = &arena[id];

    path.push(Side::Right);
    render(arena, node.right, path, width, f)?;
    path.pop();

    for (depth, side) in path.iter().enumerate() {
        // The last step gets the branch mark. Otherwise a vertical bar is drawn wherever the
        // path changes direction, joining a parent to a subtree on its far side.
        let mark = match path.get(depth + 1) {
            None => '+',
            Some(next) if next != side => '|',
            Some(_) => ' ',
        };
        write!(f, "{:indent$}{}", "", mark, indent = width + 6)?;
    }

    let key = node.key.to_string();
    write!(f, "-- {}", key)?;
    if node.left.is_some() || node.right.is_some() {
        let padding = width.saturating_sub(key.chars().count());
        write!(f, " --{:-<padding$}|", "", padding = padding)?;
    }
    writeln!(f)?;

    path.push(Side::Left);
    render(arena, node.left, path, width, f)?;
    path.pop();
    Ok(())
}
