use ordtree::{CursorError, OrderedTree};
use quickcheck_macros::quickcheck;

use crate::init_logging;

#[quickcheck]
fn cursor_yields_every_key_once(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    let mut seen = Vec::new();
    let mut cursor = tree.cursor();
    while let Ok(key) = cursor.advance() {
        seen.push(*key);
    }

    seen == sorted && cursor.advance() == Err(CursorError::NoMoreElements)
}

/// Removes the keys picked by `remove` while walking, and checks the walk still sees every key
/// and the tree ends up holding exactly the rest.
#[quickcheck]
fn removing_while_walking(xs: Vec<i8>, remove: Vec<bool>) -> bool {
    init_logging();
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    let mut seen = Vec::new();
    let mut kept = Vec::new();
    let mut cursor = tree.cursor();
    let mut i = 0;
    while let Ok(&key) = cursor.advance() {
        seen.push(key);
        if remove.get(i).copied().unwrap_or(false) {
            if cursor.remove_current() != Ok(key) {
                return false;
            }
            if cursor.remove_current() != Err(CursorError::NothingToRemove) {
                return false;
            }
        } else {
            kept.push(key);
        }
        i += 1;
    }

    seen == sorted && tree.iter().copied().eq(kept.iter().copied()) && tree.len() == kept.len()
}

#[quickcheck]
fn peek_agrees_with_advance(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.into_iter().collect();
    let mut cursor = tree.cursor();

    loop {
        let peeked = cursor.peek().copied();
        let has_more = cursor.has_more();
        match cursor.advance() {
            Ok(key) if has_more && peeked == Some(*key) => {}
            Err(CursorError::NoMoreElements) if !has_more && peeked.is_none() => return true,
            _ => return false,
        }
    }
}
