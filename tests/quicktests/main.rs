use quickcheck::{Arbitrary, Gen};

mod cursor;
mod tree;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add the K to the data structure
    Add(K),
    /// Remove one copy of the K from the data structure
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Installs a logger so `RUST_LOG=ordtree=trace` shows the tree's structural changes.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
