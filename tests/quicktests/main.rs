use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};

mod avl;
mod set;
mod tree;

/// An enum for the various kinds of "things" to do to
/// trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value
    Insert(T),
    /// Remove one copy of the value
    Remove(T),
    /// Compare sorted iteration against the model
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]) {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Remove(T::arbitrary(g)),
            _ => Op::Iter,
        }
    }
}

/// Lets `RUST_LOG=avl_bst=trace` show what the trees are doing.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counts of each value still expected to be in a tree.
pub type Model<T> = BTreeMap<T, usize>;

/// Records one insertion of `value`.
pub fn model_insert<T: Ord>(model: &mut Model<T>, value: T) {
    *model.entry(value).or_default() += 1;
}

/// Takes one copy of `value` out of the model, returning whether there was one.
pub fn model_remove<T: Ord>(model: &mut Model<T>, value: &T) -> bool {
    match model.get_mut(value) {
        Some(count) if *count > 1 => {
            *count -= 1;
            true
        }
        Some(_) => model.remove(value).is_some(),
        None => false,
    }
}

/// Every value in the model, in sorted order with duplicates repeated.
pub fn model_sorted<T: Clone>(model: &Model<T>) -> Vec<T> {
    model
        .iter()
        .flat_map(|(value, count)| std::iter::repeat(value.clone()).take(*count))
        .collect()
}
