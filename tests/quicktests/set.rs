use std::collections::BTreeSet;

use avl_bst::OrderedSet;
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn behaves_like_a_btree_set(ops: Vec<Op<i8>>) -> bool {
    let mut set = OrderedSet::new();
    let mut model = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(value) => assert_eq!(set.insert(value), model.insert(value)),
            Op::Remove(value) => assert_eq!(set.remove(&value), model.remove(&value)),
            Op::Iter => assert!(set.iter().eq(model.iter())),
        }
    }

    set.len() == model.len() && model.iter().all(|value| set.contains(value))
}

#[quickcheck]
fn to_array_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    let set: OrderedSet<_> = xs.iter().copied().collect();
    let Ok(array) = set.to_array() else {
        return xs.is_empty();
    };

    array.windows(2).all(|pair| pair[0] < pair[1])
}
