use std::collections::HashSet;

use avl_bst::{BinarySearchTree, Node};
use quickcheck_macros::quickcheck;

use crate::{init_logging, model_insert, model_remove, model_sorted, Model, Op};

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and removes both hold the same values.
fn do_ops(ops: &[Op<i8>], tree: &mut BinarySearchTree<i8>, model: &mut Model<i8>) {
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value);
                model_insert(model, *value);
            }
            Op::Remove(value) => {
                assert_eq!(tree.remove(value), model_remove(model, value));
            }
            Op::Iter => {
                let values: Vec<_> = tree.inorder().copied().collect();
                assert_eq!(values, model_sorted(model));
            }
        }
    }
}

fn count_nodes(node: Option<&Node<i8>>) -> usize {
    node.map_or(0, |n| 1 + count_nodes(n.left()) + count_nodes(n.right()))
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = BinarySearchTree::new();
    let mut model = Model::new();

    do_ops(&ops, &mut tree, &mut model);

    tree.len() == model.values().sum::<usize>() && tree.len() == count_nodes(tree.root())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.contains(x) && tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn to_array_round_trip(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let Ok(array) = tree.to_array() else {
        return tree.is_empty();
    };

    let rebuilt: BinarySearchTree<_> = array.iter().copied().collect();
    rebuilt.inorder().eq(tree.inorder())
}

#[quickcheck]
fn min_and_max_bound_every_value(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    match (tree.find_min(), tree.find_max()) {
        (Some(min), Some(max)) => xs.iter().all(|x| min <= x && x <= max),
        (None, None) => xs.is_empty(),
        _ => false,
    }
}

#[quickcheck]
fn parent_holds_the_value_as_a_child(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let Some(root) = tree.root() else {
        return true;
    };

    xs.iter().filter(|x| *x != root.value()).all(|x| {
        let Ok(Some(parent)) = tree.find_parent(x) else {
            return false;
        };
        [parent.left(), parent.right()]
            .into_iter()
            .flatten()
            .any(|child| child.value() == x)
    })
}
