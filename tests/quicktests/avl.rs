use avl_bst::{AvlTree, Node};
use quickcheck_macros::quickcheck;

use crate::{init_logging, model_insert, model_remove, model_sorted, Model, Op};

/// The height of the subtree at `node`, or `None` if a cached height is wrong or any node leans
/// by more than one.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<i32> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    let height = left.max(right) + 1;
    ((left - right).abs() <= 1 && node.height() == height).then_some(height)
}

/// Whether every cached height matches the node's children.
fn heights_consistent<T>(node: Option<&Node<T>>) -> bool {
    fn height<T>(node: Option<&Node<T>>) -> Option<i32> {
        let Some(node) = node else {
            return Some(-1);
        };
        let expected = height(node.left())?.max(height(node.right())?) + 1;
        (node.height() == expected).then_some(expected)
    }
    height(node).is_some()
}

#[quickcheck]
fn balanced_after_every_insert(xs: Vec<i32>) -> bool {
    init_logging();
    let mut tree = AvlTree::new();
    xs.into_iter().all(|x| {
        tree.insert(x);
        balanced_height(tree.root()).is_some()
    })
}

#[quickcheck]
fn height_is_logarithmic(len: u16) -> bool {
    let len = u32::from(len % 4096);
    let tree: AvlTree<_> = (0..len).collect();

    // An AVL tree of n nodes is less than 1.45 * lg(n + 2) tall.
    let bound = 1.45 * f64::from(len + 2).log2();
    f64::from(tree.height()) < bound
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = AvlTree::new();
    let mut model = Model::new();

    for op in &ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value);
                model_insert(&mut model, *value);
            }
            Op::Remove(value) => {
                assert_eq!(tree.remove(value), model_remove(&mut model, value));
            }
            Op::Iter => {
                let values: Vec<_> = tree.inorder().copied().collect();
                assert_eq!(values, model_sorted(&model));
            }
        }
        if !heights_consistent(tree.root()) {
            return false;
        }
    }

    tree.len() == model.values().sum::<usize>()
}

#[quickcheck]
fn same_values_as_a_plain_tree(xs: Vec<i16>) -> bool {
    let avl: AvlTree<_> = xs.iter().copied().collect();
    let plain: avl_bst::BinarySearchTree<_> = xs.into_iter().collect();

    avl.len() == plain.len() && avl.inorder().eq(plain.inorder())
}
