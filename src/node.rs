//! The unit of storage shared by every tree in this crate.

use std::fmt;

/// An owning edge to a subtree. `None` is the empty subtree at the bottom of a branch.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Height reported for an empty subtree. A node with no children has height 0.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// A `Node` holds one value and exclusively owns its (up to two) children.
///
/// Every value in the left subtree compares less than or equal to this node's value and every
/// value in the right subtree compares greater than or equal to it. Equal values only end up on
/// the left in an [`AvlTree`](crate::AvlTree), after a rotation. Handles to nodes are handed out by
/// [`Tree::find`](crate::Tree::find), [`Tree::find_parent`](crate::Tree::find_parent) and
/// [`Tree::root`](crate::Tree::root) so callers can inspect the shape of a tree.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges lie on the longest path from this node down to a leaf.
    pub(crate) height: i32,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node. Leaves have a height of 0.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Height of the left subtree minus height of the right subtree. Positive values mean the
    /// node leans left.
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// The height of the subtree behind `link`, or [`EMPTY_HEIGHT`] when there is none.
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(EMPTY_HEIGHT, |n| n.height)
}

/// Deep copies the subtree behind `link` without recursing.
///
/// Nodes are rebuilt in postorder: by the time a node is copied, the copies of its children
/// are on top of `built`, right above left.
pub(crate) fn clone_link<T>(link: &Link<T>) -> Link<T>
where
    T: Clone,
{
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    let mut reversed_postorder = Vec::new();
    while let Some(node) = pending.pop() {
        reversed_postorder.push(node);
        pending.extend(node.left());
        pending.extend(node.right());
    }

    let mut built: Vec<Box<Node<T>>> = Vec::with_capacity(reversed_postorder.len());
    for node in reversed_postorder.into_iter().rev() {
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(Node {
            value: node.value.clone(),
            left,
            right,
            height: node.height,
        }));
    }
    built.pop()
}

/// Releases every node behind `link` without recursing, so degenerate (list shaped) trees can
/// be dropped regardless of their height.
pub(crate) fn release<T>(link: &mut Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
