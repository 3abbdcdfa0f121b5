//! Walks over a tree's nodes in the four classic orders.
//!
//! Each walk visits every node once and appends references to the visited values into a
//! `Vec`. The public accessors wrap that snapshot in a [`Traversal`] iterator. The snapshot
//! borrows the tree, so the tree can't be mutated while a traversal is alive.
//!
//! The walks keep their pending nodes on an explicit stack or queue instead of the call stack,
//! which keeps them safe on trees that have degenerated into long chains.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::vec;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree. The default enumeration order.
    #[default]
    Preorder,
    /// Left subtree, then node, then right subtree. Yields values in sorted order.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
}

/// Appends the values below `root` to `visited` in the given `order`.
pub(crate) fn walk<'a, T>(root: Option<&'a Node<T>>, order: Order, visited: &mut Vec<&'a T>) {
    match order {
        Order::Preorder => preorder(root, visited),
        Order::Inorder => inorder(root, visited),
        Order::Postorder => postorder(root, visited),
        Order::BreadthFirst => breadth_first(root, visited),
    }
}

fn preorder<'a, T>(root: Option<&'a Node<T>>, visited: &mut Vec<&'a T>) {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(&node.value);
        // Right first so the left subtree is popped (and visited) first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn inorder<'a, T>(root: Option<&'a Node<T>>, visited: &mut Vec<&'a T>) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        visited.push(&node.value);
        current = node.right();
    }
}

fn postorder<'a, T>(root: Option<&'a Node<T>>, visited: &mut Vec<&'a T>) {
    // Node, right, left is exactly postorder backwards.
    let start = visited.len();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(&node.value);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    visited[start..].reverse();
}

fn breadth_first<'a, T>(root: Option<&'a Node<T>>, visited: &mut Vec<&'a T>) {
    let mut unvisited = VecDeque::new();
    let mut current = root;
    while let Some(node) = current {
        visited.push(&node.value);
        unvisited.extend(node.left());
        unvisited.extend(node.right());
        current = unvisited.pop_front();
    }
}

/// A snapshot of a tree's values in some [`Order`].
///
/// Created by [`Tree::iter`](crate::Tree::iter), [`Tree::traverse`](crate::Tree::traverse) and
/// friends.
#[derive(Debug, Clone)]
pub struct Traversal<'a, T> {
    values: vec::IntoIter<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order, len: usize) -> Self {
        let mut visited = Vec::with_capacity(len);
        walk(root, order, &mut visited);
        Self {
            values: visited.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> DoubleEndedIterator for Traversal<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
