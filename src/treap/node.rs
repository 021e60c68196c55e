use crate::treap::tree;
use std::mem;

/// A struct representing an internal node of a treap.
///
/// Nodes are exposed read-only through `TreapSet::root` so that the shape of the tree can be
/// inspected.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) priority: i32,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, priority: i32) -> Self {
        Node {
            value,
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in the node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority of the node. It is lower than the priority of any node below it.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the left child of the node.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of the node.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(|node| &**node)
    }

    pub(crate) fn is_heap_property_violated(&self, child: &tree::Tree<T>) -> bool {
        match child {
            Some(child_node) => child_node.priority < self.priority,
            None => false,
        }
    }

    // Promotes the right child into this position. No-op without a right child.
    pub(crate) fn rotate_left(&mut self) {
        if let Some(mut child) = self.right.take() {
            self.right = child.left.take();
            mem::swap(&mut *child, self);
            self.left = Some(child);
        }
    }

    // Promotes the left child into this position. No-op without a left child.
    pub(crate) fn rotate_right(&mut self) {
        if let Some(mut child) = self.left.take() {
            self.left = child.right.take();
            mem::swap(&mut *child, self);
            self.right = Some(child);
        }
    }
}
