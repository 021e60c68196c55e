use crate::bst::tree;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}
