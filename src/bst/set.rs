use crate::bst::node::Node;
use crate::bst::tree;

/// An ordered set implemented by an unbalanced binary search tree.
///
/// The value of any node is greater than all values in its left subtree and less than all values
/// in its right subtree. No balancing is done, so inserting values in sorted order degrades the
/// tree into a list. Removing a node with two children replaces its value with the maximum value
/// of its left subtree.
///
/// # Examples
/// ```
/// use guarded_treap::bst::BstSet;
///
/// let mut t = BstSet::new();
/// t.insert(5);
/// t.insert(3);
/// t.insert(8);
///
/// assert_eq!(t.size(), 3);
/// assert_eq!(t.preorder(), vec![&5, &3, &8]);
///
/// assert_eq!(t.remove(&5), Some(5));
/// assert_eq!(t.preorder(), vec![&3, &8]);
/// ```
pub struct BstSet<T> {
    root: tree::Tree<T>,
    size: usize,
}

impl<T: Ord> BstSet<T> {
    /// Constructs a new, empty `BstSet<T>`.
    pub fn new() -> Self {
        BstSet {
            root: None,
            size: 0,
        }
    }

    /// Inserts a value into the tree. Returns `false` if the value is already present.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::bst::BstSet;
    ///
    /// let mut t = BstSet::new();
    /// assert!(t.insert(1));
    /// assert!(!t.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.root, value);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Removes a value from the tree. Returns the value if it was present, and `None` otherwise.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::bst::BstSet;
    ///
    /// let mut t = BstSet::new();
    /// t.insert(1);
    /// assert_eq!(t.remove(&1), Some(1));
    /// assert_eq!(t.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let BstSet {
            ref mut root,
            ref mut size,
        } = *self;
        tree::remove(root, value).map(|value| {
            *size -= 1;
            value
        })
    }

    /// Checks if a value exists in the tree.
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the number of values in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree, `-1` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::bst::BstSet;
    ///
    /// let mut t = BstSet::new();
    /// assert_eq!(t.height(), -1);
    /// for value in 0..4 {
    ///     t.insert(value);
    /// }
    /// assert_eq!(t.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.root)
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the values of the tree in pre-order.
    pub fn preorder(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.size);
        tree::preorder(&self.root, &mut ret);
        ret
    }

    /// Returns the values of the tree in post-order.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::bst::BstSet;
    ///
    /// let mut t = BstSet::new();
    /// t.insert(2);
    /// t.insert(1);
    /// t.insert(3);
    /// assert_eq!(t.postorder(), vec![&1, &3, &2]);
    /// ```
    pub fn postorder(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.size);
        tree::postorder(&self.root, &mut ret);
        ret
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    pub fn iter(&self) -> BstSetIter<'_, T> {
        BstSetIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T: Ord> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BstSet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<'a, T: 'a + Ord> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = BstSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BstSet<T>`
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct BstSetIter<'a, T: 'a> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: 'a> Iterator for BstSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}
