use crate::guard::{GuardConfig, PriorityGuard};
use crate::treap::node::Node;
use crate::treap::tree;
use rand::{self, Rng, SeedableRng, XorShiftRng};

/// An ordered set implemented by a treap with guaranteed-unique priorities.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a value and a priority. The value of any node is greater than all values in its
/// left subtree and less than all values in its right subtree. The priority of a node is less
/// than the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of values.
///
/// Every priority handed to a node is recorded in a `PriorityGuard`, and a candidate priority is
/// redrawn until the guard reports it as unused. Since the guard has no false negatives, no two
/// nodes ever share a priority. Priorities are never released, even when their node is removed.
///
/// # Examples
/// ```
/// use guarded_treap::treap::TreapSet;
///
/// let mut t = TreapSet::new();
/// t.insert(0);
/// t.insert(3);
///
/// assert_eq!(t.size(), 2);
/// assert!(t.contains(&3));
/// assert_eq!(t.min(), Some(&0));
///
/// assert_eq!(t.remove(&0), Some(0));
/// assert_eq!(t.remove(&1), None);
/// ```
pub struct TreapSet<T> {
    root: tree::Tree<T>,
    guard: PriorityGuard,
    rng: XorShiftRng,
    size: usize,
}

impl<T: Ord> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>` guarded by `GuardConfig::default()`. The default
    /// guard is sized for a few hundred values; use `with_capacity` for larger sets.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let t: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_guard(PriorityGuard::default())
    }

    /// Constructs a new, empty `TreapSet<T>` whose guard is sized for roughly `expected` values.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let t: TreapSet<u32> = TreapSet::with_capacity(100_000);
    /// assert_eq!(t.guard().slot_count(), 4);
    /// ```
    pub fn with_capacity(expected: usize) -> Self {
        let config = GuardConfig::with_capacity(expected);
        Self::with_guard(PriorityGuard::from_valid_sizes(&config.slot_sizes))
    }

    /// Constructs a new, empty `TreapSet<T>` that draws its priorities against `guard`.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::PriorityGuard;
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let guard = PriorityGuard::new(&[10_007, 10_009]).unwrap();
    /// let t: TreapSet<u32> = TreapSet::with_guard(guard);
    /// ```
    pub fn with_guard(guard: PriorityGuard) -> Self {
        TreapSet {
            root: None,
            guard,
            rng: rand::weak_rng(),
            size: 0,
        }
    }

    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator seeded
    /// with `seed`, so that the shape of the tree is reproducible.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::PriorityGuard;
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::with_guard_and_seed(PriorityGuard::default(), [1, 2, 3, 4]);
    /// t.insert(1);
    /// ```
    pub fn with_guard_and_seed(guard: PriorityGuard, seed: [u32; 4]) -> Self {
        TreapSet {
            root: None,
            guard,
            rng: SeedableRng::from_seed(seed),
            size: 0,
        }
    }

    // Draws priorities until the guard reports one as unused. There is no retry cap: once the
    // guard is saturated this never returns, so the guard must be sized well above the number of
    // values ever inserted.
    fn next_priority(&mut self) -> i32 {
        loop {
            let priority = self.rng.gen::<i32>();
            if !self.guard.might_contain(priority) {
                return priority;
            }
            trace!("priority {} rejected by guard, redrawing", priority);
        }
    }

    // Assumes `priority` is not flagged by the guard.
    fn insert_unguarded(&mut self, value: T, priority: i32) -> bool {
        let TreapSet {
            ref mut root,
            ref mut guard,
            ref mut size,
            ..
        } = *self;
        let inserted = tree::insert(root, value, priority);
        if inserted {
            let recorded = guard.add(priority);
            debug_assert!(recorded, "priority {} was already flagged by the guard", priority);
            *size += 1;
        }
        inserted
    }

    /// Inserts a value into the treap with a fresh random priority. Returns `false` and leaves
    /// the treap unchanged if the value is already present.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert!(t.insert(1));
    /// assert!(!t.insert(1));
    /// assert_eq!(t.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let priority = self.next_priority();
        self.insert_unguarded(value, priority)
    }

    /// Inserts a value into the treap with an explicit priority. If the guard reports the
    /// priority as possibly used, or the value is already present, the insertion is skipped and
    /// `false` is returned.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert!(t.insert_with_priority(5, 10));
    /// assert!(!t.insert_with_priority(3, 10));
    /// assert!(!t.contains(&3));
    /// ```
    pub fn insert_with_priority(&mut self, value: T, priority: i32) -> bool {
        if self.guard.might_contain(priority) {
            debug!("skipping insert, priority {} is already in use", priority);
            return false;
        }
        self.insert_unguarded(value, priority)
    }

    /// Removes a value from the treap. Returns the value if it was present, and `None`
    /// otherwise. The priority of the removed node stays recorded in the guard.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// assert_eq!(t.remove(&1), Some(1));
    /// assert_eq!(t.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let TreapSet {
            ref mut root,
            ref mut size,
            ..
        } = *self;
        tree::remove(root, value).map(|value| {
            *size -= 1;
            value
        })
    }

    /// Checks if a value exists in the treap.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the number of values in the treap.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// assert_eq!(t.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of values in the treap.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the treap has no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the treap: `-1` if it is empty, and otherwise the number of edges on
    /// the longest path from the root to a leaf. Runs in `O(N)` time.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert_eq!(t.height(), -1);
    /// t.insert(1);
    /// assert_eq!(t.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.root)
    }

    /// Returns the minimum value of the treap. Returns `None` if the treap is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the treap. Returns `None` if the treap is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the root node of the treap, the node with the lowest priority.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert_with_priority(2, 7);
    /// t.insert_with_priority(1, 3);
    ///
    /// let root = t.root().unwrap();
    /// assert_eq!(*root.value(), 1);
    /// assert_eq!(root.priority(), 3);
    /// assert_eq!(root.right().map(|node| *node.value()), Some(2));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the guard recording the priorities this treap has handed out.
    pub fn guard(&self) -> &PriorityGuard {
        &self.guard
    }

    /// Returns an iterator over the treap. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(3);
    /// t.insert(1);
    ///
    /// let mut iterator = t.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_, T> {
        TreapSetIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T: Ord> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> IntoIterator for TreapSet<T> {
    type Item = T;
    type IntoIter = TreapSetIntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        TreapSetIntoIter {
            current: self.root.take(),
            stack: Vec::new(),
        }
    }
}

impl<T> Drop for TreapSet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<'a, T: 'a + Ord> IntoIterator for &'a TreapSet<T> {
    type Item = &'a T;
    type IntoIter = TreapSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T>`
///
/// This iterator traverses the elements of a treap in-order and yields owned values.
pub struct TreapSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Drop for TreapSetIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `TreapSet<T>`
///
/// This iterator traverses the elements of a treap in-order and yields immutable references.
pub struct TreapSetIter<'a, T: 'a> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: 'a> Iterator for TreapSetIter<'a, T> {
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
