use crate::guard::{GuardConfig, Result};
use probabilistic_collections::bit_vec::BitVec;

/// A space-efficient probabilistic set of `i32` priorities.
///
/// The guard is made of several independent bit vectors, called slots, each with its own fixed
/// size. Recording a priority sets one bit in every slot, at the index of the normalized priority
/// modulo the slot size. A priority might be present only if its bit is set in every slot, so the
/// guard can report false positives but never false negatives. Bits are never cleared and the
/// slots never grow: no history of the recorded priorities is kept, so there is nothing to rehash.
///
/// # Examples
/// ```
/// use guarded_treap::guard::PriorityGuard;
///
/// let mut guard = PriorityGuard::new(&[5, 7]).unwrap();
///
/// assert!(!guard.might_contain(3));
/// assert!(guard.add(3));
/// assert!(guard.might_contain(3));
/// assert!(!guard.add(3));
///
/// assert_eq!(guard.len(), 1);
/// assert_eq!(guard.bit_count(), 12);
/// ```
pub struct PriorityGuard {
    slots: Vec<BitVec>,
    len: usize,
}

impl PriorityGuard {
    /// Constructs a new, empty `PriorityGuard` with one slot per entry of `slot_sizes`.
    ///
    /// Returns `Error::InvalidConfiguration` if `slot_sizes` is empty or contains a zero.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::PriorityGuard;
    ///
    /// assert!(PriorityGuard::new(&[1744, 2003]).is_ok());
    /// assert!(PriorityGuard::new(&[]).is_err());
    /// assert!(PriorityGuard::new(&[5, 0]).is_err());
    /// ```
    pub fn new(slot_sizes: &[usize]) -> Result<Self> {
        Self::from_config(&GuardConfig::new(slot_sizes.to_vec()))
    }

    /// Constructs a new, empty `PriorityGuard` from a `GuardConfig`.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::{GuardConfig, PriorityGuard};
    ///
    /// let guard = PriorityGuard::from_config(&GuardConfig::with_capacity(100)).unwrap();
    /// assert_eq!(guard.slot_count(), 4);
    /// ```
    pub fn from_config(config: &GuardConfig) -> Result<Self> {
        config.validate()?;
        debug!("creating priority guard with slot sizes {:?}", config.slot_sizes);
        Ok(Self::from_valid_sizes(&config.slot_sizes))
    }

    // Callers must have validated `slot_sizes`.
    pub(crate) fn from_valid_sizes(slot_sizes: &[usize]) -> Self {
        PriorityGuard {
            slots: slot_sizes.iter().map(|size| BitVec::new(*size)).collect(),
            len: 0,
        }
    }

    // Shifts the whole `i32` range onto `0..2^32` so that no index is negative.
    fn normalize(value: i32) -> u64 {
        (i64::from(value) - i64::from(i32::min_value())) as u64
    }

    fn slot_index(slot: &BitVec, normalized: u64) -> usize {
        (normalized % slot.len() as u64) as usize
    }

    /// Checks if a priority might have been recorded. Returns `false` only if the priority was
    /// definitely never recorded.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::PriorityGuard;
    ///
    /// let mut guard = PriorityGuard::new(&[5, 7]).unwrap();
    /// guard.add(-1);
    /// assert!(guard.might_contain(-1));
    /// assert!(!guard.might_contain(0));
    /// ```
    pub fn might_contain(&self, value: i32) -> bool {
        let normalized = Self::normalize(value);
        self.slots
            .iter()
            .all(|slot| slot.get(Self::slot_index(slot, normalized)) == Some(true))
    }

    /// Records a priority. Returns `false` without modifying the guard if the priority might
    /// already be present, and `true` otherwise.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::PriorityGuard;
    ///
    /// let mut guard = PriorityGuard::new(&[5, 7]).unwrap();
    /// assert!(guard.add(10));
    /// assert!(!guard.add(10));
    /// ```
    pub fn add(&mut self, value: i32) -> bool {
        if self.might_contain(value) {
            return false;
        }
        let normalized = Self::normalize(value);
        for slot in &mut self.slots {
            let index = Self::slot_index(slot, normalized);
            slot.set(index, true);
        }
        self.len += 1;
        true
    }

    /// Returns the number of priorities successfully recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no priority has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the size of each slot in construction order.
    pub fn slot_sizes(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.len()).collect()
    }

    /// Returns the total number of bits over all slots.
    pub fn bit_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.len()).sum()
    }
}

impl Default for PriorityGuard {
    fn default() -> Self {
        Self::from_valid_sizes(&GuardConfig::default().slot_sizes)
    }
}
