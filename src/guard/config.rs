use crate::guard::{Error, Result};

const DEFAULT_SLOT_SIZES: [usize; 4] = [1744, 2003, 4124, 6421];
const CAPACITY_MULTIPLIERS: [usize; 4] = [4, 5, 7, 11];
// Keeps the largest slot at the prime 4_294_967_291, below the 2^32 distinct priorities.
const MAX_EXPECTED: usize = 390_451_571;

/// The slot sizes of a `PriorityGuard`.
///
/// Larger slots lower the false positive rate of the guard at the cost of memory. Each slot
/// should be several times larger than the number of priorities the guard will ever record, and
/// the slots should be pairwise distinct in size.
///
/// # Examples
/// ```
/// use guarded_treap::guard::GuardConfig;
///
/// let config = GuardConfig::new(vec![5, 7]);
/// assert!(config.validate().is_ok());
///
/// let config = GuardConfig::new(vec![5, 0]);
/// assert!(config.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    pub slot_sizes: Vec<usize>,
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

fn next_prime(mut n: usize) -> usize {
    while !is_prime(n) {
        n += 1;
    }
    n
}

impl GuardConfig {
    /// Constructs a configuration with explicit slot sizes.
    pub fn new(slot_sizes: Vec<usize>) -> Self {
        GuardConfig { slot_sizes }
    }

    /// Constructs a configuration sized for a guard that will record roughly `expected`
    /// priorities. The slots are four strictly increasing primes, each at least 4, 5, 7 and 11
    /// times `expected`. Capacities above 390_451_571 are clamped, since no slot can use more
    /// indices than there are distinct priorities.
    ///
    /// # Examples
    /// ```
    /// use guarded_treap::guard::GuardConfig;
    ///
    /// let config = GuardConfig::with_capacity(100);
    /// assert_eq!(config.slot_sizes, vec![401, 503, 701, 1103]);
    /// ```
    pub fn with_capacity(expected: usize) -> Self {
        let expected = expected.max(1).min(MAX_EXPECTED);
        let mut slot_sizes: Vec<usize> = Vec::with_capacity(CAPACITY_MULTIPLIERS.len());
        for multiplier in CAPACITY_MULTIPLIERS.iter() {
            let mut lower_bound = expected.saturating_mul(*multiplier);
            if let Some(prev) = slot_sizes.last() {
                lower_bound = lower_bound.max(prev + 1);
            }
            slot_sizes.push(next_prime(lower_bound));
        }
        GuardConfig { slot_sizes }
    }

    /// Checks that there is at least one slot and that every slot has a positive size.
    pub fn validate(&self) -> Result<()> {
        if self.slot_sizes.is_empty() {
            return Err(Error::InvalidConfiguration(String::from("no slot sizes given")));
        }
        if let Some(index) = self.slot_sizes.iter().position(|size| *size == 0) {
            return Err(Error::InvalidConfiguration(format!("slot {} has size 0", index)));
        }
        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        GuardConfig::new(DEFAULT_SLOT_SIZES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::{is_prime, GuardConfig};
    use crate::guard::Error;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_default() {
        let config = GuardConfig::default();
        assert_eq!(config.slot_sizes, vec![1744, 2003, 4124, 6421]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let config = GuardConfig::new(Vec::new());
        match config.validate() {
            Err(Error::InvalidConfiguration(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_zero_size() {
        let config = GuardConfig::new(vec![3, 0, 5]);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidConfiguration(String::from("slot 1 has size 0"))),
        );
    }

    #[test]
    fn test_with_capacity() {
        let config = GuardConfig::with_capacity(1000);
        assert_eq!(config.slot_sizes.len(), 4);
        for window in config.slot_sizes.windows(2) {
            assert!(window[0] < window[1]);
        }
        for (size, multiplier) in config.slot_sizes.iter().zip([4, 5, 7, 11].iter()) {
            assert!(is_prime(*size));
            assert!(*size >= 1000 * multiplier);
        }
    }

    #[test]
    fn test_with_capacity_small() {
        assert_eq!(GuardConfig::with_capacity(0).slot_sizes, vec![5, 7, 11, 13]);
        assert_eq!(GuardConfig::with_capacity(1).slot_sizes, vec![5, 7, 11, 13]);
    }

    #[test]
    fn test_with_capacity_clamped() {
        let config = GuardConfig::with_capacity(usize::max_value());
        assert_eq!(config, GuardConfig::with_capacity(390_451_571));
        assert_eq!(config.slot_sizes.last(), Some(&4_294_967_291));
        for window in config.slot_sizes.windows(2) {
            assert!(window[0] < window[1]);
        }
        for size in &config.slot_sizes {
            assert!(is_prime(*size));
        }
    }

    #[test]
    fn test_serde() {
        let config = GuardConfig::new(vec![5, 7]);
        assert_tokens(
            &config,
            &[
                Token::Struct { name: "GuardConfig", len: 1 },
                Token::Str("slot_sizes"),
                Token::Seq { len: Some(2) },
                Token::U64(5),
                Token::U64(7),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }
}
