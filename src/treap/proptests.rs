use super::node::Node;
use super::set::TreapSet;
use crate::guard::PriorityGuard;

use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn validate_subtree(
    tree: Option<&Node<u16>>,
    lower: Option<u16>,
    upper: Option<u16>,
    parent_priority: Option<i32>,
    priorities: &mut HashSet<i32>,
) -> usize {
    let node = match tree {
        Some(node) => node,
        None => return 0,
    };
    if let Some(lower) = lower {
        assert!(node.value > lower, "left subtree holds a value out of order");
    }
    if let Some(upper) = upper {
        assert!(node.value < upper, "right subtree holds a value out of order");
    }
    if let Some(parent_priority) = parent_priority {
        assert!(node.priority > parent_priority, "child priority must exceed its parent's");
    }
    assert!(priorities.insert(node.priority), "priority {} used twice", node.priority);
    1 + validate_subtree(node.left(), lower, Some(node.value), Some(node.priority), priorities)
        + validate_subtree(node.right(), Some(node.value), upper, Some(node.priority), priorities)
}

fn validate_treap(t: &TreapSet<u16>) {
    let mut priorities = HashSet::new();
    let count = validate_subtree(t.root(), None, None, None, &mut priorities);
    assert_eq!(count, t.size(), "size must match reachable node count");
    for priority in &priorities {
        assert!(t.guard().might_contain(*priority), "guard lost priority {}", priority);
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    InsertWithPriority(u16, i32),
    Remove(u16),
    Contains(u16),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let value = 0u16..512;
    let op = prop_oneof![
        40 => value.clone().prop_map(Op::Insert),
        10 => (value.clone(), any::<i32>()).prop_map(|(v, p)| Op::InsertWithPriority(v, p)),
        30 => value.clone().prop_map(Op::Remove),
        20 => value.prop_map(Op::Contains),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: TreapSet<u16> = TreapSet::with_capacity(1000);
        let mut m: BTreeSet<u16> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    prop_assert_eq!(t.insert(value), m.insert(value));
                    prop_assert!(t.contains(&value));
                }
                Op::InsertWithPriority(value, priority) => {
                    let flagged = t.guard().might_contain(priority);
                    let inserted = t.insert_with_priority(value, priority);
                    if flagged {
                        prop_assert!(!inserted);
                    } else {
                        prop_assert_eq!(inserted, m.insert(value));
                    }
                    prop_assert!(t.guard().might_contain(priority) || !inserted);
                }
                Op::Remove(value) => {
                    prop_assert_eq!(t.remove(&value), m.take(&value));
                    prop_assert!(!t.contains(&value));
                }
                Op::Contains(value) => {
                    prop_assert_eq!(t.contains(&value), m.contains(&value));
                }
            }

            prop_assert_eq!(t.size(), m.len());
            validate_treap(&t);
        }

        let got: Vec<u16> = t.iter().cloned().collect();
        let expected: Vec<u16> = m.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_guard_has_no_false_negatives(values in prop::collection::vec(any::<i32>(), 0..=300)) {
        let mut guard = PriorityGuard::new(&[4099, 5003, 7001]).unwrap();
        let mut added = Vec::new();
        for value in values {
            let was_flagged = guard.might_contain(value);
            let result = guard.add(value);
            prop_assert_eq!(result, !was_flagged);
            if result {
                added.push(value);
            }
            prop_assert!(!guard.add(value));
            for value in &added {
                prop_assert!(guard.might_contain(*value));
            }
        }
        prop_assert_eq!(guard.len(), added.len());
    }
}
