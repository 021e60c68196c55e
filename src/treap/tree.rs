use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

enum RemovalCases {
    RemoveNode,
    RotateLeft,
    RotateRight,
}

// Returns `true` if a new node was created. The search path is detached into `path` on the way
// down and reattached on the way back up, rotating wherever the heap property is violated, so
// that list-shaped trees do not exhaust the call stack.
pub fn insert<T: Ord>(tree: &mut Tree<T>, value: T, priority: i32) -> bool {
    let mut path = Vec::new();
    let mut curr = tree.take();
    let inserted = loop {
        let mut node = match curr {
            Some(node) => node,
            None => {
                curr = Some(Box::new(Node::new(value, priority)));
                break true;
            },
        };
        let ordering = value.cmp(&node.value);
        if ordering == Ordering::Equal {
            curr = Some(node);
            break false;
        }
        curr = match ordering {
            Ordering::Less => node.left.take(),
            _ => node.right.take(),
        };
        path.push((node, ordering));
    };

    while let Some((mut node, ordering)) = path.pop() {
        match ordering {
            Ordering::Less => {
                node.left = curr;
                if node.is_heap_property_violated(&node.left) {
                    node.rotate_right();
                }
            },
            _ => {
                node.right = curr;
                if node.is_heap_property_violated(&node.right) {
                    node.rotate_left();
                }
            },
        }
        curr = Some(node);
    }
    *tree = curr;
    inserted
}

fn get_removal_rotation_case<T>(tree: &Tree<T>) -> Option<RemovalCases> {
    tree.as_ref().map(|node| match (&node.left, &node.right) {
        (Some(left_node), Some(right_node)) => {
            if left_node.priority < right_node.priority {
                RemovalCases::RotateRight
            } else {
                RemovalCases::RotateLeft
            }
        },
        (Some(_), None) => RemovalCases::RotateRight,
        (None, Some(_)) => RemovalCases::RotateLeft,
        (None, None) => RemovalCases::RemoveNode,
    })
}

// Rotates the root of `tree` down along its lower priority child until it is a leaf, then
// detaches it.
fn rotate_down<T>(mut tree: &mut Tree<T>) -> Option<T> {
    loop {
        tree = match get_removal_rotation_case(tree)? {
            RemovalCases::RotateRight => {
                let node = tree.as_mut()?;
                node.rotate_right();
                &mut node.right
            },
            RemovalCases::RotateLeft => {
                let node = tree.as_mut()?;
                node.rotate_left();
                &mut node.left
            },
            RemovalCases::RemoveNode => return tree.take().map(|node| node.value),
        };
    }
}

pub fn remove<T: Ord>(mut tree: &mut Tree<T>, value: &T) -> Option<T> {
    loop {
        let ordering = match *tree {
            Some(ref node) => value.cmp(&node.value),
            None => return None,
        };
        let node = match ordering {
            Ordering::Equal => return rotate_down(tree),
            _ => tree.as_mut()?,
        };
        tree = match ordering {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }
}

// Frees the nodes of `tree` one at a time instead of through the recursive drop of `Box`.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

pub fn contains<T: Ord>(tree: &Tree<T>, value: &T) -> bool {
    let mut curr = tree;
    while let Some(node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

// Longest root-to-leaf path in edges, or -1 for an empty tree.
pub fn height<T>(tree: &Tree<T>) -> isize {
    let mut max_depth: isize = -1;
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((&**node, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        if let Some(left_node) = &node.left {
            stack.push((&**left_node, depth + 1));
        }
        if let Some(right_node) = &node.right {
            stack.push((&**right_node, depth + 1));
        }
    }
    max_depth
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        &curr.value
    })
}
