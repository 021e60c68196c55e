use crate::bst::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn insert<T: Ord>(mut tree: &mut Tree<T>, value: T) -> bool {
    while let Some(ref mut node) = *tree {
        tree = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *tree = Some(Box::new(Node::new(value)));
    true
}

// Detaches the maximum node of a non-empty tree and returns its value.
fn remove_max<T>(mut tree: &mut Tree<T>) -> Option<T> {
    loop {
        match *tree {
            Some(ref node) if node.right.is_some() => {},
            _ => break,
        }
        tree = &mut tree.as_mut()?.right;
    }
    tree.take().map(|mut node| {
        *tree = node.left.take();
        node.value
    })
}

pub fn remove<T: Ord>(mut tree: &mut Tree<T>, value: &T) -> Option<T> {
    loop {
        let ordering = match *tree {
            Some(ref node) => value.cmp(&node.value),
            None => return None,
        };
        tree = match ordering {
            Ordering::Less => &mut tree.as_mut()?.left,
            Ordering::Greater => &mut tree.as_mut()?.right,
            Ordering::Equal => break,
        };
    }
    let mut node = tree.take()?;
    match (node.left.take(), node.right.take()) {
        (None, right) => {
            *tree = right;
            Some(node.value)
        },
        (left, None) => {
            *tree = left;
            Some(node.value)
        },
        (mut left, right) => {
            // Replace the value with its in-order predecessor.
            let ret = remove_max(&mut left).map(|max| mem::replace(&mut node.value, max));
            node.left = left;
            node.right = right;
            *tree = Some(node);
            ret
        },
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

// Frees the nodes of `tree` one at a time instead of through the recursive drop of `Box`.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

pub fn height<T>(tree: &Tree<T>) -> isize {
    let mut max_depth: isize = -1;
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((&**node, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        for child in [&node.left, &node.right].iter() {
            if let Some(child_node) = child {
                stack.push((&**child_node, depth + 1));
            }
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

pub fn preorder<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    let mut stack: Vec<&'a Node<T>> = tree.iter().map(|node| &**node).collect();
    while let Some(node) = stack.pop() {
        ret.push(&node.value);
        stack.extend(node.right.iter().map(|node| &**node));
        stack.extend(node.left.iter().map(|node| &**node));
    }
}

// Collects node, right, left and reverses that run into left, right, node.
pub fn postorder<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    let start = ret.len();
    let mut stack: Vec<&'a Node<T>> = tree.iter().map(|node| &**node).collect();
    while let Some(node) = stack.pop() {
        ret.push(&node.value);
        stack.extend(node.left.iter().map(|node| &**node));
        stack.extend(node.right.iter().map(|node| &**node));
    }
    ret[start..].reverse();
}
