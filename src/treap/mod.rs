//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod node;
mod set;
mod tree;

#[cfg(test)]
mod proptests;

pub use self::node::Node;
pub use self::set::{TreapSet, TreapSetIntoIter, TreapSetIter};
