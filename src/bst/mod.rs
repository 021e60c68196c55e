//! Plain binary search tree without any balancing.

mod node;
mod set;
mod tree;

pub use self::set::{BstSet, BstSetIter};
