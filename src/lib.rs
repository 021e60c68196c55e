//! Ordered collections built on randomized binary search trees.
//!
//! The centerpiece is [`TreapSet`](treap/struct.TreapSet.html), a treap whose random priorities
//! are guaranteed to be unique by a [`PriorityGuard`](guard/struct.PriorityGuard.html): a
//! fixed-capacity probabilistic set that never forgets a priority once it has been handed out.
//! [`BstSet`](bst/struct.BstSet.html) is the plain, unbalanced binary search tree counterpart.

#[macro_use]
extern crate log;
extern crate probabilistic_collections;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bst;
pub mod guard;
pub mod treap;
