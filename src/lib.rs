//! This crate exposes the foundational containers, linear and hierarchical, mostly for
//! educational purposes.
//!
//! ## Linear containers
//!
//! - [`StaticArray`]: a fixed number of slots, each set or unset.
//! - [`DynamicArray`]: a growable array with positional insert and delete.
//! - [`SinglyLinkedList`]: nodes that each own the next node.
//! - [`DoublyLinkedList`]: nodes linked both ways, with a cached tail.
//! - [`Queue`]: first-in-first-out.
//!
//! Each of them is a standalone container. None is built on another.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`). [`BinarySearchTree`]
//! does no balancing, so its height depends on insertion order and can reach `N`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! ## Errors
//!
//! Misuse such as an out-of-range index or dequeuing from an empty queue returns an
//! [`Error`]. Not finding a value is never an error.
//!
//! ## Logging
//!
//! Structural changes are reported through the [`log`] facade at `trace` level, and rejected
//! positions at `debug` level. Nothing is emitted unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod doubly;
pub mod dynamic_array;
pub mod error;
pub mod queue;
pub mod singly;
pub mod static_array;
pub mod tree;


pub use doubly::DoublyLinkedList;
pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use queue::Queue;
pub use singly::SinglyLinkedList;
pub use static_array::StaticArray;
pub use tree::BinarySearchTree;
