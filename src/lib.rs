//! An AVL tree map for Rust.
//!
//! This crate provides [`AvlTreeMap`], an ordered key-value map that mirrors the
//! standard library's `BTreeMap` API but is backed by a strictly height-balanced
//! binary search tree:
//!
//! - every node's subtrees differ in height by at most one, so `insert`,
//!   `remove` and `get` are O(log n) in the worst case;
//! - an insertion triggers at most one single or double rotation; a removal
//!   may rotate once per level on its way back to the root;
//! - [`height`](AvlTreeMap::height) exposes the resulting tree height.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTreeMap;
//!
//! let mut scores = AvlTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Iteration is in key order.
//! let names: Vec<_> = scores.keys().copied().collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//!
//! scores.remove(&"Alice");
//! assert_eq!(scores.first_key_value(), Some((&"Bob", &85)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Drop-in replacement** - API mirrors `std::collections::BTreeMap`
//! - **No unsafe code** - nodes live in an index-linked arena
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and linked by index: `left`/`right` are the
//! owning edges and `parent` is a plain back-reference used to walk upward while
//! rebalancing. Each node caches its balance factor (right height minus left
//! height), which the insert and remove paths update incrementally instead of
//! recomputing subtree heights. Rotation events are reported through the `log`
//! facade at trace level.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod avl_tree_map;

pub use avl_tree_map::AvlTreeMap;
