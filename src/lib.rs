//! An ordered dictionary backed by an unbalanced binary search tree.
//!
//! This crate provides [`Dictionary`], a map from a totally ordered key type to a value
//! type. Nodes carry parent back-references so the tree can be walked in both directions,
//! and each dictionary owns a single internal cursor that can be moved across the keys in
//! sorted order.
//!
//! # Example
//!
//! ```
//! use bst_dict::Dictionary;
//!
//! let mut scores = Dictionary::new();
//! scores.set_value("Carol", 92);
//! scores.set_value("Alice", 100);
//! scores.set_value("Bob", 85);
//!
//! assert_eq!(scores.get_value(&"Bob"), Ok(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Walk the keys in ascending order with the cursor.
//! scores.begin().unwrap();
//! let mut names = Vec::new();
//! while scores.has_current() {
//!     names.push(*scores.current_key().unwrap());
//!     scores.next().unwrap();
//! }
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//!
//! // The in-order rendering is one "key : value" line per pair.
//! assert_eq!(scores.to_string(), "Alice : 100\nBob : 85\nCarol : 92\n");
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by compact handles, so the parent
//! relation is a plain index rather than a reference cycle. The tree is never rebalanced:
//! inserting keys in sorted order produces a list-shaped tree, which is why every walk in
//! this crate is iterative.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
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

mod error;
mod raw;

pub mod dictionary;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, Result};
