//! A prefix tree (trie) over Unicode code points.
//!
//! This crate provides a `Trie`, a map from text keys to values that walks
//! keys one code point at a time. Besides exact lookups it reports, for any
//! query, how far the longest stored key reaches into it, which is what a
//! dictionary-based tokenizer needs to segment a stream of text.
//!
//! # Features
//!
//! - Insert, delete and exact lookup in O(k) where k is the key length
//! - Longest-matched-prefix reporting in bytes (text keys) or code points
//!   (`char` keys)
//! - Prefix matching and iteration
//! - Greedy longest-match segmentation
//!
//! The trie is not synchronized. Share it between threads behind a single
//! lock such as `std::sync::Mutex<Trie<V>>`.

mod iter;
mod lookup;
mod node;
mod segment;
mod symbols;
mod trie;

pub use iter::{Iter, Keys, Values};
pub use lookup::Lookup;
pub use segment::{Segment, Segments};
pub use symbols::AsSymbols;
pub use trie::Trie;

#[cfg(test)]
mod proptest_trie;
