//! A Bloom filter for flagging previously-seen string values without
//! storing the values themselves.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for
//! queries to return: "possibly in set" or "definitely not in set".
//! Elements can be added to the set, but not removed; the more elements
//! that are added to the set, the larger the probability of false
//! positives. A false negative can never occur: once an item is added, the
//! filter answers positively for it forever.
//!
//! The filter is constructed from two explicit parameters: the bit-array
//! size `capacity` and the number of hash-function slots `hash_count`.
//! Both must be positive; construction fails otherwise. The filter owns its
//! bit array exclusively and has no process-wide lifecycle.
//!
//! The [`check_items`] helper layers a membership-checking discipline on
//! top of the filter: each item in an ordered stream is classified as
//! invalid, already seen, or newly recorded, and newly recorded items join
//! the filter's history before the next item is examined.
//!
//! # Example
//!
//! ```
//! use seenset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 3)?;
//!
//! filter.add(&"foo");
//! filter.add(&"bar");
//!
//! assert!(filter.contains(&"foo"));
//! assert!(filter.contains(&"bar"));
//! assert!(!filter.contains(&"baz"));
//! # Ok::<(), seenset::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod check;
pub mod error;

pub use bloom::BloomFilter;
pub use check::{check_items, Classification};
pub use error::Error;
