//! Membership checking over an ordered stream of candidate items.
//!
//! This is the boundary between the filter core and whatever supplies the
//! items: the checker validates each item, asks the filter about it, and
//! records newly seen items so that later occurrences in the same stream
//! classify as already seen. Rendering the outcome as human-readable text
//! is left to the caller.

use std::hash::Hash;

use crate::bloom::BloomFilter;

/// The outcome of checking one item against the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The item is empty or whitespace-only; the filter was not consulted.
    Invalid,
    /// The filter reports the item as (probably) seen before; the filter
    /// was not mutated.
    AlreadySeen,
    /// The filter had not seen the item; it has now been added.
    NewlyRecorded,
}

/// Check a finite stream of items against a filter, in order.
///
/// Each newly recorded item becomes part of the filter's history before the
/// next item is examined, so a duplicate later in the stream classifies as
/// [`Classification::AlreadySeen`].
///
/// Returns one `(item, classification)` pair per occurrence, in input
/// order. Duplicate items each keep their own entry; a keyed map would
/// silently collapse them.
///
/// Items are hashed as supplied; trimming is applied for validation only.
///
/// # Example
///
/// ```
/// use seenset::{BloomFilter, Classification, check_items};
///
/// let mut filter = BloomFilter::new(1000, 3)?;
/// filter.add(&"password123");
///
/// let results = check_items(&mut filter, ["password123", "newpassword"]);
/// assert_eq!(results[0].1, Classification::AlreadySeen);
/// assert_eq!(results[1].1, Classification::NewlyRecorded);
/// # Ok::<(), seenset::Error>(())
/// ```
pub fn check_items<S, I>(filter: &mut BloomFilter<S>, items: I) -> Vec<(S, Classification)>
where
    S: Hash + AsRef<str>,
    I: IntoIterator<Item = S>,
{
    let mut results = Vec::new();

    for item in items {
        let classification = if item.as_ref().trim().is_empty() {
            Classification::Invalid
        } else if filter.contains(&item) {
            Classification::AlreadySeen
        } else {
            filter.add(&item);
            Classification::NewlyRecorded
        };
        results.push((item, classification));
    }
    results
}
