//! A Bloom filter over a fixed-size bit array, using enhanced double hashing
//! to derive the hash family.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use siphasher::sip::SipHasher13;

use crate::bitvec::BitVec;
use crate::error::Error;

/// Keys used for the two SipHash instantiations. Fixed at compile time so
/// that hash indices are stable across calls and across process runs.
const HASHER_KEYS: [[u8; 16]; 2] = [
    [
        94, 17, 205, 63, 142, 27, 248, 70, 113, 9, 185, 44, 230, 151, 76, 3,
    ],
    [
        212, 58, 131, 6, 97, 244, 19, 168, 85, 140, 33, 251, 62, 109, 196, 21,
    ],
];

/// A Bloom filter that keeps track of items of type `K`.
///
/// The filter owns a bit array of `capacity` bits and derives `hash_count`
/// bit indices per item. Items can be added but never removed: bits are only
/// ever set, so the set of "possibly present" items grows monotonically.
/// `contains` may report a false positive but never a false negative.
///
/// # Hash family
///
/// Rather than running `hash_count` independent hash functions, the filter
/// uses enhanced double hashing over two keyed SipHash-1-3 instances:
///
/// g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x) + i<sup>3</sup>) mod capacity
///
/// which Kirsch and Mitzenmacher showed preserves the asymptotic false
/// positive probability of truly independent hash functions (*Less Hashing,
/// Same Performance: Building a Better Bloom Filter*).
#[derive(Clone, Debug)]
pub struct BloomFilter<K> {
    bits: BitVec,
    nhashes: usize,
    hashers: [SipHasher13; 2],
    key: PhantomData<K>,
}

impl<K: Hash> BloomFilter<K> {
    /// Return a new Bloom filter with `capacity` bits, all zero, and
    /// `hash_count` hash-function slots.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if either parameter is
    /// zero. There is no way to resize a filter after construction.
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, Error> {
        if capacity == 0 || hash_count == 0 {
            return Err(Error::InvalidConfiguration {
                capacity,
                hash_count,
            });
        }
        let hashers = [
            SipHasher13::new_with_key(&HASHER_KEYS[0]),
            SipHasher13::new_with_key(&HASHER_KEYS[1]),
        ];

        Ok(BloomFilter {
            bits: BitVec::new(capacity)?,
            nhashes: hash_count,
            hashers,
            key: PhantomData,
        })
    }

    /// Return the `hash_count` bit indices for an item, each in
    /// `[0, capacity)`.
    ///
    /// The sequence is deterministic: the same item yields the same indices
    /// on every call and in every process, since the hasher keys are fixed.
    pub fn hash_indices<'a>(&'a self, item: &K) -> impl Iterator<Item = usize> + 'a {
        let (h1, h2) = self.sip_hashes(item);

        (0..self.nhashes as u64).map(move |i| self.index_hash(h1, h2, i))
    }

    /// Add an item to the filter, setting each of its bit indices to one.
    /// Idempotent with regards to each unique item.
    pub fn add(&mut self, item: &K) {
        let (h1, h2) = self.sip_hashes(item);

        for i in 0..self.nhashes as u64 {
            let index = self.index_hash(h1, h2, i);
            self.bits.set(index);
        }
    }

    /// Return whether an item is likely in the filter. A `false` result is
    /// authoritative: the item was never added. A `true` result may be a
    /// false positive, with probability roughly `(1 - e^(-k*n/m))^k` for
    /// `n` items added, `k` hash slots and `m` bits.
    pub fn contains(&self, item: &K) -> bool {
        self.hash_indices(item).all(|index| self.bits.is_set(index))
    }

    /// Return the number of bits in this filter (`m`).
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash-function slots used (`k`).
    pub fn hash_count(&self) -> usize {
        self.nhashes
    }

    /// Count the number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`. A saturated filter answers `true`
    /// for everything, so this is the number to watch when sizing.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    fn sip_hashes(&self, item: &K) -> (u64, u64) {
        let mut sip1 = self.hashers[0];
        let mut sip2 = self.hashers[1];

        item.hash(&mut sip1);
        item.hash(&mut sip2);

        let h1 = sip1.finish();
        let h2 = sip2.finish();

        (h1, h2)
    }

    fn index_hash(&self, h1: u64, h2: u64, i: u64) -> usize {
        let r = h1.wrapping_add(i.wrapping_mul(h2)).wrapping_add(i.pow(3));

        (r % self.capacity() as u64) as usize
    }
}

impl<K> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.nhashes == other.nhashes
    }
}

impl<K> Eq for BloomFilter<K> {}
