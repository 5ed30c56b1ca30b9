//! Bit vector functionality.
use std::fmt::Debug;

use crate::error::Error;

/// A packed bit vector with a length fixed at construction.
///
/// Bits start cleared and are only ever set, never unset; there is no
/// `clear` operation.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given length in bits, all bits zero.
    ///
    /// Fails with [`Error::InvalidSize`] if `nbits` is zero.
    pub fn new(nbits: usize) -> Result<Self, Error> {
        if nbits == 0 {
            return Err(Error::InvalidSize);
        }
        let byte_length = if nbits % 8 == 0 {
            nbits / 8
        } else {
            1 + nbits / 8
        };

        Ok(Self {
            nbits,
            bytes: vec![0; byte_length],
        })
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. No-op if the bit is already set.
    ///
    /// Panics if `index` is out of range; callers are expected to reduce
    /// indices modulo the length.
    pub fn set(&mut self, index: usize) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        let byte_index = index / 8;
        let mask = 0x01 << (index % 8);

        self.bytes[byte_index] |= mask;
    }

    /// Check whether a bit is set. Same bounds behavior as [`BitVec::set`].
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        let byte_index = index / 8;
        let mask = 0x01 << (index % 8);

        self.bytes[byte_index] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
