//! Error types.
use thiserror::Error;

/// Errors returned when constructing a bit vector or filter.
///
/// Construction errors are fatal: there is no partially-built filter to
/// recover, and nothing to retry. Once construction succeeds, `add` and
/// `contains` cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bit vector was requested with a length of zero.
    #[error("bit vector length must be positive")]
    InvalidSize,

    /// A filter was requested with a zero capacity or zero hash count.
    #[error("invalid filter configuration: capacity={capacity}, hash_count={hash_count}")]
    InvalidConfiguration {
        /// The rejected bit-array size.
        capacity: usize,
        /// The rejected number of hash functions.
        hash_count: usize,
    },
}
