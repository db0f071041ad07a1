//! Error taxonomy shared by every prime-artifact computation.

use num_traits::ToPrimitive;

/// Failures reported synchronously to the caller.
///
/// An undefined twin abundance is not listed here: it is a regular
/// result (`None`) of [`crate::twin_abundance`], not a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimeError {
    #[error("invalid bound {bound}: {reason}")]
    InvalidBound { bound: i128, reason: &'static str },

    #[error("invalid prime prefix: {0}")]
    InvalidPrefix(String),

    #[error("no prime data available: neither a prime list nor a counting array was supplied")]
    MissingPrimeSource,

    #[error("unrecognized prime source: expected a counting array or a prime list")]
    UnrecognizedSource,

    #[error("counting array has length {len}, at least {required} entries are needed")]
    CountingArrayTooShort { len: usize, required: u64 },

    #[error("counting array is not monotone: pi[2 * {index}] < pi[{index}]")]
    DecreasingCountingArray { index: usize },
}

/// Convert a signed bound (CLI, config file) into the unsigned domain used by the engine.
pub fn checked_bound(raw: i64) -> Result<u64, PrimeError> {
    u64::try_from(raw).map_err(|_| PrimeError::InvalidBound {
        bound: raw as i128,
        reason: "bound must be non-negative",
    })
}

/// Length of an array indexed `0..bound`, if the host can address it.
pub(crate) fn array_len(bound: u64) -> Result<usize, PrimeError> {
    bound.to_usize().ok_or(PrimeError::InvalidBound {
        bound: bound as i128,
        reason: "bound exceeds the addressable array size",
    })
}
