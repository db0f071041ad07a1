//! Prime counts over the Bertrand interval `[n, 2n)`.

use crate::error::{array_len, PrimeError};

/// Data a range count can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeSource<'a> {
    /// A π array, see [`crate::pi_of_n`]. Must hold at least `2 * bound` entries.
    CountingArray(&'a [u64]),
    /// An ascending prime list covering `[2, 2 * bound)`.
    PrimeList(&'a [u64]),
}

/// Number of primes `p` in the list with `n <= p < 2n`.
pub fn primes_in_nto2n(n: u64, primes: &[u64]) -> u64 {
    let upper = n.saturating_mul(2);
    let lo = primes.partition_point(|&p| p < n);
    let hi = primes.partition_point(|&p| p < upper);
    hi.saturating_sub(lo) as u64
}

/// For each `i` in `0..bound`, the number of primes in `[i, 2i)`.
pub fn count_nto2n(bound: u64, source: PrimeSource<'_>) -> Result<Vec<u64>, PrimeError> {
    let len = array_len(bound)?;
    match source {
        PrimeSource::CountingArray(pi) => {
            let required = bound.checked_mul(2).ok_or(PrimeError::InvalidBound {
                bound: bound as i128,
                reason: "2 * bound overflows",
            })?;
            if (pi.len() as u64) < required {
                return Err(PrimeError::CountingArrayTooShort {
                    len: pi.len(),
                    required,
                });
            }
            (0..len)
                .map(|i| {
                    pi[2 * i]
                        .checked_sub(pi[i])
                        .ok_or(PrimeError::DecreasingCountingArray { index: i })
                })
                .collect()
        }
        PrimeSource::PrimeList(primes) => {
            Ok((0..bound).map(|i| primes_in_nto2n(i, primes)).collect())
        }
    }
}
