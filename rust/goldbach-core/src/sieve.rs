//! Sieve of Eratosthenes over `[2, bound)`, optionally resuming from a known prefix.

use num_integer::Roots;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::error::{array_len, PrimeError};

/// Strictly ascending list of primes starting at 2.
///
/// Serializes as a flat array of integers so a computed list can be cached
/// and fed back into [`sieve`] as a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimeList(Vec<u64>);

impl PrimeList {
    /// Wrap a vector after checking the structural invariants (starts at 2,
    /// strictly ascending). Primality of the entries is trusted.
    pub fn try_from_vec(primes: Vec<u64>) -> Result<Self, PrimeError> {
        validate_prefix(&primes)?;
        Ok(PrimeList(primes))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// The primes strictly below `bound`.
    pub fn below(&self, bound: u64) -> &[u64] {
        &self.0[..self.0.partition_point(|&p| p < bound)]
    }

    pub fn contains(&self, value: u64) -> bool {
        self.0.binary_search(&value).is_ok()
    }
}

impl Deref for PrimeList {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

/// Check that a prefix starts at 2 and is strictly ascending.
pub(crate) fn validate_prefix(primes: &[u64]) -> Result<(), PrimeError> {
    match primes.first() {
        None => return Ok(()),
        Some(&2) => {}
        Some(&first) => {
            return Err(PrimeError::InvalidPrefix(format!(
                "prefix must start at 2, found {first}"
            )))
        }
    }
    if let Some(pos) = primes.windows(2).position(|w| w[0] >= w[1]) {
        return Err(PrimeError::InvalidPrefix(format!(
            "prefix is not strictly ascending at index {}: {} then {}",
            pos + 1,
            primes[pos],
            primes[pos + 1]
        )));
    }
    Ok(())
}

/// All primes in `[2, bound)`, ascending.
///
/// When `prefix` is given it must be the complete list of primes below
/// `prefix.last() + 1`; only the range past its last element is sieved.
/// The result is identical to sieving from scratch. Entries of the prefix
/// at or above `bound` are dropped.
pub fn sieve(bound: u64, prefix: Option<&[u64]>) -> Result<PrimeList, PrimeError> {
    array_len(bound)?;
    if bound <= 2 {
        return Ok(PrimeList::default());
    }

    let known: &[u64] = match prefix {
        Some(prefix) => {
            validate_prefix(prefix)?;
            &prefix[..prefix.partition_point(|&p| p < bound)]
        }
        None => &[],
    };

    let start = known.last().map_or(2, |&p| p + 1);
    // Largest p with p * p < bound.
    let root = (bound - 1).sqrt();
    let mut composite = vec![false; array_len(bound - start)?];

    if !known.is_empty() {
        log::debug!(
            "resuming sieve at {} with {} known primes (segment of {})",
            start,
            known.len(),
            composite.len()
        );
    }

    for &p in known.iter().take_while(|&&p| p <= root) {
        strike_multiples(p, start, bound, &mut composite);
    }

    let mut primes = known.to_vec();
    for offset in 0..composite.len() {
        if composite[offset] {
            continue;
        }
        let p = start + offset as u64;
        primes.push(p);
        if p <= root {
            strike_multiples(p, start, bound, &mut composite);
        }
    }

    Ok(PrimeList(primes))
}

/// Mark every multiple `m >= p * p` of `p` inside the segment `[start, bound)`.
fn strike_multiples(p: u64, start: u64, bound: u64, composite: &mut [bool]) {
    let mut m = (p * p).max(start.div_ceil(p) * p);
    while m < bound {
        composite[(m - start) as usize] = true;
        m += p;
    }
}
