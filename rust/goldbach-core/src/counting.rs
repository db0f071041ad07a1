//! Prime-counting function π(n) and its Gauss approximation n / ln(n).

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::error::{array_len, PrimeError};

/// `counts[i]` = number of primes strictly less than `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountingArray(Vec<u64>);

impl CountingArray {
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// The first `bound` entries, if the array is that long.
    pub fn truncated(&self, bound: usize) -> Option<CountingArray> {
        self.0.get(..bound).map(|head| CountingArray(head.to_vec()))
    }
}

impl Deref for CountingArray {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

/// Build π for every index in `0..bound` from an ascending prime list.
///
/// Primes at or above `bound - 1` never contribute; the list only needs to
/// cover `[2, bound - 1)` for the array to be exact.
pub fn pi_of_n(bound: u64, primes: &[u64]) -> Result<CountingArray, PrimeError> {
    let len = array_len(bound)?;
    let mut counts = Vec::with_capacity(len);
    let mut remaining = primes.iter().peekable();
    let mut below = 0u64;

    for i in 0..bound {
        while remaining.next_if(|&&p| p < i).is_some() {
            below += 1;
        }
        counts.push(below);
    }

    Ok(CountingArray(counts))
}

/// Gauss approximation `i / ln(i)` for every index in `0..bound`.
///
/// Entries 0 and 1 are 0 (the quotient is undefined there); for `bound <= 2`
/// the whole array is zeros.
pub fn gauss_pi(bound: u64) -> Result<Vec<f64>, PrimeError> {
    let len = array_len(bound)?;
    if bound <= 2 {
        return Ok(vec![0.0; len]);
    }

    let mut approx = Vec::with_capacity(len);
    approx.extend([0.0, 0.0]);
    approx.extend((2..bound).map(|i| {
        let x = i as f64;
        x / x.ln()
    }));
    Ok(approx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES_50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    const PI_50: [u64; 50] = [
        0, 0, 0, 1, 2, 2, 3, 3, 4, 4, //
        4, 4, 5, 5, 6, 6, 6, 6, 7, 7, //
        8, 8, 8, 8, 9, 9, 9, 9, 9, 9, //
        10, 10, 11, 11, 11, 11, 11, 11, 12, 12, //
        12, 12, 13, 13, 14, 14, 14, 14, 15, 15,
    ];

    #[test]
    fn test_pi_of_n_below_50() {
        let pi = pi_of_n(50, &PRIMES_50).unwrap();
        assert_eq!(pi.as_slice(), &PI_50);
        assert_eq!(pi[40], 12);
    }

    #[test]
    fn test_pi_of_n_shorter_bound() {
        let pi = pi_of_n(30, &PRIMES_50).unwrap();
        assert_eq!(pi.as_slice(), &PI_50[..30]);
    }

    #[test]
    fn test_pi_of_n_edges() {
        assert!(pi_of_n(0, &PRIMES_50).unwrap().is_empty());
        assert_eq!(pi_of_n(2, &PRIMES_50).unwrap().as_slice(), &[0, 0]);
        assert_eq!(pi_of_n(5, &[]).unwrap().as_slice(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_counting_array_truncated() {
        let pi = pi_of_n(50, &PRIMES_50).unwrap();
        assert_eq!(pi.truncated(10).unwrap().as_slice(), &PI_50[..10]);
        assert!(pi.truncated(51).is_none());
    }

    #[test]
    fn test_gauss_pi() {
        assert_eq!(gauss_pi(2).unwrap(), vec![0.0, 0.0]);
        assert_eq!(gauss_pi(1).unwrap(), vec![0.0]);
        assert!(gauss_pi(0).unwrap().is_empty());

        let approx = gauss_pi(50).unwrap();
        assert_eq!(approx.len(), 50);
        assert_eq!(approx[0], 0.0);
        assert_eq!(approx[1], 0.0);
        assert_eq!(approx[40], 40.0 / 40.0f64.ln());
        assert_eq!(approx[2], 2.0 / 2.0f64.ln());
    }
}
