//! Twin primes and their share of the primes in Goldbach decompositions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Primes of the list that have a partner at distance 2 in the same list.
///
/// Scans adjacent pairs of the ascending list and marks both members of every
/// gap of exactly 2; the result keeps list order with each prime at most once,
/// including the last element of the list.
pub fn twin_primes(primes: &[u64]) -> Vec<u64> {
    let mut is_twin = vec![false; primes.len()];
    for (i, pair) in primes.windows(2).enumerate() {
        if pair[1].checked_sub(pair[0]) == Some(2) {
            is_twin[i] = true;
            is_twin[i + 1] = true;
        }
    }

    primes
        .iter()
        .zip(&is_twin)
        .filter_map(|(&p, &twin)| twin.then_some(p))
        .collect()
}

/// How many of the primes used by the decompositions of `2n` are twin primes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwinAbundance {
    /// Distinct decomposition primes that are twins.
    pub count: usize,
    /// `count` over the number of distinct decomposition primes.
    pub fraction: f64,
}

/// Twin-prime involvement in the symmetric distances of `n`.
///
/// Rebuilds the distinct primes `{n - d, n + d}` (a prime `n` with `d = 0`
/// counts once) and intersects them with `twin_primes`, which must be
/// ascending. Returns `None` when the abundance is undefined: `n <= 1`, or no
/// decomposition prime exists.
pub fn twin_abundance(n: u64, distances: &[u64], twin_primes: &[u64]) -> Option<TwinAbundance> {
    if n <= 1 {
        return None;
    }

    let involved: BTreeSet<u64> = distances
        .iter()
        .flat_map(|&d| [n.checked_sub(d), n.checked_add(d)])
        .flatten()
        .collect();
    if involved.is_empty() {
        return None;
    }

    let count = involved
        .iter()
        .filter(|p| twin_primes.binary_search(p).is_ok())
        .count();

    Some(TwinAbundance {
        count,
        fraction: count as f64 / involved.len() as f64,
    })
}
