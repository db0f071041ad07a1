//! Symmetric prime distances: offsets `d` with `n - d` and `n + d` both prime.
//!
//! Each such `d` is a Goldbach decomposition `2n = (n - d) + (n + d)`.

/// Ascending distances `d` such that `n - d` and `n + d` are both in `primes`,
/// with `n + d < 2n` (so `d = 0` appears exactly when `n` itself is prime).
///
/// `primes` must be ascending; it should cover `[2, 2n)` for the result to be
/// the full decomposition set. Any ascending sub-list (e.g. twin primes) works
/// and restricts the search to that list. An empty result is a valid answer.
pub fn symmetric_distances(n: u64, primes: &[u64]) -> Vec<u64> {
    let upper = n.saturating_mul(2);
    let low = &primes[..primes.partition_point(|&p| p <= n)];
    let high = &primes[primes.partition_point(|&p| p < n)..primes.partition_point(|&p| p < upper)];

    // Walking `low` from the top yields distances in ascending order.
    low.iter()
        .rev()
        .map(|&p| n - p)
        .filter(|&d| {
            n.checked_add(d)
                .is_some_and(|mirror| high.binary_search(&mirror).is_ok())
        })
        .collect()
}

/// The prime pairs `(n - d, n + d)` summing to `2n` for each distance.
pub fn goldbach_pairs(n: u64, distances: &[u64]) -> Vec<(u64, u64)> {
    distances
        .iter()
        .filter_map(|&d| Some((n.checked_sub(d)?, n.checked_add(d)?)))
        .collect()
}
